use crate::config::Config;
use crate::content::Portfolio;
use crate::events::terminal::{Command, Handler as TerminalEventHandler};
use crate::logger::{self, LogBuffer};
use crate::platform::{SystemClipboard, SystemClock};
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;

type Backend = CrosstermBackend<Stdout>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let logs = LogBuffer::default();
        logger::init(LevelFilter::Debug, logs.clone())?;

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            info!("Using configuration from {}.", path.display());
        }
        let portfolio = match &config.content_file {
            Some(path) => {
                info!("Loading portfolio content from {}...", path.display());
                Portfolio::from_file(path)?
            }
            None => Portfolio::bundled()?,
        };
        let theme = Theme::by_name(&config.theme_name);

        let mut state = State::new(
            portfolio,
            Arc::new(SystemClipboard),
            SystemClock,
            theme,
            logs,
        );
        state.set_log_visible(config.show_log);

        let mut app = App { state };
        let result = app.start_ui().await;
        app.state.teardown();

        info!("Exiting application...");
        result
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored whether or not
    /// the loop ends in an error.
    ///
    async fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run(&mut self, terminal: &mut Terminal<Backend>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            match terminal_event_handler.handle_next(&mut self.state)? {
                Command::None => {}
                Command::CopyContact => {
                    self.state.copy_contact().await;
                }
                Command::OpenLink(url) => {
                    debug!("Opening {}...", url);
                    if let Err(e) = open::that(&url) {
                        error!("Failed to open {}: {}", url, e);
                    }
                }
                Command::Exit => {
                    debug!("Received application exit request.");
                    break;
                }
            }
        }
        Ok(())
    }
}
