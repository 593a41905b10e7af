use crate::state::{Section, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Work the application loop must carry out after an event, beyond the
/// synchronous state changes already applied.
///
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    None,
    CopyContact,
    OpenLink(String),
    Exit,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and apply it to state. Returns the command
    /// the caller still has to carry out.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<Command> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => {
                state.on_tick();
                Ok(Command::None)
            }
        }
    }
}

/// Apply a key press to state and return the resulting command.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::None;
    }
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('q'),
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            Command::Exit
        }
        KeyEvent {
            code: KeyCode::Char('i'),
            ..
        } => {
            state.select_section(Section::Information);
            Command::None
        }
        KeyEvent {
            code: KeyCode::Char('p'),
            ..
        } => {
            state.select_section(Section::Projects);
            Command::None
        }
        KeyEvent {
            code: KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('h') | KeyCode::Char('l'),
            ..
        } => {
            state.toggle_section();
            Command::None
        }
        KeyEvent {
            code: KeyCode::Char('c') | KeyCode::Char('y'),
            ..
        } => Command::CopyContact,
        KeyEvent {
            code: KeyCode::Char('j') | KeyCode::Down,
            ..
        } => {
            match state.active_section() {
                Section::Information => state.scroll_down(),
                Section::Projects => state.next_project(),
            };
            Command::None
        }
        KeyEvent {
            code: KeyCode::Char('k') | KeyCode::Up,
            ..
        } => {
            match state.active_section() {
                Section::Information => state.scroll_up(),
                Section::Projects => state.previous_project(),
            };
            Command::None
        }
        KeyEvent {
            code: KeyCode::Enter | KeyCode::Char('o'),
            ..
        } if state.active_section() == Section::Projects => match state.selected_project_link() {
            Some(url) => Command::OpenLink(url),
            None => {
                debug!("Selected project has no link.");
                Command::None
            }
        },
        KeyEvent {
            code: KeyCode::Char(digit @ '1'..='9'),
            ..
        } if state.active_section() == Section::Information => {
            let number = digit.to_digit(10).unwrap_or(0) as usize;
            match state.contact_link(number) {
                Some(url) => Command::OpenLink(url),
                None => Command::None,
            }
        }
        KeyEvent {
            code: KeyCode::Char('d'),
            ..
        } => {
            state.toggle_log();
            Command::None
        }
        _ => Command::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crate::logger::LogBuffer;
    use crate::platform::ManualClock;
    use crate::state::ScriptedClipboard;
    use crate::ui::Theme;
    use std::sync::Arc;

    fn new_state() -> State {
        State::new(
            Portfolio::bundled().unwrap(),
            Arc::new(ScriptedClipboard::default()),
            ManualClock::new(),
            Theme::default(),
            LogBuffer::default(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let mut state = new_state();
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut state), Command::Exit);
        assert_eq!(
            handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut state
            ),
            Command::Exit
        );
    }

    #[test]
    fn section_keys() {
        let mut state = new_state();
        handle_key(press(KeyCode::Char('p')), &mut state);
        assert_eq!(state.active_section(), Section::Projects);
        handle_key(press(KeyCode::Char('i')), &mut state);
        assert_eq!(state.active_section(), Section::Information);
        handle_key(press(KeyCode::Tab), &mut state);
        assert_eq!(state.active_section(), Section::Projects);
        handle_key(press(KeyCode::Left), &mut state);
        assert_eq!(state.active_section(), Section::Information);
    }

    #[test]
    fn copy_key_requests_copy() {
        let mut state = new_state();
        assert_eq!(
            handle_key(press(KeyCode::Char('c')), &mut state),
            Command::CopyContact
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('y')), &mut state),
            Command::CopyContact
        );
    }

    #[test]
    fn movement_depends_on_section() {
        let mut state = new_state();
        handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.information_scroll(), 1);
        assert_eq!(state.current_project_index(), 0);

        handle_key(press(KeyCode::Char('p')), &mut state);
        handle_key(press(KeyCode::Down), &mut state);
        assert_eq!(state.current_project_index(), 1);
        handle_key(press(KeyCode::Up), &mut state);
        assert_eq!(state.current_project_index(), 0);
    }

    #[test]
    fn enter_opens_selected_project_link() {
        let mut state = new_state();
        // Enter does nothing on the information section.
        assert_eq!(handle_key(press(KeyCode::Enter), &mut state), Command::None);

        handle_key(press(KeyCode::Char('p')), &mut state);
        assert_eq!(
            handle_key(press(KeyCode::Enter), &mut state),
            Command::OpenLink("https://github.com/Jasdish-Singh/Trivia_App".to_string())
        );

        handle_key(press(KeyCode::Char('j')), &mut state);
        handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(handle_key(press(KeyCode::Char('o')), &mut state), Command::None);
    }

    #[test]
    fn digits_open_contact_links_on_information() {
        let mut state = new_state();
        assert_eq!(
            handle_key(press(KeyCode::Char('3')), &mut state),
            Command::OpenLink("https://www.linkedin.com/in/jasdish".to_string())
        );
        assert_eq!(handle_key(press(KeyCode::Char('9')), &mut state), Command::None);

        handle_key(press(KeyCode::Char('p')), &mut state);
        assert_eq!(handle_key(press(KeyCode::Char('3')), &mut state), Command::None);
    }

    #[test]
    fn log_toggle() {
        let mut state = new_state();
        handle_key(press(KeyCode::Char('d')), &mut state);
        assert!(state.is_log_visible());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut state = new_state();
        let mut key = press(KeyCode::Char('p'));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key(key, &mut state), Command::None);
        assert_eq!(state.active_section(), Section::Information);
    }
}
