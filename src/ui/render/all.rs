use super::{footer, log, main, toast, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const FOOTER_HEIGHT: u16 = 3;
const LOG_HEIGHT: u16 = 8;

/// Render every region of the screen according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let mut constraints = vec![Constraint::Min(0)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    main(frame, chunks[0], state);
    if state.is_log_visible() {
        log(frame, chunks[1], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);
    toast(frame, chunks[0], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crate::logger::LogBuffer;
    use crate::platform::ManualClock;
    use crate::state::{ScriptedClipboard, Section, ACKNOWLEDGE_WINDOW};
    use crate::ui::Theme;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn setup() -> (State, ManualClock, Terminal<TestBackend>) {
        let clock = ManualClock::new();
        let state = State::new(
            Portfolio::bundled().unwrap(),
            Arc::new(ScriptedClipboard::default()),
            clock.clone(),
            Theme::default(),
            LogBuffer::default(),
        );
        let terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        (state, clock, terminal)
    }

    fn screen(terminal: &mut Terminal<TestBackend>, state: &mut State) -> String {
        terminal.draw(|frame| all(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_information_by_default() {
        let (mut state, _clock, mut terminal) = setup();
        let text = screen(&mut terminal, &mut state);
        assert!(text.contains("JASDISH"));
        assert!(text.contains("jasdishsingh55@gmail.com"));
        assert!(text.contains("INFORMATION"));
        assert!(text.contains("PORTFOLIO"));
        assert!(!text.contains("Trivia Quiz Application"));
    }

    #[test]
    fn only_one_section_is_drawn_during_a_switch() {
        let (mut state, clock, mut terminal) = setup();
        state.select_section(Section::Projects);

        for _ in 0..20 {
            let text = screen(&mut terminal, &mut state);
            let information = text.contains("Available for Summer 2026");
            // Header plus footer tab; cards may not have revealed yet.
            let projects = text.matches("PROJECTS").count() == 2;
            assert!(information ^ projects);
            clock.advance(Duration::from_millis(50));
        }

        let text = screen(&mut terminal, &mut state);
        assert!(text.contains("Trivia Quiz Application"));
        assert!(!text.contains("Available for Summer 2026"));
    }

    #[test]
    fn outgoing_section_stays_until_exit_completes() {
        let (mut state, clock, mut terminal) = setup();
        state.select_section(Section::Projects);
        clock.advance(Duration::from_millis(100));
        let text = screen(&mut terminal, &mut state);
        assert!(text.contains("Available for Summer 2026"));
        assert!(!text.contains("Trivia Quiz Application"));
    }

    #[test]
    fn log_panel_is_optional() {
        let (mut state, _clock, mut terminal) = setup();
        state.get_logs().push("first entry".to_string());
        assert!(!screen(&mut terminal, &mut state).contains("first entry"));
        state.toggle_log();
        assert!(screen(&mut terminal, &mut state).contains("first entry"));
    }

    #[tokio::test]
    async fn copy_toast_shows_and_expires() {
        let (mut state, clock, mut terminal) = setup();
        assert!(state.copy_contact().await);

        let text = screen(&mut terminal, &mut state);
        assert!(text.contains("Email copied to clipboard"));
        assert!(text.contains("Address Copied!"));

        clock.advance(ACKNOWLEDGE_WINDOW);
        state.on_tick();
        let text = screen(&mut terminal, &mut state);
        assert!(!text.contains("Email copied to clipboard"));
        assert!(!text.contains("Address Copied!"));
        assert!(text.contains("jasdishsingh55@gmail.com"));
    }

    #[tokio::test]
    async fn copy_toast_shows_on_projects_section() {
        let (mut state, clock, mut terminal) = setup();
        state.select_section(Section::Projects);
        clock.advance(Duration::from_secs(1));
        state.copy_contact().await;
        assert!(screen(&mut terminal, &mut state).contains("Email copied to clipboard"));
    }

    #[test]
    fn project_cards_reveal_one_after_another() {
        let (mut state, clock, mut terminal) = setup();
        state.select_section(Section::Projects);

        // Exit done, entry 250ms in: only the first card has started.
        clock.advance(Duration::from_millis(650));
        let text = screen(&mut terminal, &mut state);
        assert!(text.contains("Trivia Quiz Application"));
        assert!(!text.contains("Messenger Application"));

        clock.advance(Duration::from_millis(100));
        let text = screen(&mut terminal, &mut state);
        assert!(text.contains("Messenger Application"));
        assert!(!text.contains("NLP Email Spam Detection"));

        clock.advance(Duration::from_secs(2));
        let text = screen(&mut terminal, &mut state);
        assert!(text.contains("Credit Card Fraud Detection"));
    }

    #[test]
    fn information_scrolls_to_the_end_on_a_narrow_terminal() {
        let (mut state, _clock, _) = setup();
        let mut terminal = Terminal::new(TestBackend::new(40, 24)).unwrap();
        assert!(!screen(&mut terminal, &mut state).contains("Get in Touch"));

        let mut reached = false;
        for _ in 0..200 {
            state.scroll_down();
            if screen(&mut terminal, &mut state).contains("Get in Touch") {
                reached = true;
                break;
            }
        }
        assert!(reached);
    }
}
