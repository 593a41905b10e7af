use crate::content::{Portfolio, Project};
use crate::logger::LogBuffer;
use crate::platform::{Clipboard, Clock, TimerQueue};
use crate::ui::Theme;
use log::*;
use std::sync::Arc;

use super::feedback::FeedbackController;
use super::navigation::{Section, SectionController};
use super::transition::{SectionFrame, SectionTransition, TransitionPolicy};

/// Houses everything the presentation layer reads: the static portfolio, the
/// two state machines and a little per-section scroll state.
///
pub struct State {
    portfolio: Portfolio,
    sections: SectionController,
    transition: SectionTransition,
    feedback: FeedbackController,
    clock: Box<dyn Clock>,
    information_scroll: u16,
    project_index: usize,
    show_log: bool,
    logs: LogBuffer,
    theme: Theme,
}

impl State {
    /// Return a new state on the information section with nothing copied.
    /// `clock` drives both the transition animation and the copy expiry.
    ///
    pub fn new<C>(
        portfolio: Portfolio,
        clipboard: Arc<dyn Clipboard>,
        clock: C,
        theme: Theme,
        logs: LogBuffer,
    ) -> Self
    where
        C: Clock + Clone + 'static,
    {
        let sections = SectionController::new();
        let feedback = FeedbackController::new(
            portfolio.contact.email.clone(),
            clipboard,
            Box::new(TimerQueue::new(clock.clone())),
        );
        State {
            transition: SectionTransition::settled(sections.active(), TransitionPolicy::default()),
            sections,
            feedback,
            portfolio,
            clock: Box::new(clock),
            information_scroll: 0,
            project_index: 0,
            show_log: false,
            logs,
            theme,
        }
    }

    pub fn get_portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_logs(&self) -> &LogBuffer {
        &self.logs
    }

    /// Returns the active section.
    ///
    pub fn active_section(&self) -> Section {
        self.sections.active()
    }

    /// Activates the given section, starting a transition if it changed.
    ///
    pub fn select_section(&mut self, section: Section) -> &mut Self {
        if self.sections.select(section) {
            debug!("Switching to {} section.", section.label());
            let now = self.clock.now();
            self.transition.begin(section, now);
            if section == Section::Information {
                self.information_scroll = 0;
            }
        }
        self
    }

    /// Activates whichever section is not active.
    ///
    pub fn toggle_section(&mut self) -> &mut Self {
        let next = self.sections.active().other();
        self.select_section(next)
    }

    /// Returns the single section to draw right now and its animation state.
    ///
    pub fn section_frame(&self) -> SectionFrame {
        self.transition.frame(self.clock.now())
    }

    pub fn get_transition_policy(&self) -> &TransitionPolicy {
        self.transition.policy()
    }

    /// Copies the contact email and acknowledges it on success.
    ///
    pub async fn copy_contact(&mut self) -> bool {
        self.feedback.trigger().await
    }

    /// Returns true while the copy acknowledgment is showing.
    ///
    pub fn is_contact_copied(&self) -> bool {
        self.feedback.is_acknowledged()
    }

    pub fn get_feedback(&self) -> &FeedbackController {
        &self.feedback
    }

    /// Advance timers. Returns true if anything visible changed.
    ///
    pub fn on_tick(&mut self) -> bool {
        self.feedback.poll()
    }

    /// Release timers before the presentation goes away.
    ///
    pub fn teardown(&mut self) {
        self.feedback.reset();
    }

    pub fn information_scroll(&self) -> u16 {
        self.information_scroll
    }

    pub fn scroll_down(&mut self) -> &mut Self {
        self.information_scroll = self.information_scroll.saturating_add(1);
        self
    }

    pub fn scroll_up(&mut self) -> &mut Self {
        self.information_scroll = self.information_scroll.saturating_sub(1);
        self
    }

    /// Clamp the information scroll to the rendered content height.
    ///
    pub fn clamp_information_scroll(&mut self, max: u16) -> &mut Self {
        self.information_scroll = self.information_scroll.min(max);
        self
    }

    pub fn current_project_index(&self) -> usize {
        self.project_index
    }

    pub fn next_project(&mut self) -> &mut Self {
        let last = self.portfolio.projects.len().saturating_sub(1);
        self.project_index = (self.project_index + 1).min(last);
        self
    }

    pub fn previous_project(&mut self) -> &mut Self {
        self.project_index = self.project_index.saturating_sub(1);
        self
    }

    pub fn get_selected_project(&self) -> Option<&Project> {
        self.portfolio.projects.get(self.project_index)
    }

    /// Returns the link of the selected project, if it has one.
    ///
    pub fn selected_project_link(&self) -> Option<String> {
        self.get_selected_project().and_then(|p| p.link.clone())
    }

    /// Returns the url of the `number`-th (1-based) contact link.
    ///
    pub fn contact_link(&self, number: usize) -> Option<String> {
        number
            .checked_sub(1)
            .and_then(|index| self.portfolio.contact_links().into_iter().nth(index))
            .map(|link| link.url)
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn set_log_visible(&mut self, visible: bool) -> &mut Self {
        self.show_log = visible;
        self
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }
}
