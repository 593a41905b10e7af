//! Section navigation.
//!
//! The two content views are mutually exclusive. Which one is active changes
//! immediately on selection; animating the change is the presentation's job.

/// Specifying the two content sections.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub enum Section {
    #[default]
    Information,
    Projects,
}

impl Section {
    /// Sections in navigation bar order.
    pub const ALL: [Section; 2] = [Section::Information, Section::Projects];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Information => "information",
            Section::Projects => "projects",
        }
    }

    pub fn other(&self) -> Section {
        match self {
            Section::Information => Section::Projects,
            Section::Projects => Section::Information,
        }
    }
}

/// Owns the active section for the session.
///
#[derive(Debug, Default)]
pub struct SectionController {
    active: Section,
}

impl SectionController {
    pub fn new() -> Self {
        SectionController::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Make `section` active. Returns whether the active section changed;
    /// selecting the current section is a no-op.
    ///
    pub fn select(&mut self, section: Section) -> bool {
        let changed = self.active != section;
        self.active = section;
        changed
    }

    /// Select whichever section is not active and return it.
    ///
    pub fn toggle(&mut self) -> Section {
        let next = self.active.other();
        self.select(next);
        next
    }
}
