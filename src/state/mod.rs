//! Application state management module.
//!
//! This module contains the interactive core of the application:
//! - `SectionController`, which owns the active content section
//! - `SectionTransition`, the presentation-side choreography of a switch
//! - `FeedbackController`, the self-expiring copy acknowledgment
//! - the `State` root that owns all of them alongside the static content

mod feedback;
mod navigation;
mod transition;

pub use feedback::{FeedbackController, ACKNOWLEDGE_WINDOW};
pub use navigation::{Section, SectionController};
pub use transition::{CubicBezier, Phase, SectionFrame, SectionTransition, TransitionPolicy};

#[cfg(test)]
pub(crate) use feedback::tests::ScriptedClipboard;

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
