//! Terminal portfolio with an information view and a project gallery.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod logger;
pub mod platform;
pub mod state;
pub mod ui;
