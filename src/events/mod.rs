//! Event handling module.
//!
//! Terminal input is polled on a helper thread and mapped to state changes
//! and commands for the application loop.

pub mod terminal;
