//! Reusable UI widget components.
//!
//! This module contains styling helpers shared by the section renderers.

pub mod styling;
