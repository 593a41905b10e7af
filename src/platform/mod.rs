//! Host platform capabilities.
//!
//! The feedback controller never touches the system clipboard or a timer
//! directly. It is handed these collaborators instead, which keeps the state
//! machines testable against a manual clock and a scripted clipboard.

mod clipboard;
mod timer;

pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use timer::{Clock, ManualClock, Scheduler, SystemClock, TimerHandle, TimerQueue};
