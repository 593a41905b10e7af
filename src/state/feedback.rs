//! Transient copy acknowledgment.
//!
//! A successful copy flips `acknowledged` on and arms a single expiry timer.
//! Copying again while acknowledged cancels that timer before arming a new
//! one, so an older expiry can never clear a newer acknowledgment.

use crate::platform::{Clipboard, ClipboardError, Scheduler, TimerHandle};
use log::*;
use std::sync::Arc;
use std::time::Duration;

/// How long an acknowledgment stays visible.
pub const ACKNOWLEDGE_WINDOW: Duration = Duration::from_millis(2000);

/// Owns the acknowledged flag and the one pending expiry that clears it.
///
pub struct FeedbackController {
    clipboard: Arc<dyn Clipboard>,
    scheduler: Box<dyn Scheduler>,
    payload: String,
    acknowledged: bool,
    expiry: Option<TimerHandle>,
}

impl FeedbackController {
    /// Return a new idle controller that copies `payload` when triggered.
    ///
    pub fn new(
        payload: impl Into<String>,
        clipboard: Arc<dyn Clipboard>,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        FeedbackController {
            clipboard,
            scheduler,
            payload: payload.into(),
            acknowledged: false,
            expiry: None,
        }
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn has_pending_expiry(&self) -> bool {
        self.expiry.is_some()
    }

    /// Write the payload to the clipboard and, once the write has completed,
    /// acknowledge it. A failed write is logged and leaves the controller
    /// idle with nothing scheduled. Returns whether the copy succeeded.
    ///
    pub async fn trigger(&mut self) -> bool {
        let clipboard = Arc::clone(&self.clipboard);
        let payload = self.payload.clone();
        let result = tokio::task::spawn_blocking(move || clipboard.write_text(&payload))
            .await
            .unwrap_or_else(|e| Err(ClipboardError::Aborted(e.to_string())));

        match result {
            Ok(()) => {
                self.acknowledge();
                debug!("Copied '{}' to clipboard.", self.payload);
                true
            }
            Err(e) => {
                warn!("Failed to copy '{}': {}", self.payload, e);
                self.reset();
                false
            }
        }
    }

    /// Deliver due timers. Returns true if the acknowledgment expired.
    ///
    pub fn poll(&mut self) -> bool {
        let due = self.scheduler.take_due();
        match self.expiry {
            Some(handle) if due.contains(&handle) => {
                self.expiry = None;
                self.acknowledged = false;
                debug!("Copy acknowledgment expired.");
                true
            }
            _ => false,
        }
    }

    /// Clear the acknowledgment now and disarm any pending expiry.
    ///
    pub fn reset(&mut self) {
        if let Some(handle) = self.expiry.take() {
            self.scheduler.cancel(handle);
        }
        self.acknowledged = false;
    }

    fn acknowledge(&mut self) {
        if let Some(previous) = self.expiry.take() {
            self.scheduler.cancel(previous);
        }
        self.acknowledged = true;
        self.expiry = Some(self.scheduler.after(ACKNOWLEDGE_WINDOW));
    }
}

impl Drop for FeedbackController {
    fn drop(&mut self) {
        self.reset();
    }
}
