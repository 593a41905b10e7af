use clipboard::{ClipboardContext, ClipboardProvider};

/// Errors surfaced by a clipboard write.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened
    #[error("Failed to initialize clipboard: {0}")]
    Unavailable(String),

    /// The clipboard rejected the write
    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),

    /// The background write task did not complete
    #[error("Clipboard task aborted: {0}")]
    Aborted(String),
}

/// Capability to place text on the system clipboard.
///
pub trait Clipboard: Send + Sync {
    fn write_text(&self, content: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the platform provider. A fresh context is opened per
/// write so nothing is held between copies.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, content: &str) -> Result<(), ClipboardError> {
        let mut ctx: ClipboardContext =
            ClipboardProvider::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        ctx.set_contents(content.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
