//! Clipboard access
//!
//! The form and the CLI copy through [`ClipboardSink`] so the system clipboard
//! can be swapped for an in-memory one in tests and headless sessions.

use tracing::{debug, warn};

use crate::error::ClipboardError;

/// Something that accepts copied text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by arboard
///
/// On X11 and Wayland the copied text is served by this process; once it exits
/// the text survives only if a clipboard manager has taken it over.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        // arboard wants a fresh handle per operation
        let mut clipboard = arboard::Clipboard::new().map_err(|e| {
            warn!(error = %e, "clipboard backend unavailable");
            ClipboardError::Unavailable(e)
        })?;
        clipboard
            .set_text(text.to_owned())
            .map_err(ClipboardError::Write)?;
        debug!(characters = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}

/// Clipboard that keeps the last copied text in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
