//! Clipboard access behind a trait so copying can be mocked in tests

use anyhow::Result;

/// Destination for copied text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<()>;
}

/// System clipboard via arboard. The handle is opened per copy so a
/// missing clipboard only fails the copy, not startup.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
