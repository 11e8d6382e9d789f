//! System clipboard writes for the copy action.

use crate::core::message::Content;
use crate::core::thread::extract_plain_text;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Write `text` to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

/// Flatten message content and copy it.
pub fn copy_content(content: &Content) -> Result<(), ClipboardError> {
    copy_text(&extract_plain_text(content))
}
