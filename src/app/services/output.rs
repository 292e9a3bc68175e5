use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::{AppError, Result};

/// Text that may be saved, or `NothingToSave` when the display is empty.
pub fn text_to_save(text: &str) -> Result<&str> {
    if text.is_empty() {
        Err(AppError::NothingToSave)
    } else {
        Ok(text)
    }
}

/// Write `text` to `path` as raw bytes, replacing any existing file.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text.as_bytes())?;
    log::info!("Saved {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// What to put on the clipboard for the given display contents.
/// `None` means the clipboard must be left alone.
pub fn clipboard_payload(text: &str) -> Option<&str> {
    (!text.is_empty()).then_some(text)
}
