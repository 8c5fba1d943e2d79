// src/client/clipboard.rs
use super::error::{ClientError, Result};

/// Destination for the copy action.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        cli_clipboard::set_contents(text.to_owned())
            .map_err(|e| ClientError::Clipboard(e.to_string()))
    }
}
