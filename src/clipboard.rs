/// Access to the host clipboard.
use anyhow::{Result, anyhow};

pub trait Clipboard {
    fn set_text(&mut self, text: String) -> Result<()>;
}

/// The system clipboard, reached through `cli-clipboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<()> {
        cli_clipboard::set_contents(text)
            .map_err(|e| anyhow!("Failed to write to clipboard: {e}"))
    }
}
