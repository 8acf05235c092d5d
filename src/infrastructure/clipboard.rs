use crate::domain::ports::Clipboard;
use crate::error::{ProofError, Result};

/// System clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Fails on headless environments without a clipboard service; callers
    /// fall back to [`UnavailableClipboard`].
    pub fn new() -> Result<Self> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ProofError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ProofError::Clipboard(e.to_string()))
    }
}

/// Stand-in used when no clipboard service could be reached. Every write
/// fails with a displayable message instead of crashing the wizard.
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(ProofError::Clipboard(
            "no clipboard available in this environment".to_string(),
        ))
    }
}
