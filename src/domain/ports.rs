use super::proof::ProofSubmission;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Outbound seam for delivering a proof of payment to the operator.
#[async_trait]
pub trait ProofSender: Send + Sync {
    /// Performs exactly one delivery attempt. `Ok(())` means the remote
    /// endpoint explicitly acknowledged the submission; any other outcome is
    /// an error carrying a message fit for display.
    async fn send(&self, submission: &ProofSubmission) -> Result<()>;
}

pub type ProofSenderBox = Box<dyn ProofSender>;

/// Write-only access to the system clipboard.
pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

pub type ClipboardBox = Box<dyn Clipboard>;

/// Saves a remote code image to local storage, with an explicit escape hatch
/// for environments where the direct fetch is blocked.
#[async_trait]
pub trait ImageSaver: Send + Sync {
    /// Fetches the image and persists it under `dir`, returning the final
    /// path. Errors here are expected to be degraded into `open_in_viewer`
    /// by the caller rather than shown to the user.
    async fn save(&self, url: &str, dir: &Path) -> Result<PathBuf>;

    /// Hands the URL to an external viewer so the user can save it manually.
    fn open_in_viewer(&self, url: &str) -> Result<()>;
}

pub type ImageSaverBox = Box<dyn ImageSaver>;

/// A playback backend for the ambient track. `play` may be rejected by the
/// environment (the analogue of a browser autoplay policy), in which case
/// the caller waits for a user interaction and tries again. Playback stays
/// on the UI thread, so the trait is deliberately not `Send`.
pub trait AudioSink {
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
}

pub type AudioSinkBox = Box<dyn AudioSink>;

impl AudioSink for AudioSinkBox {
    fn play(&mut self) -> Result<()> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }
}
