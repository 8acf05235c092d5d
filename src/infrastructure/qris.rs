use crate::domain::ports::ImageSaver;
use crate::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name the QRIS code image is saved under.
pub const QRIS_FILE_NAME: &str = "QRIS-Payment.jpg";

/// Fetches the QRIS code image and stores it locally.
///
/// The download is staged through a temporary file in the target directory
/// and only renamed into place once fully written; the staging file is the
/// ephemeral local reference and is released either by the rename or by its
/// drop on the error path.
pub struct QrisImageSaver {
    http: reqwest::Client,
}

impl Default for QrisImageSaver {
    fn default() -> Self {
        Self::new()
    }
}

impl QrisImageSaver {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ImageSaver for QrisImageSaver {
    async fn save(&self, url: &str, dir: &Path) -> Result<PathBuf> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        let mut staging = tempfile::NamedTempFile::new_in(dir)?;
        staging.write_all(&bytes)?;

        let destination = dir.join(QRIS_FILE_NAME);
        staging
            .persist(&destination)
            .map_err(|e| crate::error::ProofError::Io(e.error))?;

        debug!(path = %destination.display(), "qris image saved");
        Ok(destination)
    }

    fn open_in_viewer(&self, url: &str) -> Result<()> {
        open::that(url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_fails_when_fetch_fails() {
        // Nothing listens on this port; the fetch error must surface so the
        // caller can fall back to the external viewer.
        let saver = QrisImageSaver::new();
        let dir = tempfile::tempdir().unwrap();

        let result = saver.save("http://127.0.0.1:9/qris.jpg", dir.path()).await;
        assert!(result.is_err());
        assert!(!dir.path().join(QRIS_FILE_NAME).exists());
    }
}
