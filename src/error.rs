use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProofError>;

/// Fallback message when the remote endpoint rejects a submission without
/// giving a description of its own.
pub const GENERIC_SEND_FAILURE: &str = "Failed to send proof of payment. Please try again.";

#[derive(Error, Debug)]
pub enum ProofError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    /// The messaging endpoint answered but did not acknowledge the
    /// submission. Carries the server description when one was provided.
    #[error("{0}")]
    Rejected(String),
    #[error("a proof of payment file is required")]
    MissingFile,
    #[error("no payment method selected")]
    NoMethodSelected,
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("audio error: {0}")]
    Audio(String),
}
