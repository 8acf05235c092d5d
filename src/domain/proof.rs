use crate::domain::method::PaymentMethod;
use crate::error::Result;
use std::path::Path;

/// Telegram distinguishes photo uploads from generic document uploads, with
/// a separate endpoint and multipart field name for each.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AttachmentKind {
    Photo,
    Document,
}

impl AttachmentKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            AttachmentKind::Photo => "sendPhoto",
            AttachmentKind::Document => "sendDocument",
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            AttachmentKind::Photo => "photo",
            AttachmentKind::Document => "document",
        }
    }
}

/// A user-selected proof-of-payment file, fully read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ProofFile {
    /// Reads a file from disk, sniffing the MIME type from the extension.
    /// Unknown extensions fall back to `application/octet-stream`, which
    /// routes the upload down the document path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "proof".to_string());
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self {
            name,
            size: bytes.len() as u64,
            mime,
            bytes,
        })
    }

    /// Coarse MIME sniff: anything in the image family goes out as a photo,
    /// everything else as a document.
    pub fn attachment_kind(&self) -> AttachmentKind {
        if self.mime.starts_with("image/") {
            AttachmentKind::Photo
        } else {
            AttachmentKind::Document
        }
    }
}

/// Everything sent with one submission attempt. Built right before the
/// outbound call and dropped as soon as it finishes, success or failure.
#[derive(Debug, Clone)]
pub struct ProofSubmission {
    pub file: ProofFile,
    pub sender_name: String,
    pub product_name: String,
    /// Free text, deliberately unvalidated; empty and garbage values are
    /// accepted as-is.
    pub nominal: String,
    pub method: PaymentMethod,
}

/// Form fields collected on the upload step, before the mandatory-file check
/// has been applied.
#[derive(Debug, Clone, Default)]
pub struct SubmissionDraft {
    pub file: Option<ProofFile>,
    pub sender_name: String,
    pub product_name: String,
    pub nominal: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn proof_with_mime(mime: &str) -> ProofFile {
        ProofFile {
            name: "proof".to_string(),
            size: 3,
            mime: mime.to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_png_routes_to_photo() {
        let kind = proof_with_mime("image/png").attachment_kind();
        assert_eq!(kind, AttachmentKind::Photo);
        assert_eq!(kind.endpoint(), "sendPhoto");
        assert_eq!(kind.field(), "photo");
    }

    #[test]
    fn test_pdf_routes_to_document() {
        let kind = proof_with_mime("application/pdf").attachment_kind();
        assert_eq!(kind, AttachmentKind::Document);
        assert_eq!(kind.endpoint(), "sendDocument");
        assert_eq!(kind.field(), "document");
    }

    #[test]
    fn test_from_path_reads_name_size_and_mime() {
        let mut file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .unwrap();
        file.write_all(b"not really a png").unwrap();

        let proof = ProofFile::from_path(file.path()).unwrap();
        assert_eq!(proof.size, 16);
        assert_eq!(proof.mime, "image/png");
        assert!(proof.name.ends_with(".png"));
    }

    #[test]
    fn test_from_path_unknown_extension_is_octet_stream() {
        let file = tempfile::Builder::new()
            .suffix(".weird")
            .tempfile()
            .unwrap();

        let proof = ProofFile::from_path(file.path()).unwrap();
        assert_eq!(proof.mime, "application/octet-stream");
        assert_eq!(proof.attachment_kind(), AttachmentKind::Document);
    }

    #[test]
    fn test_from_path_missing_file_is_error() {
        let result = ProofFile::from_path(Path::new("/no/such/file.png"));
        assert!(result.is_err());
    }
}
