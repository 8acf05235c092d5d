use crate::config::TelegramConfig;
use crate::domain::ports::ProofSender;
use crate::domain::proof::{AttachmentKind, ProofSubmission};
use crate::error::{GENERIC_SEND_FAILURE, ProofError, Result};
use async_trait::async_trait;
use chrono::Local;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

/// Delivers proofs through the Telegram bot API.
///
/// Builds one multipart request per submission: chat id, markdown caption,
/// and the file itself under `photo` (endpoint `sendPhoto`) for image MIME
/// types or `document` (endpoint `sendDocument`) for everything else. No
/// retries, no state; timeouts are whatever the transport defaults to.
pub struct TelegramNotifier {
    http: reqwest::Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

/// The slice of a bot API response the client cares about.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl ApiResponse {
    /// Maps the acknowledgment flag to a result, preferring the server's
    /// own description over the generic fallback.
    fn into_result(self) -> Result<()> {
        if self.ok {
            Ok(())
        } else {
            Err(ProofError::Rejected(
                self.description
                    .unwrap_or_else(|| GENERIC_SEND_FAILURE.to_string()),
            ))
        }
    }
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    fn endpoint_url(&self, kind: AttachmentKind) -> String {
        format!("{}/bot{}/{}", self.api_base, self.bot_token, kind.endpoint())
    }
}

/// Caption shown to the operator above the attached file. Empty fields fall
/// back the same way the upload form presents them.
pub(crate) fn build_caption(submission: &ProofSubmission, timestamp: &str) -> String {
    let or_dash = |s: &str| {
        if s.is_empty() { "-".to_string() } else { s.to_string() }
    };
    let sender = if submission.sender_name.is_empty() {
        "Anonymous".to_string()
    } else {
        submission.sender_name.clone()
    };

    format!(
        "\n⚡ *NEW PROOF OF PAYMENT* ⚡\n\
         ━━━━━━━━━━━━━━━━━━\n\
         📦 *Product:* {}\n\
         👤 *Name:* {}\n\
         💰 *Method:* {}\n\
         💵 *Nominal:* {}\n\
         📅 *Time:* {}\n\
         ━━━━━━━━━━━━━━━━━━\n\
         🚀 _\"Code never sleeps.\"_\n",
        or_dash(&submission.product_name),
        sender,
        submission.method.label(),
        or_dash(&submission.nominal),
        timestamp,
    )
}

#[async_trait]
impl ProofSender for TelegramNotifier {
    async fn send(&self, submission: &ProofSubmission) -> Result<()> {
        let kind = submission.file.attachment_kind();
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let part = Part::bytes(submission.file.bytes.clone())
            .file_name(submission.file.name.clone())
            .mime_str(&submission.file.mime)?;
        let form = Form::new()
            .text("chat_id", self.chat_id.clone())
            .text("caption", build_caption(submission, &timestamp))
            .text("parse_mode", "Markdown")
            .part(kind.field(), part);

        debug!(endpoint = kind.endpoint(), file = %submission.file.name, "sending proof");

        let response = self
            .http
            .post(self.endpoint_url(kind))
            .multipart(form)
            .send()
            .await?;
        let body: ApiResponse = response.json().await?;
        body.into_result()
    }
}
