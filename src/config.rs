use crate::domain::method::{PaymentDestination, PaymentMethod};
use crate::domain::support::{DeveloperProfile, SupportTier};
use crate::error::{ProofError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Env var overrides so the credential does not have to live in the config
/// file. See DESIGN.md on the token-exposure issue.
pub const BOT_TOKEN_ENV: &str = "PAYPROOF_BOT_TOKEN";
pub const CHAT_ID_ENV: &str = "PAYPROOF_CHAT_ID";

/// Credentials and endpoint for the outbound messaging API.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    /// Overridable so tests can point the client at a local server.
    pub api_base: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            chat_id: String::new(),
            api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
        }
    }
}

/// DANA destination account shown on the instructions step.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DanaDestination {
    pub number: String,
    pub holder: String,
}

/// Everything static the wizard needs, constructed once in `main` and passed
/// by reference. Nothing reads configuration through ambient globals.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub dana: DanaDestination,
    pub qris_image_url: String,
    /// Where the QRIS code image is saved on request.
    pub qris_save_dir: PathBuf,
    pub audio_track_url: String,
    pub profile: DeveloperProfile,
    pub tiers: Vec<SupportTier>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            telegram: TelegramConfig::default(),
            dana: DanaDestination {
                number: "08812477457".to_string(),
                holder: "TOLANI".to_string(),
            },
            qris_image_url: "https://files.catbox.moe/6wyqxv.jpg".to_string(),
            qris_save_dir: PathBuf::from("."),
            audio_track_url: "https://files.catbox.moe/0ft3c3.mp3".to_string(),
            profile: DeveloperProfile {
                name: "MAULANA".to_string(),
                role: "Full Stack Developer".to_string(),
                avatar: "https://files.catbox.moe/w64vs7.jpg".to_string(),
                skills: vec![
                    "React.js".to_string(),
                    "JavaScript".to_string(),
                    "HTML".to_string(),
                    "UI/UX".to_string(),
                    "Python".to_string(),
                ],
                bio: "I am the developer of this website, which I created for the purpose \
                      of easy and practical payments."
                    .to_string(),
            },
            tiers: vec![
                SupportTier {
                    id: "coffee".to_string(),
                    label: "Coffee".to_string(),
                    price: 15000,
                    emoji: "☕".to_string(),
                    description: "Buy me a coffee to keep me awake.".to_string(),
                },
                SupportTier {
                    id: "meal".to_string(),
                    label: "Meal".to_string(),
                    price: 50000,
                    emoji: "🍔".to_string(),
                    description: "Fuel for a coding session.".to_string(),
                },
                SupportTier {
                    id: "server".to_string(),
                    label: "Server".to_string(),
                    price: 100000,
                    emoji: "🚀".to_string(),
                    description: "Help cover server and domain costs.".to_string(),
                },
            ],
        }
    }
}

impl AppConfig {
    /// Loads configuration from an optional JSON file, then applies env
    /// overrides for the credential fields.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                serde_json::from_str(&raw)
                    .map_err(|e| ProofError::Config(format!("{}: {e}", path.display())))?
            }
            None => Self::default(),
        };

        if let Ok(token) = std::env::var(BOT_TOKEN_ENV) {
            config.telegram.bot_token = token;
        }
        if let Ok(chat_id) = std::env::var(CHAT_ID_ENV) {
            config.telegram.chat_id = chat_id;
        }

        if config.telegram.bot_token.is_empty() {
            warn!("no bot token configured; submissions will be rejected by the API");
        }

        Ok(config)
    }

    /// Resolves the static destination details for a method.
    pub fn destination(&self, method: PaymentMethod) -> PaymentDestination {
        match method {
            PaymentMethod::Dana => PaymentDestination::Dana {
                number: self.dana.number.clone(),
                holder: self.dana.holder.clone(),
            },
            PaymentMethod::Qris => PaymentDestination::Qris {
                image_url: self.qris_image_url.clone(),
            },
        }
    }
}
