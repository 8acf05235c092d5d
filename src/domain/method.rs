use serde::{Deserialize, Serialize};
use std::fmt;

/// A payment channel the user can transfer through.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Dana,
    Qris,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Dana, PaymentMethod::Qris];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Dana => "dana",
            PaymentMethod::Qris => "qris",
        }
    }

    /// Human-readable label used in menus and in the submission caption.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Dana => "DANA",
            PaymentMethod::Qris => "QRIS",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static transfer details for a method, sourced from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDestination {
    /// DANA e-wallet account.
    Dana { number: String, holder: String },
    /// QRIS code image the user scans or saves.
    Qris { image_url: String },
}
