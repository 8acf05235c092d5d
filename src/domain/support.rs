use serde::{Deserialize, Serialize};

/// An illustrative "support the developer" price point shown on the first
/// step. Tiers are display-only; they never feed into a submission.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct SupportTier {
    /// Unique id within the configured list.
    pub id: String,
    pub label: String,
    /// Price in the smallest currency unit.
    pub price: u64,
    pub emoji: String,
    pub description: String,
}

/// Static profile card rendered above the method menu.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct DeveloperProfile {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_deserialization() {
        let json = r#"{
            "id": "coffee",
            "label": "Coffee",
            "price": 15000,
            "emoji": "☕",
            "description": "Buy me a coffee to keep me awake."
        }"#;
        let tier: SupportTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.id, "coffee");
        assert_eq!(tier.price, 15000);
    }
}
