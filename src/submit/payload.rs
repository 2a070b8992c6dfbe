use serde::{Deserialize, Serialize};

/// Tier used when the entry context supplies none.
pub const DEFAULT_TARIFF: &str = "standard";

/// The gated tier that requires a funded balance.
pub const PRO_TARIFF: &str = "pro";

/// Minimum balance, in tenge, for the pro tier to count as paid.
pub const PRO_BALANCE_THRESHOLD: f64 = 5000.0;

/// Literal video-link value for photo-variant sites; the image-selection
/// flow keys on it.
pub const PHOTO_VIDEO_SENTINEL: &str = "photo";

/// Language code of the secondary translation block.
pub const SECONDARY_LANGUAGE: &str = "ru";

/// The exact request body for the site create/update API. Built fresh on
/// every submission attempt, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub site_type: String,
    pub address: String,
    pub address_link: String,
    pub invitation_text: String,
    pub category: String,
    pub hosts: String,
    pub title: String,
    pub event_date: String,
    pub city: String,
    pub tariff: String,
    pub is_paid: bool,
    pub video_link: String,
    pub metadata: Vec<MetadataEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<TranslationBlock>>,
}

/// One per-field metadata entry, keyed by the category's canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

/// A secondary-language rendition of the invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationBlock {
    pub language_code: String,
    pub title: String,
    pub invitation_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translations_field_is_absent_when_none() {
        let payload = SubmissionPayload {
            site_type: "classic".into(),
            address: String::new(),
            address_link: String::new(),
            invitation_text: String::new(),
            category: "uilenu-toi".into(),
            hosts: String::new(),
            title: String::new(),
            event_date: String::new(),
            city: String::new(),
            tariff: DEFAULT_TARIFF.into(),
            is_paid: true,
            video_link: String::new(),
            metadata: Vec::new(),
            translations: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("translations").is_none());
        assert!(json.get("siteType").is_some());
    }
}
