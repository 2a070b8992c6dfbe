use crate::catalog::{Category, CategoryCatalog, DEFAULT_VIDEO_LINK, EVENT_TYPE_KEY};
use crate::wizard::{EventKind, WizardState};

use super::payload::{
    MetadataEntry, SubmissionPayload, TranslationBlock, DEFAULT_TARIFF, PHOTO_VIDEO_SENTINEL,
    SECONDARY_LANGUAGE,
};

/// Builds the create/update request body from the aggregated wizard state
/// and the category configuration.
pub struct SubmissionAssembler;

impl SubmissionAssembler {
    pub fn build(
        state: &WizardState,
        catalog: &CategoryCatalog,
        tariff: Option<&str>,
        is_paid: bool,
    ) -> SubmissionPayload {
        let category = catalog.find(&state.category_route);
        SubmissionPayload {
            site_type: state.site_type.clone(),
            address: state.address.clone(),
            address_link: state.address_link.clone(),
            invitation_text: state.invitation_text.clone(),
            category: state.category_route.clone(),
            hosts: state.host_text.clone(),
            title: state.title.clone(),
            event_date: state.event_date.clone(),
            city: state.city.clone(),
            tariff: tariff.unwrap_or(DEFAULT_TARIFF).to_string(),
            is_paid,
            video_link: Self::resolve_video_link(state, category),
            metadata: Self::build_metadata(state, category),
            translations: Self::build_translations(state),
        }
    }

    fn resolve_video_link(state: &WizardState, category: Option<&Category>) -> String {
        if state.event_kind == EventKind::Photo {
            return PHOTO_VIDEO_SENTINEL.to_string();
        }
        category
            .map(|entry| entry.video_link)
            .unwrap_or(DEFAULT_VIDEO_LINK)
            .to_string()
    }

    /// The leading entry records the category route; one entry follows per
    /// populated name field, keyed through the category's metadata map.
    /// Empty fields are omitted.
    fn build_metadata(state: &WizardState, category: Option<&Category>) -> Vec<MetadataEntry> {
        let mut metadata = vec![MetadataEntry {
            key: EVENT_TYPE_KEY.to_string(),
            value: state.category_route.clone(),
        }];
        for (field_key, value) in &state.name_fields {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let key = category
                .map(|entry| entry.metadata_key(field_key))
                .unwrap_or(field_key.as_str());
            metadata.push(MetadataEntry {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        metadata
    }

    fn build_translations(state: &WizardState) -> Option<Vec<TranslationBlock>> {
        if !state.needs_secondary_translation
            || state.secondary_title.trim().is_empty()
            || state.secondary_invitation_text.trim().is_empty()
        {
            return None;
        }
        Some(vec![TranslationBlock {
            language_code: SECONDARY_LANGUAGE.to_string(),
            title: state.secondary_title.clone(),
            invitation_text: state.secondary_invitation_text.clone(),
        }])
    }
}
