use chrono::{NaiveDate, NaiveTime};

use crate::template::NameFields;

/// Photo-vs-video axis of the provisioned site, fixed by the entry
/// parameters before the wizard starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventKind {
    Photo,
    #[default]
    Video,
}

impl EventKind {
    /// Parses the entry parameter; anything that is not the photo variant is
    /// treated as video.
    pub fn from_param(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("photo") {
            EventKind::Photo
        } else {
            EventKind::Video
        }
    }
}

/// Parameters the hosting page passes into the wizard.
#[derive(Debug, Clone, Default)]
pub struct EntryContext {
    pub category_route: String,
    pub event_kind: EventKind,
    /// Present when editing an already provisioned site; switches the final
    /// call from create to update.
    pub existing_site_id: Option<String>,
    pub tariff: Option<String>,
}

/// The single mutable aggregate threaded through the wizard.
///
/// Every field written by a completed step stays present until the user
/// navigates back and re-submits that step; steps merge shallowly and the
/// step's output wins on key collision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub category_route: String,
    pub event_kind: EventKind,
    pub title: String,
    pub name_fields: NameFields,
    pub event_date_only: Option<NaiveDate>,
    pub event_time_only: Option<NaiveTime>,
    /// Combined `YYYY-MM-DDTHH:MM`, derived when the schedule step completes.
    pub event_date: String,
    pub site_type: String,
    pub address: String,
    pub city: String,
    pub address_link: String,
    pub invitation_text: String,
    pub host_text: String,
    pub needs_secondary_translation: bool,
    pub secondary_title: String,
    pub secondary_invitation_text: String,
}

impl WizardState {
    pub fn new(category_route: impl Into<String>, event_kind: EventKind) -> Self {
        Self {
            category_route: category_route.into(),
            event_kind,
            ..Self::default()
        }
    }

    /// Step 1 output: title plus the full set of name fields. The name map is
    /// replaced wholesale each time the step completes.
    pub fn merge_details(&mut self, title: String, names: NameFields) {
        self.title = title;
        self.name_fields = names;
    }

    /// Step 2 output: the date and time picks plus the derived combined
    /// timestamp and the chosen site template.
    pub fn merge_schedule(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        combined: String,
        site_type: String,
    ) {
        self.event_date_only = Some(date);
        self.event_time_only = Some(time);
        self.event_date = combined;
        self.site_type = site_type;
    }

    /// Step 3 output.
    pub fn merge_venue(&mut self, address: String, city: String, address_link: String) {
        self.address = address;
        self.city = city;
        self.address_link = address_link;
    }

    /// Step 4 output.
    pub fn merge_texts(&mut self, invitation_text: String, host_text: String) {
        self.invitation_text = invitation_text;
        self.host_text = host_text;
    }

    /// Step 5 output: the optional secondary-language block.
    pub fn merge_translation(&mut self, enabled: bool, title: String, text: String) {
        self.needs_secondary_translation = enabled;
        self.secondary_title = title;
        self.secondary_invitation_text = text;
    }
}
