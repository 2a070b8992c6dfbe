use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use shaqyru_core::catalog::CategoryCatalog;
use shaqyru_core::template::NameFields;
use shaqyru_core::wizard::{
    EntryContext, EventKind, Step, StepInput, Transition, WizardController,
};

fn entry(route: &str) -> EntryContext {
    EntryContext {
        category_route: route.into(),
        event_kind: EventKind::Video,
        existing_site_id: None,
        tariff: None,
    }
}

fn names(pairs: &[(&str, &str)]) -> NameFields {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Drives a wedding wizard through all five steps with valid input.
fn complete_wedding(controller: &mut WizardController<'_>) {
    assert_eq!(
        controller.advance(StepInput::Details {
            title: "Біздің той".into(),
            names: names(&[("name", "Асан"), ("name2", "Алия")]),
        }),
        Transition::Moved
    );
    assert_eq!(
        controller.advance(StepInput::Schedule {
            date: date(2025, 6, 1),
            time: time(18, 0),
            site_type: "classic".into(),
        }),
        Transition::Moved
    );
    assert_eq!(
        controller.advance(StepInput::Venue {
            address: "Думан мейрамханасы".into(),
            city: "Астана".into(),
            address_link: String::new(),
        }),
        Transition::Moved
    );
    assert_eq!(
        controller.advance(StepInput::Texts {
            invitation_text: controller.default_invitation_text(),
            host_text: controller.default_host_text(),
        }),
        Transition::Moved
    );
}

#[test]
fn full_walk_keeps_every_step_key_in_state() {
    let catalog = CategoryCatalog::global();
    let mut controller = WizardController::new(catalog, &entry("uilenu-toi"));
    complete_wedding(&mut controller);
    assert_eq!(controller.step(), Step::Review);

    let state = controller.state();
    assert_eq!(state.title, "Біздің той");
    assert_eq!(state.name_fields.len(), 2);
    assert_eq!(state.event_date, "2025-06-01T18:00");
    assert_eq!(state.site_type, "classic");
    assert_eq!(state.address, "Думан мейрамханасы");
    assert_eq!(state.city, "Астана");
    assert!(!state.invitation_text.is_empty());
    assert!(!state.host_text.is_empty());
}

#[test]
fn combined_datetime_has_the_stored_iso_shape() {
    let catalog = CategoryCatalog::global();
    let mut controller = WizardController::new(catalog, &entry("uilenu-toi"));
    complete_wedding(&mut controller);

    let shape = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}$").unwrap();
    assert!(shape.is_match(&controller.state().event_date));
}

#[test]
fn default_text_for_a_wedding_substitutes_and_suffixes_names() {
    let catalog = CategoryCatalog::global();
    let mut controller = WizardController::new(catalog, &entry("uilenu-toi"));
    controller.advance(StepInput::Details {
        title: "Біздің той".into(),
        names: names(&[("name", "Асан"), ("name2", "Алия")]),
    });

    let text = controller.default_invitation_text();
    assert!(text.contains("Асан мен Алияның"), "got: {text}");
}

#[test]
fn anniversary_default_text_uses_the_custom_sentence() {
    let catalog = CategoryCatalog::global();
    let mut controller = WizardController::new(catalog, &entry("merey-toi"));
    controller.advance(StepInput::Details {
        title: "Мерейтой".into(),
        names: names(&[("name", "Серік"), ("name2", "70")]),
    });

    let text = controller.default_invitation_text();
    assert!(text.contains("Серіктің 70 жасқа"), "got: {text}");
    assert!(!text.contains('{'), "got: {text}");
}

#[test]
fn refused_first_step_never_moves_the_cursor_or_merges() {
    let catalog = CategoryCatalog::global();
    let mut controller = WizardController::new(catalog, &entry("uilenu-toi"));
    for title in ["", "   "] {
        let outcome = controller.advance(StepInput::Details {
            title: title.into(),
            names: names(&[("name", "Асан"), ("name2", "Алия")]),
        });
        assert_eq!(outcome, Transition::Refused);
        assert_eq!(controller.step(), Step::Details);
        assert!(controller.state().name_fields.is_empty());
    }
}

#[test]
fn back_navigation_walks_one_step_at_a_time() {
    let catalog = CategoryCatalog::global();
    let mut controller = WizardController::new(catalog, &entry("uilenu-toi"));
    complete_wedding(&mut controller);

    assert_eq!(controller.back(), Transition::Moved);
    assert_eq!(controller.step(), Step::Texts);
    assert_eq!(controller.back(), Transition::Moved);
    assert_eq!(controller.step(), Step::Venue);
    assert_eq!(controller.back(), Transition::Moved);
    assert_eq!(controller.step(), Step::Schedule);
    assert_eq!(controller.back(), Transition::Moved);
    assert_eq!(controller.step(), Step::Details);
    assert_eq!(controller.back(), Transition::Refused);
}

#[test]
fn unknown_category_route_refuses_the_details_step() {
    let catalog = CategoryCatalog::global();
    let mut controller = WizardController::new(catalog, &entry("mystery"));
    let outcome = controller.advance(StepInput::Details {
        title: "Той".into(),
        names: names(&[("name", "Асан")]),
    });
    assert_eq!(outcome, Transition::Refused);
}
