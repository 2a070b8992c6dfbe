use chrono::{NaiveDate, NaiveTime};

use crate::catalog::{Category, CategoryCatalog};
use crate::linguistics::select_connector;
use crate::template::{self, NameFields};

use super::calendar;
use super::state::{EntryContext, WizardState};
use super::steps::Step;

/// Typed per-step input. Each variant carries exactly what its step's guard
/// inspects and its effect merges.
#[derive(Debug, Clone)]
pub enum StepInput {
    Details {
        title: String,
        names: NameFields,
    },
    Schedule {
        date: NaiveDate,
        time: NaiveTime,
        site_type: String,
    },
    Venue {
        address: String,
        city: String,
        address_link: String,
    },
    Texts {
        invitation_text: String,
        host_text: String,
    },
    Translation {
        enabled: bool,
        title: String,
        text: String,
    },
}

/// Outcome of a transition attempt. A refused transition changes nothing:
/// neither the cursor nor the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved,
    Refused,
}

/// The wizard state machine: cumulative form state, step cursor, transition
/// guards, and default-text seeding.
pub struct WizardController<'a> {
    catalog: &'a CategoryCatalog,
    state: WizardState,
    step: Step,
}

impl<'a> WizardController<'a> {
    pub fn new(catalog: &'a CategoryCatalog, entry: &EntryContext) -> Self {
        Self {
            catalog,
            state: WizardState::new(entry.category_route.clone(), entry.event_kind),
            step: Step::Details,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn category(&self) -> Option<&'a Category> {
        self.catalog.find(&self.state.category_route)
    }

    /// Title the details step starts from when the user has not typed one:
    /// the category's display label.
    pub fn default_title(&self) -> String {
        if !self.state.title.is_empty() {
            return self.state.title.clone();
        }
        self.category()
            .map(|category| category.label.to_string())
            .unwrap_or_default()
    }

    /// Editable default invitation text, rendered from the collected names
    /// when the texts step is entered.
    pub fn default_invitation_text(&self) -> String {
        match self.category() {
            Some(category) => template::render(category, &self.state.name_fields),
            None => String::new(),
        }
    }

    /// Editable default for the hosts line: the names joined with the
    /// phonetically selected connector. Categories with a custom renderer
    /// treat only the leading field as a name.
    pub fn default_host_text(&self) -> String {
        let custom = self
            .category()
            .map(|category| category.renderer != crate::catalog::RendererStrategy::Template)
            .unwrap_or(false);
        if custom {
            return self
                .state
                .name_fields
                .get("name")
                .map(|value| value.trim().to_string())
                .unwrap_or_default();
        }
        let names: Vec<&str> = self
            .state
            .name_fields
            .values()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .collect();
        match names.as_slice() {
            [] => String::new(),
            [sole] => (*sole).to_string(),
            [first, rest @ ..] => {
                let mut text = (*first).to_string();
                for name in rest {
                    text.push(' ');
                    text.push_str(select_connector(&text));
                    text.push(' ');
                    text.push_str(name);
                }
                text
            }
        }
    }

    /// Editable default for the secondary-language invitation text.
    pub fn default_secondary_text(&self) -> String {
        match self.category() {
            Some(category) => template::render_secondary(category, &self.state.name_fields),
            None => String::new(),
        }
    }

    /// Attempts a forward transition with the given step output.
    ///
    /// Input for a step other than the active one is refused outright. A
    /// failed guard refuses the transition without touching state — the UI
    /// keeps its "next" control disabled rather than receiving an error.
    pub fn advance(&mut self, input: StepInput) -> Transition {
        match (self.step, input) {
            (Step::Details, StepInput::Details { title, names }) => {
                if title.trim().is_empty() || !self.declared_names_filled(&names) {
                    return Transition::Refused;
                }
                self.state.merge_details(title, names);
                self.step = Step::Schedule;
                Transition::Moved
            }
            (Step::Schedule, StepInput::Schedule { date, time, site_type }) => {
                let combined = calendar::combine(date, time);
                self.state.merge_schedule(date, time, combined, site_type);
                self.step = Step::Venue;
                Transition::Moved
            }
            (Step::Venue, StepInput::Venue { address, city, address_link }) => {
                if address.trim().is_empty() || city.trim().is_empty() {
                    return Transition::Refused;
                }
                self.state.merge_venue(address, city, address_link);
                self.step = Step::Texts;
                Transition::Moved
            }
            (Step::Texts, StepInput::Texts { invitation_text, host_text }) => {
                if invitation_text.trim().is_empty() || host_text.trim().is_empty() {
                    return Transition::Refused;
                }
                self.state.merge_texts(invitation_text, host_text);
                self.step = Step::Review;
                Transition::Moved
            }
            (Step::Review, StepInput::Translation { enabled, title, text }) => {
                if enabled && (title.trim().is_empty() || text.trim().is_empty()) {
                    return Transition::Refused;
                }
                self.state.merge_translation(enabled, title, text);
                Transition::Moved
            }
            _ => Transition::Refused,
        }
    }

    /// Moves one step back. A no-op from the entry step and once submitted.
    pub fn back(&mut self) -> Transition {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                Transition::Moved
            }
            None => Transition::Refused,
        }
    }

    /// Marks the terminal state after the provisioning call succeeded. Remote
    /// failures never reach this: they leave the cursor on the review step so
    /// the user can retry without re-entering prior steps.
    pub fn mark_submitted(&mut self) {
        if self.step == Step::Review {
            self.step = Step::Submitted;
        }
    }

    fn declared_names_filled(&self, names: &NameFields) -> bool {
        let Some(category) = self.category() else {
            return false;
        };
        (0..category.name_prompts.len()).all(|index| {
            let key = Category::field_key(index);
            names
                .get(&key)
                .map(|value| !value.trim().is_empty())
                .unwrap_or(false)
        })
    }
}
