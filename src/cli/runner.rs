use chrono::{Local, NaiveDate, NaiveTime};

use crate::catalog::CategoryCatalog;
use crate::config::Config;
use crate::i18n::Translations;
use crate::template::NameFields;
use crate::wizard::calendar::{self, MonthView};
use crate::wizard::{
    EntryContext, EventKind, Step, StepInput, Transition, WizardController,
};

use super::output;
use super::prompts::{self, NavKey, TextPrompt};
use super::CliError;

const SITE_TYPES: &[&str] = &["classic", "gold"];
const TOTAL_STEPS: u8 = 5;

/// Walks the user through the five wizard steps, relaying every answer to
/// the controller and every refusal back to the user.
pub struct WizardRunner<'a> {
    translations: &'a Translations,
    language: String,
}

impl<'a> WizardRunner<'a> {
    pub fn new(translations: &'a Translations, language: impl Into<String>) -> Self {
        Self {
            translations,
            language: language.into(),
        }
    }

    fn text(&self, key: &str) -> String {
        self.translations.get(&self.language, key)
    }

    /// Collects the entry parameters the hosting page would normally pass.
    pub fn choose_entry(
        &self,
        config: &Config,
        catalog: &CategoryCatalog,
        existing_site_id: Option<String>,
    ) -> Result<EntryContext, CliError> {
        let labels: Vec<String> = catalog
            .all()
            .iter()
            .map(|category| category.label.to_string())
            .collect();
        let picked = prompts::select(&self.text("wizard.category"), &labels, 0)?;
        let route = catalog.all()[picked].route.to_string();

        let kinds = vec!["video".to_string(), "photo".to_string()];
        let kind = prompts::select(&self.text("wizard.variant"), &kinds, 0)?;

        Ok(EntryContext {
            category_route: route,
            event_kind: EventKind::from_param(&kinds[kind]),
            existing_site_id,
            tariff: Some(config.default_tariff.clone()),
        })
    }

    /// Runs the step loop until the review step is complete and the wizard
    /// is ready to submit.
    pub fn collect(&self, controller: &mut WizardController<'_>) -> Result<(), CliError> {
        loop {
            match controller.step() {
                Step::Details => self.step_details(controller)?,
                Step::Schedule => self.step_schedule(controller)?,
                Step::Venue => self.step_venue(controller)?,
                Step::Texts => self.step_texts(controller)?,
                Step::Review => {
                    if self.step_review(controller)? {
                        return Ok(());
                    }
                }
                Step::Submitted => return Ok(()),
            }
        }
    }

    fn step_details(&self, controller: &mut WizardController<'_>) -> Result<(), CliError> {
        output::step_header(1, TOTAL_STEPS, self.text("wizard.details.title"));
        let default_title = controller.default_title();
        let title = match prompts::text_input(&self.text("wizard.details.title"), Some(&default_title))? {
            TextPrompt::Value(value) => value,
            TextPrompt::Back => {
                output::warning("Бұл алғашқы қадам.");
                return Ok(());
            }
        };

        let prompts_list = controller
            .category()
            .map(|category| category.name_prompts)
            .unwrap_or_default();
        let mut names = NameFields::new();
        for (index, prompt) in prompts_list.iter().enumerate() {
            let key = crate::catalog::Category::field_key(index);
            match prompts::text_input(prompt, None)? {
                TextPrompt::Value(value) => {
                    names.insert(key, value);
                }
                TextPrompt::Back => {
                    output::warning("Бұл алғашқы қадам.");
                    return Ok(());
                }
            }
        }

        if controller.advance(StepInput::Details { title, names }) == Transition::Refused {
            output::warning("Атауы мен барлық есімдер міндетті.");
        }
        Ok(())
    }

    fn step_schedule(&self, controller: &mut WizardController<'_>) -> Result<(), CliError> {
        output::step_header(2, TOTAL_STEPS, self.text("wizard.schedule.date"));
        let today = Local::now().date_naive();
        let Some(date) = self.pick_date(today)? else {
            controller.back();
            return Ok(());
        };
        let time = self.pick_time()?;

        let types: Vec<String> = SITE_TYPES.iter().map(|name| name.to_string()).collect();
        let picked = prompts::select(&self.text("wizard.schedule.site_type"), &types, 0)?;

        controller.advance(StepInput::Schedule {
            date,
            time,
            site_type: types[picked].clone(),
        });
        Ok(())
    }

    fn step_venue(&self, controller: &mut WizardController<'_>) -> Result<(), CliError> {
        output::step_header(3, TOTAL_STEPS, self.text("wizard.venue.address"));
        output::info(self.text("wizard.back_hint"));
        let address = match prompts::text_input(&self.text("wizard.venue.address"), None)? {
            TextPrompt::Value(value) => value,
            TextPrompt::Back => {
                controller.back();
                return Ok(());
            }
        };
        let city = match prompts::text_input(&self.text("wizard.venue.city"), None)? {
            TextPrompt::Value(value) => value,
            TextPrompt::Back => {
                controller.back();
                return Ok(());
            }
        };
        let link = match prompts::text_input(&self.text("wizard.venue.link"), Some(""))? {
            TextPrompt::Value(value) => value,
            TextPrompt::Back => {
                controller.back();
                return Ok(());
            }
        };

        let outcome = controller.advance(StepInput::Venue {
            address,
            city,
            address_link: link,
        });
        if outcome == Transition::Refused {
            output::warning("Мекенжай мен қала міндетті.");
        }
        Ok(())
    }

    fn step_texts(&self, controller: &mut WizardController<'_>) -> Result<(), CliError> {
        output::step_header(4, TOTAL_STEPS, self.text("wizard.texts.invitation"));
        output::info(self.text("wizard.back_hint"));
        let default_invitation = controller.default_invitation_text();
        let invitation =
            match prompts::text_input(&self.text("wizard.texts.invitation"), Some(&default_invitation))? {
                TextPrompt::Value(value) => value,
                TextPrompt::Back => {
                    controller.back();
                    return Ok(());
                }
            };
        let default_hosts = controller.default_host_text();
        let hosts = match prompts::text_input(&self.text("wizard.texts.hosts"), Some(&default_hosts))? {
            TextPrompt::Value(value) => value,
            TextPrompt::Back => {
                controller.back();
                return Ok(());
            }
        };

        let outcome = controller.advance(StepInput::Texts {
            invitation_text: invitation,
            host_text: hosts,
        });
        if outcome == Transition::Refused {
            output::warning("Шақыру мәтіні мен той иелері міндетті.");
        }
        Ok(())
    }

    /// Returns true once the review step is complete and submission can
    /// proceed.
    fn step_review(&self, controller: &mut WizardController<'_>) -> Result<bool, CliError> {
        output::step_header(5, TOTAL_STEPS, self.text("wizard.review.submit"));
        let enabled = prompts::confirm(&self.text("wizard.review.secondary"), false)?;
        let (title, text) = if enabled {
            let title = match prompts::text_input(&self.text("wizard.review.secondary_title"), None)? {
                TextPrompt::Value(value) => value,
                TextPrompt::Back => {
                    controller.back();
                    return Ok(false);
                }
            };
            let default_text = controller.default_secondary_text();
            let text = match prompts::text_input(
                &self.text("wizard.review.secondary_text"),
                Some(&default_text),
            )? {
                TextPrompt::Value(value) => value,
                TextPrompt::Back => {
                    controller.back();
                    return Ok(false);
                }
            };
            (title, text)
        } else {
            (String::new(), String::new())
        };

        let outcome = controller.advance(StepInput::Translation {
            enabled,
            title,
            text,
        });
        if outcome == Transition::Refused {
            output::warning("Екінші тілдегі атауы мен мәтіні міндетті.");
            return Ok(false);
        }
        Ok(true)
    }

    /// Month navigation with arrow keys, then a day pick over the
    /// selectable days. `None` means the user backed out.
    fn pick_date(&self, today: NaiveDate) -> Result<Option<NaiveDate>, CliError> {
        let mut view = MonthView::current(today);
        loop {
            output::info(format!("{}  (← → ай, Enter — таңдау, Esc — артқа)", view.label()));
            match prompts::read_nav_key()? {
                NavKey::Left => match view.prev(today) {
                    Some(prev) => view = prev,
                    None => output::warning("Өткен айға оралу мүмкін емес."),
                },
                NavKey::Right => view = view.next(),
                NavKey::Esc => return Ok(None),
                NavKey::Enter => {
                    let days: Vec<NaiveDate> = view
                        .days()
                        .into_iter()
                        .filter(|day| calendar::day_selectable(*day, today))
                        .collect();
                    if days.is_empty() {
                        output::warning("Бұл айда таңдауға болатын күн жоқ.");
                        continue;
                    }
                    let labels: Vec<String> =
                        days.iter().map(|day| day.format("%Y-%m-%d").to_string()).collect();
                    let picked =
                        prompts::select(&self.text("wizard.schedule.date"), &labels, 0)?;
                    return Ok(Some(days[picked]));
                }
                NavKey::Unknown => continue,
            }
        }
    }

    fn pick_time(&self) -> Result<NaiveTime, CliError> {
        let slots = calendar::time_slots();
        let labels: Vec<String> = slots
            .iter()
            .map(|slot| slot.format("%H:%M").to_string())
            .collect();
        let picked = prompts::select(&self.text("wizard.schedule.time"), &labels, 0)?;
        Ok(slots[picked])
    }
}
