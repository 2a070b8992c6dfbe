use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::CliError;

/// Literal command that sends a text prompt back one step.
const BACK_COMMAND: &str = ":back";

/// Outcome of a free-text prompt.
pub enum TextPrompt {
    Value(String),
    Back,
}

/// Prompts for free-form text. An empty submission keeps the default when
/// one is provided; typing `:back` requests the previous step.
pub fn text_input(label: &str, default: Option<&str>) -> Result<TextPrompt, CliError> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(label)
        .allow_empty(true);
    if let Some(value) = default {
        input = input.default(value.to_string());
    }
    let raw = input.interact_text()?;
    if raw.trim() == BACK_COMMAND {
        return Ok(TextPrompt::Back);
    }
    Ok(TextPrompt::Value(raw.trim().to_string()))
}

/// Yes/no confirmation.
pub fn confirm(label: &str, default: bool) -> Result<bool, CliError> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .default(default)
        .interact()?)
}

/// Arrow-key selection over display labels; returns the chosen index.
pub fn select(label: &str, items: &[String], default: usize) -> Result<usize, CliError> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .items(items)
        .default(default)
        .interact()?)
}

/// Navigation keys the month picker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Enter,
    Esc,
    Unknown,
}

/// Blocks for the next navigation key press.
pub fn read_nav_key() -> Result<NavKey, CliError> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(match key.code {
                    KeyCode::Left => NavKey::Left,
                    KeyCode::Right => NavKey::Right,
                    KeyCode::Enter => NavKey::Enter,
                    KeyCode::Esc => NavKey::Esc,
                    _ => NavKey::Unknown,
                });
            }
            _ => continue,
        }
    }
}
