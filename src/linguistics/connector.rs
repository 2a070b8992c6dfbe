use super::harmony::{is_voiced_consonant, is_vowel};

/// The three conjunction particle spellings.
pub const CONNECTORS: &[&str] = &["мен", "бен", "пен"];

/// Connector returned for empty input.
pub const DEFAULT_CONNECTOR: &str = "бен";

/// Selects the conjunction particle that follows a name.
///
/// Only the final character of the trimmed name is inspected: vowels and
/// voiced consonants take "мен", everything else takes "пен". "бен" is
/// reachable only through the empty-input default; natural orthography would
/// also pick it after certain voiceless stops, but the observed product
/// behavior collapses that case into "пен" and downstream text depends on it.
pub fn select_connector(name: &str) -> &'static str {
    let name = name.trim();
    let Some(last) = name.chars().last() else {
        return DEFAULT_CONNECTOR;
    };
    let last = last.to_lowercase().next().unwrap_or(last);
    if is_vowel(last) || is_voiced_consonant(last) {
        "мен"
    } else {
        "пен"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_falls_back_to_ben() {
        assert_eq!(select_connector(""), "бен");
        assert_eq!(select_connector("   "), "бен");
    }

    #[test]
    fn vowel_and_voiced_endings_take_men() {
        assert_eq!(select_connector("Алия"), "мен");
        assert_eq!(select_connector("Асан"), "мен");
        assert_eq!(select_connector("Айгүл"), "мен");
    }

    #[test]
    fn voiceless_endings_take_pen() {
        assert_eq!(select_connector("Серік"), "пен");
        assert_eq!(select_connector("Дәулет"), "пен");
        assert_eq!(select_connector("Жанас"), "пен");
    }

    #[test]
    fn unclassified_endings_take_pen() {
        assert_eq!(select_connector("70"), "пен");
    }
}
