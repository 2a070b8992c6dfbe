use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

/// Vowel-harmony class deciding which allomorph of a suffix or connector fits
/// after a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    Back,
    Front,
}

/// Back (жуан) vowels, including the iotated loan letters treated as back.
pub const BACK_VOWELS: &[char] = &['а', 'о', 'ұ', 'ы', 'у', 'я', 'ю'];

/// Front (жіңішке) vowels.
pub const FRONT_VOWELS: &[char] = &['ә', 'е', 'ө', 'ү', 'і', 'и', 'э'];

/// Voiced consonants, sonorants included.
pub const VOICED_CONSONANTS: &[char] = &[
    'б', 'в', 'г', 'ғ', 'д', 'ж', 'з', 'й', 'л', 'м', 'н', 'ң', 'р',
];

/// Voiceless consonants.
pub const VOICELESS_CONSONANTS: &[char] = &[
    'к', 'қ', 'п', 'с', 'т', 'ф', 'х', 'һ', 'ц', 'ч', 'ш', 'щ',
];

pub fn is_vowel(ch: char) -> bool {
    BACK_VOWELS.contains(&ch) || FRONT_VOWELS.contains(&ch)
}

pub fn is_voiced_consonant(ch: char) -> bool {
    VOICED_CONSONANTS.contains(&ch)
}

pub fn is_voiceless_consonant(ch: char) -> bool {
    VOICELESS_CONSONANTS.contains(&ch)
}

/// Russian-loan month names take front suffixes even though a vowel scan
/// lands on a back vowel. Date-bearing invitation prose hits these often.
const DEFAULT_OVERRIDES: &[(&str, Harmony)] = &[
    ("сентябрь", Harmony::Front),
    ("октябрь", Harmony::Front),
    ("ноябрь", Harmony::Front),
    ("декабрь", Harmony::Front),
    ("февраль", Harmony::Front),
    ("апрель", Harmony::Front),
    ("июнь", Harmony::Front),
    ("июль", Harmony::Front),
];

static OVERRIDES: OnceLock<RwLock<HashMap<String, Harmony>>> = OnceLock::new();

fn overrides() -> &'static RwLock<HashMap<String, Harmony>> {
    OVERRIDES.get_or_init(|| {
        RwLock::new(
            DEFAULT_OVERRIDES
                .iter()
                .map(|(word, harmony)| (word.to_string(), *harmony))
                .collect(),
        )
    })
}

/// Registers a whole-word harmony override for words whose vowel scan
/// misleads. Later registrations replace earlier ones.
pub fn register_harmony_override(word: &str, harmony: Harmony) {
    if let Ok(mut map) = overrides().write() {
        map.insert(word.trim().to_lowercase(), harmony);
    }
}

fn harmony_override(word: &str) -> Option<Harmony> {
    overrides()
        .read()
        .ok()
        .and_then(|map| map.get(&word.trim().to_lowercase()).copied())
}

/// Determines the harmony class of a word.
///
/// Whole-word overrides win. Otherwise the word is scanned from its last
/// character backward and the nearest classified vowel decides; a word with
/// no classified vowel defaults to back harmony.
pub fn harmony_of(word: &str) -> Harmony {
    if let Some(forced) = harmony_override(word) {
        return forced;
    }
    for ch in word.chars().rev() {
        let ch = ch.to_lowercase().next().unwrap_or(ch);
        if BACK_VOWELS.contains(&ch) {
            return Harmony::Back;
        }
        if FRONT_VOWELS.contains(&ch) {
            return Harmony::Front;
        }
    }
    Harmony::Back
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_vowel_decides() {
        assert_eq!(harmony_of("Асан"), Harmony::Back);
        assert_eq!(harmony_of("Дәулет"), Harmony::Front);
        // Mixed word: the vowel closest to the end wins.
        assert_eq!(harmony_of("Гүлнұр"), Harmony::Back);
        assert_eq!(harmony_of("Айгүл"), Harmony::Front);
    }

    #[test]
    fn vowelless_word_defaults_to_back() {
        assert_eq!(harmony_of("Stv"), Harmony::Back);
        assert_eq!(harmony_of(""), Harmony::Back);
    }

    #[test]
    fn month_loanwords_are_forced_front() {
        assert_eq!(harmony_of("октябрь"), Harmony::Front);
        assert_eq!(harmony_of("Ноябрь"), Harmony::Front);
    }

    #[test]
    fn registered_override_wins_over_scan() {
        register_harmony_override("сынақ", Harmony::Front);
        // Scan alone would say back ("а" is the nearest vowel).
        assert_eq!(harmony_of("сынақ"), Harmony::Front);
    }
}
