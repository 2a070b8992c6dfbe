use super::harmony::{
    harmony_of, is_voiced_consonant, is_voiceless_consonant, is_vowel, Harmony,
};

/// The six genitive suffix forms. Used both for selection and for the
/// idempotence guard against double-suffixing.
pub const SUFFIX_FORMS: &[&str] = &["ның", "нің", "дың", "дің", "тың", "тің"];

/// Appends the grammatically correct genitive suffix to a name.
///
/// The input is trimmed first; an empty name stays empty and a name that
/// already carries one of the six suffix forms is returned unchanged.
pub fn attach_suffix(raw: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        return String::new();
    }
    if SUFFIX_FORMS.iter().any(|form| name.ends_with(form)) {
        return name.to_string();
    }
    let Some(last) = name.chars().last() else {
        return String::new();
    };
    let last = last.to_lowercase().next().unwrap_or(last);
    let harmony = harmony_of(name);
    let suffix = if is_vowel(last) || last == 'н' {
        match harmony {
            Harmony::Back => "ның",
            Harmony::Front => "нің",
        }
    } else if is_voiceless_consonant(last) {
        match harmony {
            Harmony::Back => "тың",
            Harmony::Front => "тің",
        }
    } else if is_voiced_consonant(last) {
        match harmony {
            Harmony::Back => "дың",
            Harmony::Front => "дің",
        }
    } else {
        // Unclassified trailing character (digits, Latin letters, dashes).
        match harmony {
            Harmony::Back => "дың",
            Harmony::Front => "дің",
        }
    };
    format!("{name}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_names_stay_empty() {
        assert_eq!(attach_suffix(""), "");
        assert_eq!(attach_suffix("   "), "");
    }

    #[test]
    fn already_suffixed_names_round_trip() {
        for name in [
            "Асанның",
            "Дәулеттің",
            "Айгүлдің",
            "Гүлнұрдың",
            "Мұраттың",
            "Әсемнің",
        ] {
            assert_eq!(attach_suffix(name), name);
        }
    }

    #[test]
    fn suffix_table_covers_every_branch_in_both_harmonies() {
        let cases = [
            // vowel ending, back / front
            ("Алия", "Алияның"),
            ("Әселі", "Әселінің"),
            // voiced ending other than н, back / front
            ("Гүлнұр", "Гүлнұрдың"),
            ("Айгүл", "Айгүлдің"),
            // н ending, back / front
            ("Асан", "Асанның"),
            ("Еркін", "Еркіннің"),
            // voiceless ending, back / front
            ("Мұрат", "Мұраттың"),
            ("Дәулет", "Дәулеттің"),
        ];
        for (name, expected) in cases {
            assert_eq!(attach_suffix(name), expected, "name: {name}");
        }
    }

    #[test]
    fn final_n_takes_the_vowel_form() {
        assert_eq!(attach_suffix("Асан"), "Асанның");
        assert_eq!(attach_suffix("Серіктен"), "Серіктеннің");
    }

    #[test]
    fn unclassified_ending_defaults_to_voiced_forms() {
        assert_eq!(attach_suffix("Алма-"), "Алма-дың");
        assert_eq!(attach_suffix("70"), "70дың");
    }

    #[test]
    fn month_override_selects_front_forms() {
        assert_eq!(attach_suffix("октябрь"), "октябрьдің");
    }

    #[test]
    fn input_is_trimmed_before_suffixing() {
        assert_eq!(attach_suffix("  Асан  "), "Асанның");
    }
}
