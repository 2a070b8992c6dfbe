//! Translation-string lookup.
//!
//! An opaque key→string dictionary per language. A missing path returns the
//! dotted path itself and logs a warning, so a missing translation shows up
//! in the UI as the key instead of crashing the flow. The language is always
//! an explicit parameter; there is no ambient current-language state.

use serde_json::{json, Value};
use std::collections::BTreeMap;

pub struct Translations {
    bundles: BTreeMap<String, Value>,
}

impl Translations {
    /// The embedded kk/ru bundle covering the wizard chrome.
    pub fn new() -> Self {
        let mut bundles = BTreeMap::new();
        bundles.insert("kk".to_string(), default_kk());
        bundles.insert("ru".to_string(), default_ru());
        Self { bundles }
    }

    /// Replaces or adds the bundle for a language.
    pub fn set_bundle(&mut self, language: &str, bundle: Value) {
        self.bundles.insert(language.to_string(), bundle);
    }

    /// Resolves a dotted key path in the given language.
    pub fn get(&self, language: &str, key: &str) -> String {
        let resolved = self
            .bundles
            .get(language)
            .and_then(|bundle| lookup(bundle, key));
        match resolved {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(language, key, "missing translation, falling back to key");
                key.to_string()
            }
        }
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup<'a>(bundle: &'a Value, key: &str) -> Option<&'a str> {
    let mut node = bundle;
    for segment in key.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

fn default_kk() -> Value {
    json!({
        "wizard": {
            "category": "Той түрі",
            "variant": "Сайт нұсқасы",
            "details": { "title": "Той атауы", "names": "Есімдер" },
            "schedule": { "date": "Күні", "time": "Уақыты", "site_type": "Сайт үлгісі" },
            "venue": { "address": "Мекенжай", "city": "Қала", "link": "Картадағы сілтеме" },
            "texts": { "invitation": "Шақыру мәтіні", "hosts": "Той иелері" },
            "review": {
                "secondary": "Екінші тілдегі нұсқа керек пе?",
                "secondary_title": "Екінші тілдегі атауы",
                "secondary_text": "Екінші тілдегі мәтін",
                "submit": "Сайтты құру"
            },
            "back_hint": "Алдыңғы қадамға оралу үшін :back деп теріңіз"
        },
        "submit": {
            "in_progress": "Сайт құрылуда...",
            "done": "Сайт дайын!",
            "failed": "Сайт құру сәтсіз аяқталды"
        }
    })
}

fn default_ru() -> Value {
    json!({
        "wizard": {
            "category": "Вид торжества",
            "variant": "Вариант сайта",
            "details": { "title": "Название торжества", "names": "Имена" },
            "schedule": { "date": "Дата", "time": "Время", "site_type": "Шаблон сайта" },
            "venue": { "address": "Адрес", "city": "Город", "link": "Ссылка на карту" },
            "texts": { "invitation": "Текст приглашения", "hosts": "Хозяева торжества" },
            "review": {
                "secondary": "Нужна версия на втором языке?",
                "secondary_title": "Название на втором языке",
                "secondary_text": "Текст на втором языке",
                "submit": "Создать сайт"
            },
            "back_hint": "Введите :back, чтобы вернуться на шаг назад"
        },
        "submit": {
            "in_progress": "Создаем сайт...",
            "done": "Сайт готов!",
            "failed": "Не удалось создать сайт"
        }
    })
}
