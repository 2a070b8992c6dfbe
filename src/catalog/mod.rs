//! Celebration category catalog.
//!
//! Static configuration loaded once at process start: every category carries
//! its route key, display label, ordered name prompts, body templates, the
//! configured promo video link, and the renderer strategy the text generator
//! dispatches on.

use once_cell::sync::Lazy;

/// Metadata key recorded for the category route itself.
pub const EVENT_TYPE_KEY: &str = "event_type";

/// Fallback promo video when a category cannot be resolved.
pub const DEFAULT_VIDEO_LINK: &str = "https://cdn.shaqyru24.kz/videos/default.mp4";

/// How the invitation body for a category is produced.
///
/// `Template` runs placeholder substitution over the category's body
/// template. Custom variants bypass substitution with a hand-built sentence;
/// adding a category with bespoke prose means adding a variant here, not
/// branching on route strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererStrategy {
    Template,
    AnniversaryLine,
}

/// A celebration category. Immutable, defined once in [`CategoryCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub route: &'static str,
    pub label: &'static str,
    /// Ordered prompts for the name inputs step 1 collects. The number of
    /// prompts is the number of name fields the category declares.
    pub name_prompts: &'static [&'static str],
    pub body_template: &'static str,
    pub body_template_secondary: &'static str,
    pub video_link: &'static str,
    pub renderer: RendererStrategy,
}

impl Category {
    /// Synthetic field key for the i-th name prompt: `name`, `name2`, ….
    pub fn field_key(index: usize) -> String {
        if index == 0 {
            "name".to_string()
        } else {
            format!("name{}", index + 1)
        }
    }

    /// Remaps a name-field key to the canonical metadata key the
    /// site-provisioning API expects for this category.
    ///
    /// Only the enumerated routes have explicit mappings; everything else
    /// falls through to the raw field key. The intent for future categories
    /// is undocumented upstream, so no pattern is inferred here.
    pub fn metadata_key<'a>(&self, field_key: &'a str) -> &'a str {
        match (self.route, field_key) {
            ("uilenu-toi", "name") => "groom_name",
            ("uilenu-toi", "name2") => "bride_name",
            ("tugan-kun", "name") => "celebrant_name",
            _ => field_key,
        }
    }
}

/// Lookup table over the full celebration set.
pub struct CategoryCatalog {
    entries: Vec<Category>,
}

static CATALOG: Lazy<CategoryCatalog> = Lazy::new(|| CategoryCatalog {
    entries: vec![
        Category {
            route: "uilenu-toi",
            label: "Үйлену той",
            name_prompts: &["Күйеу жігіттің есімі", "Қалыңдықтың есімі"],
            body_template: "Құрметті қонақ! Сізді {name} мен {name2} \
                            үйлену тойына арналған салтанатты кешіміздің \
                            қадірлі қонағы болуға шақырамыз!",
            body_template_secondary: "Дорогие гости! Приглашаем Вас на торжество, \
                                      посвященное бракосочетанию {name} и {name2}!",
            video_link: "https://cdn.shaqyru24.kz/videos/uilenu-toi.mp4",
            renderer: RendererStrategy::Template,
        },
        Category {
            route: "kyz-uzatu",
            label: "Қыз ұзату",
            name_prompts: &["Қыздың есімі"],
            body_template: "Құрметті қонақ! Сізді еркежан {name} қыз ұзату \
                            тойына арналған салтанатты кешімізге шақырамыз!",
            body_template_secondary: "Дорогие гости! Приглашаем Вас на проводы \
                                      невесты {name}!",
            video_link: "https://cdn.shaqyru24.kz/videos/kyz-uzatu.mp4",
            renderer: RendererStrategy::Template,
        },
        Category {
            route: "sundet-toi",
            label: "Сүндет той",
            name_prompts: &["Әкесінің есімі", "Анасының есімі"],
            body_template: "Құрметті қонақ! Сізді {name} мен {name2} ұлының \
                            сүндет тойына шақырамыз!",
            body_template_secondary: "Дорогие гости! Приглашаем Вас на сундет-той \
                                      сына {name} и {name2}!",
            video_link: "https://cdn.shaqyru24.kz/videos/sundet-toi.mp4",
            renderer: RendererStrategy::Template,
        },
        Category {
            route: "tusau-keser",
            label: "Тұсаукесер",
            name_prompts: &["Ата-анасының есімі", "Баланың есімі"],
            body_template: "Құрметті қонақ! Сізді {name} мен {name2} тұсау \
                            кесер тойына арналған мерекелік дастарханымызға \
                            шақырамыз!",
            body_template_secondary: "Дорогие гости! Приглашаем Вас на тусаукесер \
                                      {name} и {name2}!",
            video_link: "https://cdn.shaqyru24.kz/videos/tusau-keser.mp4",
            renderer: RendererStrategy::Template,
        },
        Category {
            route: "merey-toi",
            label: "Мерейтой",
            name_prompts: &["Мерейтой иесінің есімі", "Жасы"],
            body_template: "",
            body_template_secondary: "",
            video_link: "https://cdn.shaqyru24.kz/videos/merey-toi.mp4",
            renderer: RendererStrategy::AnniversaryLine,
        },
        Category {
            route: "tugan-kun",
            label: "Туған күн",
            name_prompts: &["Туған күн иесінің есімі"],
            body_template: "Құрметті қонақ! Сізді {name} туған күніне арналған \
                            мерекелік кешке шақырамыз!",
            body_template_secondary: "Дорогие гости! Приглашаем Вас на день \
                                      рождения {name}!",
            video_link: "https://cdn.shaqyru24.kz/videos/tugan-kun.mp4",
            renderer: RendererStrategy::Template,
        },
    ],
});

impl CategoryCatalog {
    /// The process-wide catalog.
    pub fn global() -> &'static CategoryCatalog {
        &CATALOG
    }

    pub fn find(&self, route: &str) -> Option<&Category> {
        self.entries.iter().find(|entry| entry.route == route)
    }

    pub fn all(&self) -> &[Category] {
        &self.entries
    }
}
