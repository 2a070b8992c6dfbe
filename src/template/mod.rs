//! Invitation text renderer.
//!
//! Produces the editable default body text from a category's template and the
//! collected name fields. Pure string shaping: absent inputs degrade to empty
//! substitutions and the renderer never panics.

use std::collections::BTreeMap;

use crate::catalog::{Category, RendererStrategy};
use crate::linguistics::{attach_suffix, select_connector, CONNECTORS};

/// Name fields collected by step 1, keyed `name`, `name2`, ….
pub type NameFields = BTreeMap<String, String>;

/// Renders the default invitation body for a category.
pub fn render(category: &Category, names: &NameFields) -> String {
    match category.renderer {
        RendererStrategy::AnniversaryLine => render_anniversary(names),
        RendererStrategy::Template => render_template(category.body_template, names),
    }
}

/// Renders the secondary-language default body, when the category has one.
///
/// Secondary templates substitute names verbatim: the Kazakh suffix and
/// connector rules do not apply to the translated prose.
pub fn render_secondary(category: &Category, names: &NameFields) -> String {
    let template = category.body_template_secondary;
    if template.is_empty() {
        return String::new();
    }
    let values: BTreeMap<String, String> = names
        .iter()
        .map(|(key, value)| (key.clone(), value.trim().to_string()))
        .collect();
    substitute(template, &values)
}

/// Hand-built anniversary sentence: suffixed celebrant plus the bare age
/// value, no placeholder substitution.
fn render_anniversary(names: &NameFields) -> String {
    let name = trimmed(names, "name");
    let age = trimmed(names, "name2");
    format!(
        "Құрметті қонақ! Сізді {} {} жасқа толуына орай берілетін мерейтойына шақырамыз!",
        attach_suffix(name),
        age
    )
}

fn render_template(template: &str, names: &NameFields) -> String {
    if template.is_empty() {
        return String::new();
    }

    let populated: Vec<&String> = names
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, _)| key)
        .collect();

    let name = trimmed(names, "name");
    let name2 = trimmed(names, "name2");
    let both_names = !name.is_empty() && !name2.is_empty();

    let mut values: BTreeMap<String, String> = names
        .iter()
        .map(|(key, value)| (key.clone(), value.trim().to_string()))
        .collect();

    if both_names {
        // The leading name stays bare: it is the sentence subject in every
        // default template. Only the second name carries the suffix.
        values.insert("name2".to_string(), attach_suffix(name2));
    } else if populated.len() == 1 {
        let key = populated[0].clone();
        let suffixed = attach_suffix(values.get(&key).map(String::as_str).unwrap_or(""));
        values.insert(key, suffixed);
    }

    let mut text = substitute(template, &values);
    if both_names {
        text = replace_connectors(&text, select_connector(name));
    }
    text
}

fn trimmed<'a>(names: &'a NameFields, key: &str) -> &'a str {
    names.get(key).map(|value| value.trim()).unwrap_or("")
}

/// Replaces every `{key}` placeholder. Keys without a value, including keys
/// the template invents, substitute to the empty string.
fn substitute(template: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) => {
                let key = &after_open[..close];
                if let Some(value) = values.get(key) {
                    out.push_str(value);
                }
                rest = &after_open[close + 1..];
            }
            None => {
                // Unterminated placeholder: keep the remainder verbatim.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Rewrites every standalone conjunction token to the freshly selected one.
///
/// Replacement is token-bounded so that a kinship noun following the
/// conjunction ("… мен ұлының …") survives intact, and so that words merely
/// containing a conjunction spelling are never touched.
fn replace_connectors(text: &str, connector: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut token = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            flush_token(&mut out, &mut token, connector);
            out.push(ch);
        } else {
            token.push(ch);
        }
    }
    flush_token(&mut out, &mut token, connector);
    out
}

fn flush_token(out: &mut String, token: &mut String, connector: &str) {
    if token.is_empty() {
        return;
    }
    if CONNECTORS.contains(&token.as_str()) {
        out.push_str(connector);
    } else {
        out.push_str(token);
    }
    token.clear();
}
