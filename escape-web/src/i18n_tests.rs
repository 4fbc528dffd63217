//! i18n coverage tests to ensure every key the UI asks for is present

use escape_core::{FormField, ValidationError, Venue};
use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> (String, Value) {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    let json: Value =
        serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"));
    (content, json)
}

fn find_nested_key(json: &Value, key: &str) -> bool {
    key.split('.')
        .try_fold(json, |current, part| current.get(part))
        .is_some_and(|v| v.is_string() || v.is_object())
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            // Plural forms differ per language; compare the entry, not its categories.
            let plural = v
                .as_object()
                .is_some_and(|m| m.contains_key("other") && m.values().all(Value::is_string));
            if v.is_object() && !plural {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

fn referenced_keys() -> Vec<&'static str> {
    let mut keys = Vec::new();
    for venue in Venue::ALL {
        let descriptor = venue.descriptor();
        keys.push(descriptor.title_key);
        keys.push(descriptor.payment_key);
        keys.extend(descriptor.notice_keys.iter().copied());
    }
    let errors = [
        ValidationError::AlreadySubmitting,
        ValidationError::ConsentRequired,
        ValidationError::Missing(FormField::Branch),
        ValidationError::Missing(FormField::Theme),
        ValidationError::Missing(FormField::Date),
        ValidationError::Missing(FormField::Time),
        ValidationError::Missing(FormField::Name),
        ValidationError::Missing(FormField::Phone),
        ValidationError::NameTooLong { max: 10 },
        ValidationError::PeopleOutOfRange(7),
        ValidationError::InvalidDate(String::new()),
        ValidationError::UnknownTimeSlot(String::new()),
        ValidationError::UnknownBranch(String::new()),
        ValidationError::ThemeUnavailable(String::new()),
    ];
    keys.extend(errors.iter().map(ValidationError::message_key));
    keys.extend([
        "reservation.errors.past_date",
        "reservation.errors.rejected",
        "reservation.errors.transport",
        "reservation.success",
        "reservation.weekday",
        "reservation.weekend",
    ]);
    keys
}

#[test]
fn locales_have_matching_keys() {
    let (_, base_json) = load_locale("ko");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        assert_eq!(keys, base_keys, "Key set of '{locale}' differs from 'ko'");
    }
}

#[test]
fn keys_used_by_the_core_exist() {
    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        for key in referenced_keys() {
            assert!(
                find_nested_key(&json, key),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn every_locale_file_is_registered() {
    let registered: Vec<&str> = crate::i18n::locales().iter().map(|m| m.code).collect();
    for locale in locale_codes() {
        assert!(registered.contains(&locale.as_str()), "{locale} not registered");
    }
}

#[test]
fn locales_have_balanced_templates() {
    for locale in locale_codes() {
        let (content, _json) = load_locale(&locale);
        let open_count = content.matches('{').count();
        let close_count = content.matches('}').count();
        assert_eq!(
            open_count, close_count,
            "Unmatched braces in {locale}: {open_count} open, {close_count} close"
        );
        assert!(
            !content.contains("{{"),
            "Found doubled opening brace in {locale}"
        );
    }
}
