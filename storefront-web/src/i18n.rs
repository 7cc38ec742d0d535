use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "hi",
        name: "हिन्दी",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("hi", include_str!("../i18n/hi.json")),
];

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(build_bundle("en").unwrap_or_else(fallback_bundle));
}

/// Switch the active language bundle. Unknown codes are ignored.
///
/// The choice lasts for the page view only.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unknown locale {lang}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
        let _ = el.set_attribute("lang", lang);
    }
}

#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{var}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// Translate a key with a single `{name}` substitution.
#[must_use]
pub fn tr1(key: &str, var: &str, value: &str) -> String {
    let mut vars = BTreeMap::new();
    vars.insert(var, value);
    tr(key, Some(&vars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_replaces_placeholders() {
        let value = Value::String("Order {id} ready, {id}!".into());
        let mut args = BTreeMap::new();
        args.insert("id", "ORD1");
        let resolved = render_value(&value, Some(&args)).unwrap();
        assert_eq!(resolved, "Order ORD1 ready, ORD1!");
    }

    #[test]
    fn nested_lookup_walks_dotted_keys() {
        let value: Value = serde_json::from_str(r#"{"a":{"b":{"c":"deep"}}}"#).unwrap();
        assert_eq!(
            get_nested_value(&value, "a.b.c").and_then(Value::as_str),
            Some("deep")
        );
        assert!(get_nested_value(&value, "a.x").is_none());
    }

    #[test]
    fn every_bundle_parses_and_covers_english_keys() {
        fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
            if let Value::Object(map) = value {
                for (k, v) in map {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_keys(v, &key, out);
                }
            } else {
                out.push(prefix.to_string());
            }
        }

        let english = load_translations("en").unwrap();
        let mut keys = Vec::new();
        leaf_keys(&english, "", &mut keys);
        for meta in locales() {
            let bundle = load_translations(meta.code).unwrap();
            for key in &keys {
                assert!(
                    get_nested_value(&bundle, key).is_some(),
                    "{} is missing {key}",
                    meta.code
                );
            }
        }
    }
}
