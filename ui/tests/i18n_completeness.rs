//! Translation completeness checks.
//!
//! - Every key referenced through `t!("...")` under `src/` exists in the
//!   fallback (en-US) bundle.
//! - Every other locale provides every fallback key, without duplicates.
//!
//! The FTL "parser" here only looks at `key = value` lines; comments,
//! attributes and continuation lines are skipped.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "vizchat-ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn message_key(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(['#', '.', '-', '[', '@']) {
        return None;
    }
    let (key, _) = line.split_once('=')?;
    let key = key.trim();
    let valid = !key.is_empty() && key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'));
    valid.then_some(key)
}

fn ftl_keys(src: &str, locale: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for key in src.lines().filter_map(message_key) {
        assert!(
            keys.insert(key.to_string()),
            "Duplicate key `{key}` in {locale}/{FTL_FILENAME}"
        );
    }
    keys
}

fn read_locale(locale: &str) -> BTreeSet<String> {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Failed to read {}: {err}", path.display()));
    ftl_keys(&content, locale)
}

fn locales() -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory present")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    dirs.sort();
    dirs
}

/// Keys of the `t!("key"` invocations in `content`. Macros whose name merely
/// ends in `t` (`format!`, `print!`) are skipped.
fn t_macro_keys(content: &str) -> Vec<&str> {
    content
        .match_indices("t!(\"")
        .filter(|(idx, _)| {
            content[..*idx]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
        })
        .filter_map(|(idx, needle)| {
            let rest = &content[idx + needle.len()..];
            rest.find('"').map(|end| &rest[..end])
        })
        .collect()
}

/// Collect `t!("key"` literals from every `.rs` file below `dir`.
fn referenced_keys(dir: &Path, found: &mut HashSet<String>) {
    for entry in fs::read_dir(dir).expect("readable source dir").flatten() {
        let path = entry.path();
        if path.is_dir() {
            referenced_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        found.extend(t_macro_keys(&content).into_iter().map(str::to_string));
    }
}

#[test]
fn only_t_macro_invocations_count_as_keys() {
    let src = r#"
        let class = format!("chat-bubble {}", role);
        print!("nope");
        let title = t!("chat-title");
        let label = crate::t!("chat-send");
    "#;
    assert_eq!(t_macro_keys(src), ["chat-title", "chat-send"]);
}

#[test]
fn i18n_toml_domain_matches_bundle_filename() {
    let path = crate_root().join("i18n.toml");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Failed to read {}: {err}", path.display()));
    let domain = content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("domain"))
        .filter_map(|rest| rest.trim_start().strip_prefix('='))
        .map(|value| value.trim().trim_matches('"'))
        .next()
        .expect("i18n.toml declares a fluent domain");
    assert_eq!(format!("{domain}.ftl"), FTL_FILENAME);
}

#[test]
fn fallback_bundle_covers_referenced_keys() {
    let fallback = read_locale("en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut referenced = HashSet::new();
    referenced_keys(&crate_root().join("src"), &mut referenced);
    assert!(!referenced.is_empty(), "No t!() usages found under src/");

    let mut missing: Vec<_> = referenced.iter().filter(|k| !fallback.contains(*k)).collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in en-US: {missing:?}"
    );
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = read_locale("en-US");
    let mut failures = Vec::new();

    for locale in locales().into_iter().filter(|l| l != "en-US") {
        let keys = read_locale(&locale);
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n\n")
    );
}

#[test]
fn at_least_two_locales_are_embedded() {
    let all = locales();
    assert!(all.iter().any(|l| l == "en-US"));
    assert!(all.len() > 1, "Language picker needs more than one locale: {all:?}");
}
