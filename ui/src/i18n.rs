//! Internationalization (i18n) support for `vizchat-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/vizchat-ui.ftl   (fallback/reference)
//!   es-ES/vizchat-ui.ftl   (additional locale)
//! ```
//!
//! Only UI chrome is localized. The fallback assistant reply appended on a
//! failed request is a fixed English string (see `chat::FALLBACK_REPLY`).
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("chat-title")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "vizchat-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(error = %err, "Failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language the loader currently resolves lookups in.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| LOADER.fallback_language().to_string())
}

/// The platform's language code signal, or a component-local one when no
/// platform provides it.
///
/// Components that call `t!` read this signal so a switch re-renders them in
/// place; the tree is never remounted, so component state survives.
pub fn use_language_code() -> Signal<String> {
    use_hook(|| {
        try_consume_context::<Signal<String>>().unwrap_or_else(|| Signal::new(current_language()))
    })
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "chat-title");
        assert_eq!(s, "Visualization Chat");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        set_language("en-US").unwrap();
        let before = fl!(&*LOADER, "chat-send");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "chat-send");
        assert_eq!(before, after);
    }

    #[test]
    fn current_language_is_an_embedded_locale() {
        init();
        let current = current_language();
        assert!(
            available_languages().contains(&current),
            "{current} is not embedded"
        );
    }
}
