#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;

use api::ClientConfig;
use ui::views::Chat;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Chat {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

/// Config file consulted when `VIZCHAT_CONFIG_FILE` is unset.
const DEFAULT_CONFIG_FILE: &str = "vizchat.toml";

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Vizchat – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(720.0, 900.0)),
            ),
        )
        .launch(App);
}

fn config_path() -> PathBuf {
    std::env::var_os("VIZCHAT_CONFIG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

fn load_config() -> ClientConfig {
    let path = config_path();
    match ClientConfig::load(Some(&path)) {
        Ok(config) => {
            tracing::info!(endpoint = %config.endpoint, path = %path.display(), "Configuration loaded");
            config
        }
        Err(err) => {
            tracing::error!(error = %err, path = %path.display(), "Invalid configuration; using defaults");
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    use_context_provider(load_config);

    // Global language code; AppHeader updates it on language selection and
    // translated components re-render in place.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> { }
    }
}
