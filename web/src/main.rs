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
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Browser builds have no config file; the endpoint is the hosted default.
    use_context_provider(ClientConfig::default);

    // Shared language code; components using `t!` read it and re-render.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Vizchat" }
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}
