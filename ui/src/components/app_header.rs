use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Page header with the chat title and, when more than one locale is
/// embedded, a language picker.
///
/// Selecting a language writes the shared language code signal, which
/// re-renders every component that reads it.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let mut lang_code = i18n::use_language_code();
    let current_lang = lang_code();
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::info!(lang = %val, "Language switched");
                lang_code.set(val);
            }
            Err(err) => tracing::warn!(lang = %val, error = %err, "Language switch failed"),
        }
    };

    rsx! {
        header { class: "chat-header",
            h1 { class: "chat-title", {t!("chat-title")} }

            if show_switcher {
                div { class: "chat-header__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!("nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{current_lang}",
                        oninput: on_change,
                        { langs().iter().map(|code| {
                            let c = code.clone();
                            rsx!{
                                option { key: "{c}", value: "{c}", "{c}" }
                            }
                        })}
                    }
                }
            }
        }
    }
}
