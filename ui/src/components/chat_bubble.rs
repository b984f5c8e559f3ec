use dioxus::prelude::*;

use super::PlotEmbed;
use crate::chat::ChatTurn;

#[component]
pub fn ChatBubble(turn: ChatTurn) -> Element {
    let class = format!("chat-bubble {}", turn.role.css_class());

    rsx! {
        div { class: "{class}",
            div { class: "chat-text", "{turn.text}" }
            if let Some(html) = turn.html_snippet.clone() {
                div { class: "chat-plot",
                    PlotEmbed { html }
                }
            }
        }
    }
}

/// Placeholder assistant bubble shown while a request is in flight.
#[component]
pub fn PendingBubble() -> Element {
    let _ = crate::i18n::use_language_code().read();

    rsx! {
        div { class: "chat-bubble assistant chat-bubble--pending",
            div { class: "chat-text", {crate::t!("chat-thinking")} }
        }
    }
}
