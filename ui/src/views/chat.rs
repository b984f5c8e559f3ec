use std::rc::Rc;

use api::{ApiError, ClientConfig, VisualizationClient, VisualizationService};
use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::chat::QuerySession;
use crate::components::{AppHeader, ChatBubble, PendingBubble};
use crate::i18n;
use crate::snippet::SandboxPolicy;
use crate::t;

#[derive(Debug, Clone, Copy)]
enum ChatEvent {
    Submit,
}

/// The chat page: transcript, pending indicator, error banner and input form.
///
/// Reads an optional [`ClientConfig`] from context; defaults apply otherwise.
#[component]
pub fn Chat() -> Element {
    let config = try_use_context::<ClientConfig>().unwrap_or_default();
    use_context_provider(|| SandboxPolicy::from_trust(config.trust_snippets));

    // Translated labels follow the language signal; the session is never reset.
    let _ = i18n::use_language_code().read();

    let mut session = use_signal(QuerySession::default);
    let mut chat_end = use_signal(|| Option::<Rc<MountedData>>::None);

    let client = use_hook(|| {
        Rc::new(
            VisualizationClient::new(&config)
                .inspect_err(|err| tracing::error!(error = %err, "Failed to build visualization client"))
                .map_err(|err| err.to_string()),
        )
    });

    let submitter = use_coroutine(move |mut rx: UnboundedReceiver<ChatEvent>| {
        let client = client.clone();
        async move {
            while let Some(event) = rx.next().await {
                match event {
                    ChatEvent::Submit => {
                        let Some(query) = session.with_mut(|s| s.begin_submit()) else {
                            continue;
                        };
                        let outcome = match &*client {
                            Ok(client) => client.visualize(&query).await,
                            Err(reason) => Err(ApiError::Unavailable(reason.clone())),
                        };
                        session.with_mut(|s| s.complete(outcome));
                    }
                }
            }
        }
    });

    // Keep the newest turn in view.
    use_effect(move || {
        let state = session.read();
        let _ = (state.transcript().len(), state.is_submitting());
        if let Some(anchor) = (*chat_end.peek()).clone() {
            spawn(async move {
                let _ = anchor.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    });

    let state = session.read();
    let loading = state.is_submitting();
    let can_send = !loading && state.can_submit();
    let input_value = state.input().to_string();
    let turns: Vec<_> = state.transcript().iter().cloned().collect();
    let error_message = state.last_error().map(str::to_string);
    drop(state);

    let send_label = if loading {
        t!("chat-sending")
    } else {
        t!("chat-send")
    };

    rsx! {
        main { class: "chat-main",
            AppHeader {}

            div { class: "chat-window",
                for (idx, turn) in turns.into_iter().enumerate() {
                    ChatBubble { key: "{idx}", turn }
                }
                if loading {
                    PendingBubble {}
                }
                div { onmounted: move |cx: MountedEvent| chat_end.set(Some(cx.data())) }
            }

            if let Some(err) = error_message {
                div { class: "chat-error", role: "alert",
                    span { class: "chat-error__label", {t!("chat-error-label")} }
                    " {err}"
                }
            }

            form {
                class: "chat-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submitter.send(ChatEvent::Submit);
                },
                input {
                    r#type: "text",
                    class: "chat-input",
                    value: "{input_value}",
                    placeholder: t!("chat-placeholder"),
                    disabled: loading,
                    required: true,
                    oninput: move |evt: FormEvent| session.with_mut(|s| s.set_input(evt.value())),
                }
                button {
                    r#type: "submit",
                    class: "chat-send",
                    disabled: !can_send,
                    "{send_label}"
                }
            }
        }
    }
}
