use dioxus::prelude::*;

use crate::snippet::{parse_plot_html, SandboxFrame, SandboxPolicy};

/// Sandboxed iframe for a service-generated HTML fragment.
///
/// The fragment renders itself with its own embedded script. Extraction runs
/// alongside purely as a diagnostic and never affects what is mounted.
#[component]
pub fn PlotEmbed(html: String) -> Element {
    let policy = try_use_context::<SandboxPolicy>().unwrap_or_default();

    use_effect(use_reactive((&html,), |(html,)| {
        let parsed = parse_plot_html(&html);
        tracing::debug!(
            plot_id = ?parsed.plot_id,
            arguments_parsed = parsed.call.is_some(),
            "Extracted plot snippet"
        );
    }));

    let Some(frame) = SandboxFrame::for_snippet(&html, policy) else {
        return rsx! {};
    };

    rsx! {
        iframe {
            style: "{frame.style}",
            title: "{frame.title}",
            "srcdoc": "{frame.srcdoc}",
            "sandbox": "{frame.sandbox}",
        }
    }
}
