//! Shared UI crate for Vizchat. Conversation logic, snippet handling and views
//! live here; the platform crates only launch them.

pub mod chat;
pub mod i18n;
pub mod snippet;
pub mod views;

pub mod components {
    mod app_header;
    mod chat_bubble;
    mod plot_embed;

    pub use app_header::AppHeader;
    pub use chat_bubble::{ChatBubble, PendingBubble};
    pub use plot_embed::PlotEmbed;
}
