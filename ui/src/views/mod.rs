mod chat;
pub use chat::Chat;
