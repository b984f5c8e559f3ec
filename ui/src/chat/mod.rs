mod session;
mod transcript;

pub use session::{strip_code_fences, Phase, QuerySession, FALLBACK_REPLY};
pub use transcript::{ChatTurn, Role, Transcript};
