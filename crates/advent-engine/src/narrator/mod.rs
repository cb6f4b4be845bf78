//! Narration: game text, descriptions and the per-turn transcript.

mod scene;
mod store;
mod texts;
mod transcript;

pub use scene::{describe, describe_items, inventory};
pub use store::{BuiltinMessages, MessageStore};
pub use transcript::{Reply, Transcript};
