//! Command interpreter for the Colossal Cave adventure.
//!
//! Turns two-word commands into changes to the world: a lexer and grammar
//! resolver classify the words, the travel resolver and the verb handlers
//! apply them, and the session runs everything that happens around a move.
//! Dwarves, the pirate, the lamp and the closing of the cave are included.

/// Verb handlers and dispatch.
pub mod actions;
/// Lamp and closing timers.
pub mod clock;
/// Game configuration.
pub mod config;
/// Dwarves and the pirate.
pub mod dwarves;
/// Endings, death and scoring.
pub mod ending;
/// Error types for the engine.
pub mod error;
/// Game text and descriptions.
pub mod narrator;
/// Word lookup and grammar.
pub mod parser;
/// Yes/no questions.
pub mod prompt;
/// The game session and turn loop.
pub mod session;
/// Moving the player.
pub mod travel;
/// Verb identifiers and default replies.
pub mod verb;

pub use actions::{ActionContext, Flow, dispatch};
pub use config::GameConfig;
pub use ending::{BlastEnding, Ending, EndingRule, ScoreCard};
pub use error::{EngineError, EngineResult};
pub use narrator::{BuiltinMessages, MessageStore, Reply, Transcript};
pub use parser::{ParsedCommand, Vocabulary};
pub use prompt::Prompt;
pub use session::{GameSession, SessionStatus, TurnReport};
pub use verb::Verb;
