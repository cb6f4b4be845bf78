//! Turning two words into a command.

use advent_core::{Motion, ObjectId};
use serde::Serialize;

use super::lexer::Words;
use super::vocabulary::{Vocabulary, Word, WordClass};
use crate::verb::Verb;

/// The object of a transitive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Noun {
    /// A game object.
    Object(ObjectId),
    /// Literal words to be spoken.
    Quoted,
}

/// A command the engine can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParsedCommand {
    /// Move the player.
    Motion(Motion),
    /// A verb on its own.
    Intransitive(Verb),
    /// A verb applied to something.
    Transitive {
        /// The action.
        verb: Verb,
        /// What it applies to.
        object: Noun,
    },
    /// An object named on its own.
    Object(ObjectId),
}

/// Why a line could not be understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// A word is not in the vocabulary.
    UnknownWord,
    /// A word that just prints a message.
    Message(u16),
    /// Two words of a class that cannot be combined.
    BadGrammar,
}

/// A resolved command together with the words that named its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    /// The command.
    pub command: ParsedCommand,
    /// The word naming the verb, for "X what?" replies.
    pub verb_word: String,
    /// The word naming the object, for "I see no X here." replies.
    pub noun_word: String,
}

impl Phrase {
    fn new(command: ParsedCommand, verb_word: &str, noun_word: &str) -> Self {
        Self {
            command,
            verb_word: verb_word.to_string(),
            noun_word: noun_word.to_string(),
        }
    }
}

/// Resolve two words into a command.
///
/// Every combination of word classes yields either a command or a failure.
pub fn resolve(vocabulary: &Vocabulary, words: &Words) -> Result<Phrase, ParseFailure> {
    let (w1, w2) = (words.word1.as_str(), words.word2.as_str());
    let first = vocabulary.classify(w1).ok_or(ParseFailure::UnknownWord)?;

    if first.class == WordClass::Verb && verb_of(first)? == Verb::Say {
        let command = ParsedCommand::Transitive {
            verb: Verb::Say,
            object: Noun::Quoted,
        };
        return Ok(Phrase::new(command, w1, w2));
    }

    let second = if w2.is_empty() {
        None
    } else {
        Some(vocabulary.classify(w2).ok_or(ParseFailure::UnknownWord)?)
    };
    let second_class = second.map(|w| w.class);

    if first.class == WordClass::Message {
        return Err(ParseFailure::Message(first.code));
    }
    if let Some(word) = second.filter(|w| w.class == WordClass::Message) {
        return Err(ParseFailure::Message(word.code));
    }

    match (first.class, second) {
        (WordClass::Motion, Some(word)) if word.class == WordClass::Motion => {
            Err(ParseFailure::BadGrammar)
        }
        (WordClass::Motion, _) => Ok(Phrase::new(
            ParsedCommand::Motion(Motion::new(first.code)),
            "",
            "",
        )),
        (_, Some(word)) if word.class == WordClass::Motion => Ok(Phrase::new(
            ParsedCommand::Motion(Motion::new(word.code)),
            "",
            "",
        )),
        (WordClass::Object, Some(word)) if word.class == WordClass::Verb => {
            let command = ParsedCommand::Transitive {
                verb: verb_of(word)?,
                object: Noun::Object(object_of(first)?),
            };
            Ok(Phrase::new(command, w2, w1))
        }
        (WordClass::Object, _) if second_class == Some(WordClass::Object) => {
            Err(ParseFailure::BadGrammar)
        }
        (WordClass::Object, _) => Ok(Phrase::new(
            ParsedCommand::Object(object_of(first)?),
            "",
            w1,
        )),
        (WordClass::Verb, _) if second_class == Some(WordClass::Verb) => {
            Err(ParseFailure::BadGrammar)
        }
        (WordClass::Verb, Some(word)) if word.class == WordClass::Object => {
            let command = ParsedCommand::Transitive {
                verb: verb_of(first)?,
                object: Noun::Object(object_of(word)?),
            };
            Ok(Phrase::new(command, w1, w2))
        }
        (WordClass::Verb, _) => Ok(Phrase::new(
            ParsedCommand::Intransitive(verb_of(first)?),
            w1,
            "",
        )),
        (WordClass::Message, _) => Err(ParseFailure::Message(first.code)),
    }
}

fn verb_of(word: Word) -> Result<Verb, ParseFailure> {
    Verb::from_code(word.code).ok_or(ParseFailure::UnknownWord)
}

fn object_of(word: Word) -> Result<ObjectId, ParseFailure> {
    ObjectId::new(i32::from(word.code)).map_err(|_| ParseFailure::UnknownWord)
}
