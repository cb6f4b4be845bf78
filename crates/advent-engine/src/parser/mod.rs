//! Input parsing: vocabulary, tokenizing and grammar.

mod grammar;
mod lexer;
mod vocabulary;

pub use grammar::{Noun, ParseFailure, ParsedCommand, Phrase, resolve};
pub use lexer::{Words, tokenize};
pub use vocabulary::{Vocabulary, Word, WordClass};
