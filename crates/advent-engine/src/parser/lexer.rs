//! Splitting an input line into words.

/// The first two words of an input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Words {
    /// First word, empty if the line was blank.
    pub word1: String,
    /// Second word, empty if there was only one.
    pub word2: String,
}

impl Words {
    /// Build from two words as given.
    pub fn new(word1: impl Into<String>, word2: impl Into<String>) -> Self {
        Self {
            word1: word1.into(),
            word2: word2.into(),
        }
    }
}

/// Split a line into its first two words, lower-cased and cut to `word_size`
/// characters. Extra words are ignored.
pub fn tokenize(line: &str, word_size: usize) -> Words {
    let mut tokens = line
        .split_whitespace()
        .map(|token| token.to_lowercase().chars().take(word_size).collect::<String>());
    let word1 = tokens.next().unwrap_or_default();
    let word2 = tokens.next().unwrap_or_default();
    Words { word1, word2 }
}
