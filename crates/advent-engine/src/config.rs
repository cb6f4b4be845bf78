//! Game configuration.

/// Settings fixed for the lifetime of a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the session's random number generator.
    pub seed: u64,
    /// Characters of each input word that are kept.
    pub word_size: usize,
    /// Lamp turns granted when the player asks for instructions.
    pub limit_with_instructions: i32,
    /// Lamp turns granted otherwise.
    pub limit_without_instructions: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 511,
            word_size: 19,
            limit_with_instructions: 1000,
            limit_without_instructions: 330,
        }
    }
}

impl GameConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many characters of each word are kept.
    pub fn with_word_size(mut self, word_size: usize) -> Self {
        self.word_size = word_size;
        self
    }

    /// Set both lamp allowances.
    pub fn with_lamp_limits(mut self, with_instructions: i32, without_instructions: i32) -> Self {
        self.limit_with_instructions = with_instructions;
        self.limit_without_instructions = without_instructions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 511);
        assert_eq!(config.word_size, 19);
        assert_eq!(config.limit_with_instructions, 1000);
        assert_eq!(config.limit_without_instructions, 330);
    }

    #[test]
    fn builders() {
        let config = GameConfig::new()
            .with_seed(7)
            .with_word_size(5)
            .with_lamp_limits(50, 20);
        assert_eq!(config.seed, 7);
        assert_eq!(config.word_size, 5);
        assert_eq!(config.limit_with_instructions, 50);
        assert_eq!(config.limit_without_instructions, 20);
    }
}
