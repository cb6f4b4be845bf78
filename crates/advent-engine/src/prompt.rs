//! Yes/no questions that hold a turn open until the next input line.

use advent_core::WorldState;
use serde::Serialize;

/// A question waiting for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Prompt {
    /// Whether to show the instructions at the start.
    Instructions,
    /// Whether to attack the dragon bare-handed.
    KillDragon,
    /// Whether to pay for the oyster's clue.
    ReadOyster,
    /// Whether to quit.
    Quit,
    /// Whether to be brought back after dying.
    Reincarnate,
}

impl Prompt {
    /// The message that asks the question.
    pub fn question(self, world: &WorldState) -> u16 {
        match self {
            Self::Instructions => 65,
            Self::KillDragon => 49,
            Self::ReadOyster => 192,
            Self::Quit => 22,
            Self::Reincarnate => 81 + 2 * u16::from(world.numdie),
        }
    }
}

/// Anything not starting with `n` counts as yes.
pub fn is_yes(answer: &str) -> bool {
    !answer.trim_start().to_lowercase().starts_with('n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers() {
        assert!(is_yes("yes"));
        assert!(is_yes("y"));
        assert!(is_yes(""));
        assert!(is_yes("maybe"));
        assert!(!is_yes("no"));
        assert!(!is_yes("  Nope"));
    }

    #[test]
    fn reincarnation_question_escalates() {
        let mut world = WorldState::new();
        assert_eq!(Prompt::Reincarnate.question(&world), 81);
        world.numdie = 2;
        assert_eq!(Prompt::Reincarnate.question(&world), 85);
        assert_eq!(Prompt::Instructions.question(&world), 65);
    }
}
