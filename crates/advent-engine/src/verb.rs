//! Action verbs and their default replies.

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// Invariant raised when a verb has no default reply.
pub const BAD_VERB: u16 = 39;

/// Default reply for each verb code, indexed by code. Zero means silence.
const DEFAULT_MESSAGES: [u16; 32] = [
    0, 24, 29, 0, 33, 0, 33, 38, 38, 42, 14, 43, 110, 29, 110, 73, 75, 29, 13, 59, 59, 174, 109,
    67, 13, 147, 155, 195, 146, 110, 13, 13,
];

/// An action verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verb {
    /// take, carry, get
    Take,
    /// drop, release, discard
    Drop,
    /// say, chant, utter
    Say,
    /// open, unlock
    Open,
    /// nothing
    Nothing,
    /// lock, close
    Lock,
    /// on, light
    On,
    /// off, extinguish
    Off,
    /// wave, shake, swing
    Wave,
    /// calm, placate, tame
    Calm,
    /// walk, go, run
    Walk,
    /// kill, attack, fight
    Kill,
    /// pour
    Pour,
    /// eat, devour
    Eat,
    /// drink
    Drink,
    /// rub
    Rub,
    /// throw, toss
    Throw,
    /// quit
    Quit,
    /// find, where
    Find,
    /// inventory
    Inventory,
    /// feed
    Feed,
    /// fill
    Fill,
    /// blast, detonate
    Blast,
    /// score
    Score,
    /// fee, fie, foe, foo, fum
    Foo,
    /// brief
    Brief,
    /// read, peruse
    Read,
    /// break, shatter, smash
    Break,
    /// wake, disturb
    Wake,
    /// suspend, save, pause
    Suspend,
    /// hours
    Hours,
    /// Transcript logging. Has no vocabulary word.
    Log,
    /// Restore from a save. Has no vocabulary word.
    Load,
}

impl Verb {
    const ALL: [Self; 33] = [
        Self::Take,
        Self::Drop,
        Self::Say,
        Self::Open,
        Self::Nothing,
        Self::Lock,
        Self::On,
        Self::Off,
        Self::Wave,
        Self::Calm,
        Self::Walk,
        Self::Kill,
        Self::Pour,
        Self::Eat,
        Self::Drink,
        Self::Rub,
        Self::Throw,
        Self::Quit,
        Self::Find,
        Self::Inventory,
        Self::Feed,
        Self::Fill,
        Self::Blast,
        Self::Score,
        Self::Foo,
        Self::Brief,
        Self::Read,
        Self::Break,
        Self::Wake,
        Self::Suspend,
        Self::Hours,
        Self::Log,
        Self::Load,
    ];

    /// Look up a verb by its classic code, `1..=33`.
    pub fn from_code(code: u16) -> Option<Self> {
        let index = usize::from(code).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// The classic verb code.
    pub fn code(self) -> u16 {
        self as u16 + 1
    }

    /// The verb's default reply, or `None` when it says nothing.
    ///
    /// Fails for verbs outside the reply table.
    pub fn default_message(self) -> EngineResult<Option<u16>> {
        let code = usize::from(self.code());
        if !(1..DEFAULT_MESSAGES.len()).contains(&code) {
            tracing::warn!(verb = ?self, "verb has no default reply");
            return Err(EngineError::Invariant(BAD_VERB));
        }
        let msg = DEFAULT_MESSAGES[code];
        Ok((msg != 0).then_some(msg))
    }
}
