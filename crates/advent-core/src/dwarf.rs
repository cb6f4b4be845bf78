//! Dwarf and pirate records.

use serde::{Deserialize, Serialize};

use crate::location::LocationId;

/// Number of dwarf slots, including the unused slot 0.
pub const DWARFMAX: usize = 7;

/// Slot index of the pirate.
pub const PIRATE: usize = 6;

/// Starting locations of the dwarves; slot 6 is the pirate's chest hideaway.
pub const DWARF_START: [u8; DWARFMAX] = [0, 19, 27, 33, 44, 64, 114];

/// One wandering dwarf (or the pirate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dwarf {
    /// Where the dwarf is now. `NOWHERE` once killed or removed.
    pub location: LocationId,
    /// Where the dwarf was last turn.
    pub previous: LocationId,
    /// Whether the dwarf has noticed the player and is following.
    pub seen: bool,
}

/// Lifecycle of a dwarf as seen by the encounter logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwarfStatus {
    /// The dwarves have not woken up yet.
    Dormant,
    /// Wandering at a location.
    Active(LocationId),
    /// Following the player from a location.
    Seen(LocationId),
    /// Killed, or removed by the first encounter.
    Removed,
}

impl Dwarf {
    /// A dwarf waiting at `location`.
    pub fn at(location: LocationId) -> Self {
        Self {
            location,
            previous: LocationId::NOWHERE,
            seen: false,
        }
    }

    /// Current status given whether the dwarves have been activated.
    pub fn status(&self, awake: bool) -> DwarfStatus {
        if self.location.is_nowhere() {
            DwarfStatus::Removed
        } else if !awake {
            DwarfStatus::Dormant
        } else if self.seen {
            DwarfStatus::Seen(self.location)
        } else {
            DwarfStatus::Active(self.location)
        }
    }

    /// Take the dwarf out of play.
    pub fn remove(&mut self) {
        self.location = LocationId::NOWHERE;
        self.seen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_transitions() {
        let mut dwarf = Dwarf::at(LocationId::MOUNTAIN_KING);
        assert_eq!(dwarf.status(false), DwarfStatus::Dormant);
        assert_eq!(
            dwarf.status(true),
            DwarfStatus::Active(LocationId::MOUNTAIN_KING)
        );
        dwarf.seen = true;
        assert_eq!(
            dwarf.status(true),
            DwarfStatus::Seen(LocationId::MOUNTAIN_KING)
        );
        dwarf.remove();
        assert_eq!(dwarf.status(true), DwarfStatus::Removed);
        assert!(!dwarf.seen);
    }
}
