use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::object::ObjectId;

/// Number of location slots, including the unused slot 0.
pub const MAXLOC: usize = 141;

/// Identifier of a cave location. `0` is "nowhere".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct LocationId(u8);

impl LocationId {
    /// No location: destroyed objects live here, and a player sent here dies.
    pub const NOWHERE: Self = Self(0);
    /// End of the road, where the game begins.
    pub const ROAD: Self = Self(1);
    /// Inside the well house.
    pub const BUILDING: Self = Self(3);
    /// Valley beside the stream.
    pub const VALLEY: Self = Self(4);
    /// Slit in the streambed.
    pub const SLIT: Self = Self(7);
    /// Depression outside the grate.
    pub const OUTSIDE_GRATE: Self = Self(8);
    /// Chamber below the grate.
    pub const BELOW_GRATE: Self = Self(9);
    /// First location deep enough for dwarves.
    pub const HALL_OF_MISTS: Self = Self(15);
    /// Alternate spot for a dwarf displaced by the first encounter.
    pub const NUGGET_ROOM: Self = Self(18);
    /// Hall of the Mountain King, the snake's lair.
    pub const MOUNTAIN_KING: Self = Self(19);
    /// The "Y2" room, where a hollow voice sometimes says "Plugh".
    pub const Y2: Self = Self(33);
    /// Giant room, home of the golden eggs.
    pub const GIANT_ROOM: Self = Self(92);
    /// Soft room, where the vase survives any fall.
    pub const SOFT_ROOM: Self = Self(96);
    /// Cul-de-sac where the pearl rolls.
    pub const CUL_DE_SAC: Self = Self(105);
    /// Witt's End.
    pub const WITTS_END: Self = Self(108);
    /// Chest hideaway in the pirate's maze.
    pub const DEAD_END: Self = Self(114);
    /// Northeast end of the repository.
    pub const REPOSITORY_NE: Self = Self(115);
    /// Southwest end of the repository.
    pub const REPOSITORY_SW: Self = Self(116);
    /// Southwest side of the chasm.
    pub const CHASM_SW: Self = Self(117);
    /// Secret canyon approaching the dragon from the east.
    pub const SECRET_CANYON_EAST: Self = Self(119);
    /// Where the dragon lies once slain.
    pub const DRAGON_LAIR: Self = Self(120);
    /// Secret canyon approaching the dragon from the north.
    pub const SECRET_CANYON_NORTH: Self = Self(121);
    /// Northeast side of the chasm.
    pub const CHASM_NE: Self = Self(122);
    /// Barren room where the bear is chained.
    pub const BARREN_ROOM: Self = Self(130);
    /// Dead end in the second maze, where the pirate's message is left.
    pub const MAZE_DEAD_END: Self = Self(140);

    /// Build a location id, rejecting values outside `0..MAXLOC`.
    pub fn new(raw: i32) -> CoreResult<Self> {
        if (0..MAXLOC as i32).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(CoreError::UnknownLocation(raw))
        }
    }

    /// The raw numeric id.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Array index for this location.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the "nowhere" location.
    pub const fn is_nowhere(self) -> bool {
        self.0 == 0
    }

    /// True above ground, outside the grate.
    pub const fn is_surface(self) -> bool {
        self.0 > 0 && self.0 <= 8
    }

    /// True where dwarves roam and the closing clock runs.
    pub const fn is_deep(self) -> bool {
        self.0 >= 15
    }

    /// Iterate every real location id.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..MAXLOC as u8).map(Self)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bitmask describing a location's permanent status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConditionBits(u8);

impl ConditionBits {
    /// Location is lit without a lamp.
    pub const LIGHT: Self = Self(1);
    /// With `LIQUID`, the liquid here is oil rather than water.
    pub const WATOIL: Self = Self(2);
    /// Location has a liquid source.
    pub const LIQUID: Self = Self(4);
    /// Pirate and dwarves never come here.
    pub const NOPIRAT: Self = Self(8);
    /// Hint trigger: trying to get into the cave.
    pub const HINT_CAVE: Self = Self(16);
    /// Hint trigger: trying to catch the bird.
    pub const HINT_BIRD: Self = Self(32);
    /// Hint trigger: dealing with the snake.
    pub const HINT_SNAKE: Self = Self(64);
    /// Hint trigger: lost in a maze.
    pub const HINT_MAZE: Self = Self(128);

    /// Wrap raw bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The liquid available from these bits, if any.
    pub fn liquid(self) -> Option<Liquid> {
        if !self.contains(Self::LIQUID) {
            None
        } else if self.contains(Self::WATOIL) {
            Some(Liquid::Oil)
        } else {
            Some(Liquid::Water)
        }
    }
}

/// One of the two liquids the bottle can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Liquid {
    /// Water.
    Water,
    /// Oil.
    Oil,
}

impl Liquid {
    /// The object standing for this liquid.
    pub const fn object(self) -> ObjectId {
        match self {
            Self::Water => ObjectId::WATER,
            Self::Oil => ObjectId::OIL,
        }
    }

    /// The liquid an object names, if it names one.
    pub fn from_object(object: ObjectId) -> Option<Self> {
        match object {
            ObjectId::WATER => Some(Self::Water),
            ObjectId::OIL => Some(Self::Oil),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_bounds() {
        assert!(LocationId::new(0).unwrap().is_nowhere());
        assert_eq!(LocationId::new(140).unwrap(), LocationId::MAZE_DEAD_END);
        assert!(LocationId::new(141).is_err());
        assert!(LocationId::new(-1).is_err());
    }

    #[test]
    fn liquid_selection_from_bits() {
        assert_eq!(ConditionBits::from_bits(5).liquid(), Some(Liquid::Water));
        assert_eq!(ConditionBits::from_bits(6).liquid(), Some(Liquid::Oil));
        assert_eq!(ConditionBits::from_bits(2).liquid(), None);
        assert_eq!(ConditionBits::from_bits(1).liquid(), None);
    }

    #[test]
    fn surface_and_depth() {
        assert!(LocationId::ROAD.is_surface());
        assert!(!LocationId::BELOW_GRATE.is_surface());
        assert!(LocationId::HALL_OF_MISTS.is_deep());
        assert!(!LocationId::new(14).unwrap().is_deep());
    }
}
