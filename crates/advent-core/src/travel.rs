//! Travel edges between locations.
//!
//! Edges are authored in the classic numeric form `cond * 1000 + dest` and
//! decoded once, when the table is built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::location::{LocationId, MAXLOC};
use crate::map::TRAVEL;
use crate::object::ObjectId;

/// A motion word's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Motion(u16);

impl Motion {
    /// Matches any motion; marks forced locations in the data.
    pub const ANY: Self = Self(1);
    /// "road", "hill".
    pub const ROAD: Self = Self(2);
    /// "enter".
    pub const ENTER: Self = Self(3);
    /// "forward", "continue".
    pub const FORWARD: Self = Self(7);
    /// "back", "return", "retreat".
    pub const BACK: Self = Self(8);
    /// "out", "outside", "exit", "leave".
    pub const OUT: Self = Self(11);
    /// "crawl".
    pub const CRAWL: Self = Self(17);
    /// "in", "inside", "inward".
    pub const IN: Self = Self(19);
    /// "null", "nowhere": does nothing.
    pub const NULL: Self = Self(21);
    /// "up", "u".
    pub const UP: Self = Self(29);
    /// "down", "d".
    pub const DOWN: Self = Self(30);
    /// "left".
    pub const LEFT: Self = Self(36);
    /// "right".
    pub const RIGHT: Self = Self(37);
    /// "east", "e".
    pub const EAST: Self = Self(43);
    /// "west", "w".
    pub const WEST: Self = Self(44);
    /// "north", "n".
    pub const NORTH: Self = Self(45);
    /// "south", "s".
    pub const SOUTH: Self = Self(46);
    /// "northwest", "nw".
    pub const NORTHWEST: Self = Self(50);
    /// "look", "examine", "describe".
    pub const LOOK: Self = Self(57);
    /// "xyzzy".
    pub const XYZZY: Self = Self(62);
    /// "depression".
    pub const DEPRESSION: Self = Self(63);
    /// "entrance".
    pub const ENTRANCE: Self = Self(64);
    /// "plugh".
    pub const PLUGH: Self = Self(65);
    /// "cave".
    pub const CAVE: Self = Self(67);
    /// "plover".
    pub const PLOVER: Self = Self(71);

    /// Wrap a raw motion code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// The raw motion code.
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Compass points plus up and down.
    pub fn is_compass(self) -> bool {
        (Self::EAST.0..=Self::NORTHWEST.0).contains(&self.0)
            || self == Self::UP
            || self == Self::DOWN
    }

    /// Magic words that move the player between known spots.
    pub fn is_magic(self) -> bool {
        self == Self::XYZZY || self == Self::PLUGH
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "motion {}", self.0)
    }
}

/// Which motions an edge answers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotionMatch {
    /// Any motion at all.
    Any,
    /// One of the listed motions.
    Words(Vec<Motion>),
}

impl MotionMatch {
    /// True if `motion` selects this edge.
    pub fn matches(&self, motion: Motion) -> bool {
        match self {
            Self::Any => true,
            Self::Words(words) => words.contains(&motion),
        }
    }
}

/// Gate on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelCondition {
    /// Always passable.
    Always,
    /// Passable with this percentage chance.
    Chance(u8),
    /// Passable by the player, never by dwarves.
    NotDwarf,
    /// Passable while carrying the object.
    Carrying(ObjectId),
    /// Passable while the object is carried or lies here.
    Present(ObjectId),
    /// Passable unless the object's property equals the value.
    PropertyNot {
        /// Object whose property is tested.
        object: ObjectId,
        /// Blocking property value.
        value: i8,
    },
}

/// Where an edge leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Another location. `NOWHERE` is death.
    Location(LocationId),
    /// No movement, just this message.
    Message(u16),
}

/// One decoded travel edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelEdge {
    /// Where the edge leads.
    pub destination: Destination,
    /// Motions that select it.
    pub motions: MotionMatch,
    /// What must hold to pass.
    pub condition: TravelCondition,
}

impl TravelEdge {
    /// Decode a classic `cond * 1000 + dest` rule.
    pub fn decode(from: LocationId, code: u32, motions: &[u16]) -> CoreResult<Self> {
        let bad = || CoreError::TravelData { from, code };
        let cond = code / 1000;
        let dest = code % 1000;

        let condition = match cond {
            0 => TravelCondition::Always,
            1..=99 => TravelCondition::Chance(cond as u8),
            100 => TravelCondition::NotDwarf,
            101..=199 => TravelCondition::Carrying(object_of(cond - 100).ok_or_else(bad)?),
            200..=299 => TravelCondition::Present(object_of(cond - 200).ok_or_else(bad)?),
            300..=799 => TravelCondition::PropertyNot {
                object: object_of(cond % 100).ok_or_else(bad)?,
                value: (cond / 100 - 3) as i8,
            },
            _ => return Err(bad()),
        };

        let destination = if dest > 500 {
            Destination::Message((dest - 500) as u16)
        } else if (dest as usize) < MAXLOC {
            Destination::Location(LocationId::new(dest as i32)?)
        } else {
            return Err(bad());
        };

        let motions = if motions.contains(&Motion::ANY.code()) {
            MotionMatch::Any
        } else if motions.is_empty() {
            return Err(bad());
        } else {
            MotionMatch::Words(motions.iter().copied().map(Motion::new).collect())
        };

        Ok(Self {
            destination,
            motions,
            condition,
        })
    }
}

fn object_of(raw: u32) -> Option<ObjectId> {
    ObjectId::new(raw as i32).ok()
}

/// Ordered edge lists for every location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelTable {
    edges: Vec<Vec<TravelEdge>>,
}

impl TravelTable {
    /// Build a table from `(from, code, motions)` rows, in order.
    pub fn from_rows(rows: &[(u8, u32, &[u16])]) -> CoreResult<Self> {
        let mut edges = vec![Vec::new(); MAXLOC];
        for &(from, code, motions) in rows {
            let loc = LocationId::new(i32::from(from))?;
            let edge = TravelEdge::decode(loc, code, motions)?;
            if let Some(list) = edges.get_mut(loc.index()) {
                list.push(edge);
            }
        }
        Ok(Self { edges })
    }

    /// The bundled cave map.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_rows(TRAVEL)
    }

    /// Edges leaving a location, in priority order.
    pub fn edges(&self, loc: LocationId) -> &[TravelEdge] {
        self.edges.get(loc.index()).map_or(&[], Vec::as_slice)
    }

    /// True if the player is moved on from here without choosing.
    pub fn is_forced(&self, loc: LocationId) -> bool {
        self.edges(loc)
            .first()
            .is_some_and(|edge| edge.motions == MotionMatch::Any)
    }

    /// Locations that have at least one edge.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        LocationId::all().filter(|&loc| !self.edges(loc).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(raw: i32) -> LocationId {
        LocationId::new(raw).unwrap()
    }

    #[test]
    fn decode_plain_and_message() {
        let edge = TravelEdge::decode(loc(1), 3, &[3, 12]).unwrap();
        assert_eq!(edge.destination, Destination::Location(loc(3)));
        assert_eq!(edge.condition, TravelCondition::Always);
        assert!(edge.motions.matches(Motion::new(12)));

        let edge = TravelEdge::decode(loc(8), 593, &[3]).unwrap();
        assert_eq!(edge.destination, Destination::Message(93));
    }

    #[test]
    fn decode_conditions() {
        let edge = TravelEdge::decode(loc(5), 50005, &[6]).unwrap();
        assert_eq!(edge.condition, TravelCondition::Chance(50));

        let edge = TravelEdge::decode(loc(14), 150020, &[30]).unwrap();
        assert_eq!(edge.condition, TravelCondition::Carrying(ObjectId::NUGGET));

        let edge = TravelEdge::decode(loc(8), 303009, &[3]).unwrap();
        assert_eq!(
            edge.condition,
            TravelCondition::PropertyNot {
                object: ObjectId::GRATE,
                value: 0
            }
        );

        let edge = TravelEdge::decode(loc(17), 412021, &[7]).unwrap();
        assert_eq!(
            edge.condition,
            TravelCondition::PropertyNot {
                object: ObjectId::FISSURE,
                value: 1
            }
        );

        let edge = TravelEdge::decode(loc(1), 100_002, &[2]).unwrap();
        assert_eq!(edge.condition, TravelCondition::NotDwarf);
    }

    #[test]
    fn decode_rejects_bad_rules() {
        assert!(TravelEdge::decode(loc(1), 350, &[2]).is_err());
        assert!(TravelEdge::decode(loc(1), 900_002, &[2]).is_err());
        assert!(TravelEdge::decode(loc(1), 2, &[]).is_err());
        assert!(TravelEdge::decode(loc(1), 200_002, &[2]).is_err());
    }

    #[test]
    fn forced_locations() {
        let table = TravelTable::builtin().unwrap();
        assert!(table.is_forced(loc(16)));
        assert!(table.is_forced(loc(20)));
        assert!(!table.is_forced(loc(1)));
        assert!(!table.is_forced(loc(99)));
    }

    #[test]
    fn compass_words() {
        assert!(Motion::NORTH.is_compass());
        assert!(Motion::DOWN.is_compass());
        assert!(!Motion::FORWARD.is_compass());
        assert!(Motion::PLUGH.is_magic());
    }
}
