use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::location::LocationId;

/// Number of object slots, including the unused slot 0.
pub const MAXOBJ: usize = 100;

/// Highest object id that can be a treasure.
pub const MAXTRS: u8 = 79;

/// How many objects the player can hold at once.
pub const CARRY_LIMIT: u32 = 7;

/// Identifier of a game object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(u8);

impl ObjectId {
    /// Set of keys.
    pub const KEYS: Self = Self(1);
    /// Brass lantern.
    pub const LAMP: Self = Self(2);
    /// Steel grate.
    pub const GRATE: Self = Self(3);
    /// Wicker cage.
    pub const CAGE: Self = Self(4);
    /// Black rod with a rusty star.
    pub const ROD: Self = Self(5);
    /// Black rod with a rusty mark (the dynamite).
    pub const ROD2: Self = Self(6);
    /// Stone steps in the pit.
    pub const STEPS: Self = Self(7);
    /// Little bird.
    pub const BIRD: Self = Self(8);
    /// Rusty door.
    pub const DOOR: Self = Self(9);
    /// Velvet pillow.
    pub const PILLOW: Self = Self(10);
    /// Green snake.
    pub const SNAKE: Self = Self(11);
    /// Fissure in the Hall of Mists.
    pub const FISSURE: Self = Self(12);
    /// Stone tablet.
    pub const TABLET: Self = Self(13);
    /// Giant clam.
    pub const CLAM: Self = Self(14);
    /// Giant oyster.
    pub const OYSTER: Self = Self(15);
    /// "Spelunker Today" magazine.
    pub const MAGAZINE: Self = Self(16);
    /// A dwarf, as a noun.
    pub const DWARF: Self = Self(17);
    /// Dwarf's knife.
    pub const KNIFE: Self = Self(18);
    /// Tasty food.
    pub const FOOD: Self = Self(19);
    /// Small bottle.
    pub const BOTTLE: Self = Self(20);
    /// Water in the bottle.
    pub const WATER: Self = Self(21);
    /// Oil in the bottle.
    pub const OIL: Self = Self(22);
    /// Repository mirror.
    pub const MIRROR: Self = Self(23);
    /// Beanstalk in the west pit.
    pub const PLANT: Self = Self(24);
    /// Top of the beanstalk, seen from the east pit.
    pub const PLANT2: Self = Self(25);
    /// Dwarf's axe.
    pub const AXE: Self = Self(28);
    /// Green dragon.
    pub const DRAGON: Self = Self(31);
    /// Chasm with its rickety bridge.
    pub const CHASM: Self = Self(32);
    /// Troll guarding the bridge.
    pub const TROLL: Self = Self(33);
    /// Absent troll, the scenery left when the troll is gone.
    pub const TROLL2: Self = Self(34);
    /// Cave bear.
    pub const BEAR: Self = Self(35);
    /// Pirate's message in the second maze.
    pub const MESSAGE: Self = Self(36);
    /// Vending machine.
    pub const VEND: Self = Self(38);
    /// Fresh batteries.
    pub const BATTERIES: Self = Self(39);
    /// Gold nugget, the first treasure.
    pub const NUGGET: Self = Self(50);
    /// Rare coins.
    pub const COINS: Self = Self(54);
    /// Pirate's treasure chest.
    pub const CHEST: Self = Self(55);
    /// Golden eggs.
    pub const EGGS: Self = Self(56);
    /// Jeweled trident.
    pub const TRIDENT: Self = Self(57);
    /// Ming vase.
    pub const VASE: Self = Self(58);
    /// Egg-sized emerald.
    pub const EMERALD: Self = Self(59);
    /// Platinum pyramid.
    pub const PYRAMID: Self = Self(60);
    /// Glistening pearl.
    pub const PEARL: Self = Self(61);
    /// Persian rug.
    pub const RUG: Self = Self(62);
    /// Rare spices.
    pub const SPICES: Self = Self(63);
    /// Golden chain.
    pub const CHAIN: Self = Self(64);

    /// Build an object id, rejecting values outside `1..MAXOBJ`.
    pub fn new(raw: i32) -> CoreResult<Self> {
        if (1..MAXOBJ as i32).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(CoreError::UnknownObject(raw))
        }
    }

    /// The raw numeric id.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Array index for this object.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the ids that count as treasures.
    pub const fn is_treasure(self) -> bool {
        self.0 >= Self::NUGGET.0 && self.0 <= MAXTRS
    }

    /// True for water and oil, which live inside the bottle.
    pub const fn is_liquid(self) -> bool {
        self.0 == Self::WATER.0 || self.0 == Self::OIL.0
    }

    /// Iterate every object id in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (1..MAXOBJ as u8).map(Self)
    }

    /// Iterate the treasure ids in ascending order.
    pub fn treasures() -> impl Iterator<Item = Self> {
        (Self::NUGGET.0..=MAXTRS).map(Self)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an object is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Place {
    /// Destroyed or not yet in play.
    #[default]
    Nowhere,
    /// Held by the player.
    Carried,
    /// Lying at a location.
    At(LocationId),
}

impl Place {
    /// Place at `loc`, collapsing location 0 into [`Place::Nowhere`].
    pub fn at(loc: LocationId) -> Self {
        if loc.is_nowhere() { Self::Nowhere } else { Self::At(loc) }
    }

    /// The location, if the object lies somewhere.
    pub fn location(self) -> Option<LocationId> {
        match self {
            Self::At(loc) => Some(loc),
            _ => None,
        }
    }

    /// Classic save encoding: `-1` carried, `0` nowhere, otherwise the location.
    pub fn to_raw(self) -> i16 {
        match self {
            Self::Nowhere => 0,
            Self::Carried => -1,
            Self::At(loc) => i16::from(loc.raw()),
        }
    }

    /// Decode the classic save encoding.
    pub fn from_raw(raw: i16) -> CoreResult<Self> {
        match raw {
            -1 => Ok(Self::Carried),
            _ => LocationId::new(i32::from(raw)).map(Self::at),
        }
    }
}

/// Second, immovable association of an object with a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fixed {
    /// Free to be picked up.
    #[default]
    Loose,
    /// Fixed where it lies.
    Immovable,
    /// Scenery that also shows at a second location.
    At(LocationId),
}

impl Fixed {
    /// Fixed association with `loc`, collapsing location 0 into [`Fixed::Loose`].
    pub fn at(loc: LocationId) -> Self {
        if loc.is_nowhere() { Self::Loose } else { Self::At(loc) }
    }

    /// True if the object can be carried.
    pub fn is_loose(self) -> bool {
        self == Self::Loose
    }

    /// Classic save encoding: `0` loose, `-1` immovable, otherwise the location.
    pub fn to_raw(self) -> i16 {
        match self {
            Self::Loose => 0,
            Self::Immovable => -1,
            Self::At(loc) => i16::from(loc.raw()),
        }
    }

    /// Decode the classic save encoding.
    pub fn from_raw(raw: i16) -> CoreResult<Self> {
        match raw {
            -1 => Ok(Self::Immovable),
            _ => LocationId::new(i32::from(raw)).map(Self::at),
        }
    }
}

/// Raw property value of an object that has not been described yet.
///
/// A negative raw value `p` stands for the seen value `-1 - p`.
pub const fn seen_value(raw: i8) -> i8 {
    if raw < 0 { -1 - raw } else { raw }
}

/// The raw value that hides `value` until the object is next described.
pub const fn unseen_value(value: i8) -> i8 {
    -1 - value
}

/// Typed view of one object's property.
pub trait ObjectState: Copy {
    /// Object the state belongs to.
    const OBJECT: ObjectId;

    /// Decode from the seen property value.
    fn from_property(value: i8) -> Self;

    /// Encode to a property value.
    fn property(self) -> i8;
}

/// Brass lantern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampState {
    /// Lamp is dark.
    Off,
    /// Lamp is lit.
    On,
}

impl ObjectState for LampState {
    const OBJECT: ObjectId = ObjectId::LAMP;

    fn from_property(value: i8) -> Self {
        if value == 1 { Self::On } else { Self::Off }
    }

    fn property(self) -> i8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }
}

/// What the bottle holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottleContents {
    /// Full of water.
    Water,
    /// Empty.
    Empty,
    /// Full of oil.
    Oil,
}

impl BottleContents {
    /// The liquid object inside, if any.
    pub fn liquid(self) -> Option<ObjectId> {
        match self {
            Self::Water => Some(ObjectId::WATER),
            Self::Empty => None,
            Self::Oil => Some(ObjectId::OIL),
        }
    }
}

impl ObjectState for BottleContents {
    const OBJECT: ObjectId = ObjectId::BOTTLE;

    fn from_property(value: i8) -> Self {
        match value {
            0 => Self::Water,
            2 => Self::Oil,
            _ => Self::Empty,
        }
    }

    fn property(self) -> i8 {
        match self {
            Self::Water => 0,
            Self::Empty => 1,
            Self::Oil => 2,
        }
    }
}

/// Little bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdState {
    /// Free and singing.
    Free,
    /// Sitting in the cage.
    Caged,
}

impl ObjectState for BirdState {
    const OBJECT: ObjectId = ObjectId::BIRD;

    fn from_property(value: i8) -> Self {
        if value == 0 { Self::Free } else { Self::Caged }
    }

    fn property(self) -> i8 {
        match self {
            Self::Free => 0,
            Self::Caged => 1,
        }
    }
}

/// Steel grate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrateState {
    /// Locked.
    Locked,
    /// Unlocked and open.
    Open,
}

impl ObjectState for GrateState {
    const OBJECT: ObjectId = ObjectId::GRATE;

    fn from_property(value: i8) -> Self {
        if value == 0 { Self::Locked } else { Self::Open }
    }

    fn property(self) -> i8 {
        match self {
            Self::Locked => 0,
            Self::Open => 1,
        }
    }
}

/// Rusty door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    /// Hinges rusted shut.
    Rusted,
    /// Hinges oiled, the door opens.
    Oiled,
}

impl ObjectState for DoorState {
    const OBJECT: ObjectId = ObjectId::DOOR;

    fn from_property(value: i8) -> Self {
        if value == 1 { Self::Oiled } else { Self::Rusted }
    }

    fn property(self) -> i8 {
        match self {
            Self::Rusted => 0,
            Self::Oiled => 1,
        }
    }
}

/// Golden chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    /// Unlocked, a plain treasure.
    Unlocked,
    /// Holding the bear to the wall.
    OnBear,
    /// Locked to the wall without the bear.
    LockedToWall,
}

impl ObjectState for ChainState {
    const OBJECT: ObjectId = ObjectId::CHAIN;

    fn from_property(value: i8) -> Self {
        match value {
            0 => Self::Unlocked,
            1 => Self::OnBear,
            _ => Self::LockedToWall,
        }
    }

    fn property(self) -> i8 {
        match self {
            Self::Unlocked => 0,
            Self::OnBear => 1,
            Self::LockedToWall => 2,
        }
    }
}

/// Cave bear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearState {
    /// Ferocious and hungry.
    Hungry,
    /// Fed and calm, still chained.
    Fed,
    /// Unchained and following the player.
    Following,
    /// Dead at the bottom of the chasm.
    Dead,
}

impl ObjectState for BearState {
    const OBJECT: ObjectId = ObjectId::BEAR;

    fn from_property(value: i8) -> Self {
        match value {
            0 => Self::Hungry,
            1 => Self::Fed,
            2 => Self::Following,
            _ => Self::Dead,
        }
    }

    fn property(self) -> i8 {
        match self {
            Self::Hungry => 0,
            Self::Fed => 1,
            Self::Following => 2,
            Self::Dead => 3,
        }
    }
}

/// Beanstalk growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantState {
    /// Tiny plant murmuring for water.
    Tiny,
    /// Twelve-foot beanstalk.
    Tall,
    /// Gigantic beanstalk reaching the hole.
    Huge,
}

impl PlantState {
    /// Stage after one more watering. Overwatering a huge plant kills it back.
    pub fn watered(self) -> Self {
        match self {
            Self::Tiny => Self::Tall,
            Self::Tall => Self::Huge,
            Self::Huge => Self::Tiny,
        }
    }

    /// Matching property of the phony plant seen from the east pit.
    pub fn phony_property(self) -> i8 {
        self.property() / 2
    }
}

impl ObjectState for PlantState {
    const OBJECT: ObjectId = ObjectId::PLANT;

    fn from_property(value: i8) -> Self {
        match value {
            0 | 1 => Self::Tiny,
            2 | 3 => Self::Tall,
            _ => Self::Huge,
        }
    }

    fn property(self) -> i8 {
        match self {
            Self::Tiny => 0,
            Self::Tall => 2,
            Self::Huge => 4,
        }
    }
}

/// Fissure in the Hall of Mists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FissureState {
    /// No way across.
    Unbridged,
    /// Crystal bridge spans it.
    Bridged,
}

impl ObjectState for FissureState {
    const OBJECT: ObjectId = ObjectId::FISSURE;

    fn from_property(value: i8) -> Self {
        if value == 0 { Self::Unbridged } else { Self::Bridged }
    }

    fn property(self) -> i8 {
        match self {
            Self::Unbridged => 0,
            Self::Bridged => 1,
        }
    }
}

/// Green dragon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragonState {
    /// Alive on its rug.
    Alive,
    /// Slain.
    Dead,
}

impl ObjectState for DragonState {
    const OBJECT: ObjectId = ObjectId::DRAGON;

    fn from_property(value: i8) -> Self {
        if value == 0 { Self::Alive } else { Self::Dead }
    }

    fn property(self) -> i8 {
        match self {
            Self::Alive => 0,
            Self::Dead => 2,
        }
    }
}

/// Troll at the chasm bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrollState {
    /// Demanding a treasure.
    Guarding,
    /// Back under the bridge after being paid.
    Returned,
    /// Chased off for good.
    Gone,
}

impl ObjectState for TrollState {
    const OBJECT: ObjectId = ObjectId::TROLL;

    fn from_property(value: i8) -> Self {
        match value {
            0 => Self::Guarding,
            1 => Self::Returned,
            _ => Self::Gone,
        }
    }

    fn property(self) -> i8 {
        match self {
            Self::Guarding => 0,
            Self::Returned => 1,
            Self::Gone => 2,
        }
    }
}

/// Ming vase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaseState {
    /// In one piece.
    Intact,
    /// Worthless shards.
    Broken,
}

impl ObjectState for VaseState {
    const OBJECT: ObjectId = ObjectId::VASE;

    fn from_property(value: i8) -> Self {
        if value <= 1 { Self::Intact } else { Self::Broken }
    }

    fn property(self) -> i8 {
        match self {
            Self::Intact => 0,
            Self::Broken => 2,
        }
    }
}

/// Dwarf's axe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxeState {
    /// Lying free.
    Free,
    /// Stuck beside the bear, out of reach.
    ByBear,
}

impl ObjectState for AxeState {
    const OBJECT: ObjectId = ObjectId::AXE;

    fn from_property(value: i8) -> Self {
        if value == 0 { Self::Free } else { Self::ByBear }
    }

    fn property(self) -> i8 {
        match self {
            Self::Free => 0,
            Self::ByBear => 1,
        }
    }
}
