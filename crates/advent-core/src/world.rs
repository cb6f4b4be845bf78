use rand::Rng;

use crate::dwarf::{DWARF_START, DWARFMAX, Dwarf, PIRATE};
use crate::error::CoreResult;
use crate::layout::{self, CONDITIONS, FIXED, PLACES};
use crate::location::{ConditionBits, Liquid, LocationId, MAXLOC};
use crate::object::{
    BottleContents, Fixed, LampState, MAXOBJ, ObjectId, ObjectState, Place, seen_value,
    unseen_value,
};

/// What the player knows about the dwarves' knives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KnifeHint {
    /// No knife has been thrown where the player is.
    #[default]
    None,
    /// A knife was just thrown at this location.
    At(LocationId),
    /// The player has been told the knives vanish.
    Explained,
}

impl KnifeHint {
    /// Classic save encoding: `0` none, `-1` explained, otherwise the location.
    pub fn to_raw(self) -> i16 {
        match self {
            Self::None => 0,
            Self::At(loc) => i16::from(loc.raw()),
            Self::Explained => -1,
        }
    }

    /// Decode the classic save encoding.
    pub fn from_raw(raw: i16) -> CoreResult<Self> {
        match raw {
            -1 => Ok(Self::Explained),
            0 => Ok(Self::None),
            _ => LocationId::new(i32::from(raw)).map(Self::At),
        }
    }
}

/// The complete mutable state of one game.
///
/// Scalars are public; the per-object and per-location arrays are reached
/// through accessors so the holding count stays consistent with placements.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldState {
    /// Turns taken so far.
    pub turns: u32,
    /// Current location.
    pub loc: LocationId,
    /// Previous location.
    pub oldloc: LocationId,
    /// Location before the previous one.
    pub oldloc2: LocationId,
    /// Location the player is moving to this turn.
    pub newloc: LocationId,

    pub(crate) cond: Vec<ConditionBits>,
    pub(crate) place: Vec<Place>,
    pub(crate) fixed: Vec<Fixed>,
    pub(crate) visited: Vec<u16>,
    pub(crate) prop: Vec<i8>,
    pub(crate) holding: u32,

    /// Treasures not yet seen.
    pub tally: u16,
    /// Treasures lost for good (bird eaten, snake gone, and so on).
    pub tally2: u16,
    /// Lamp turns remaining. Negative once the lamp is dead.
    pub limit: i32,
    /// Whether the low-battery warning has been given.
    pub lamp_warned: bool,
    /// Whether the player was in the dark last turn.
    pub was_dark: bool,
    /// Whether the cave is closing.
    pub closing: bool,
    /// Whether the cave has closed and the repository is in play.
    pub closed: bool,
    /// How many times LOOK has been used.
    pub detail: u32,
    /// Knife hint state.
    pub knife: KnifeHint,
    /// Turns until the cave starts closing.
    pub clock1: i32,
    /// Turns until the cave closes.
    pub clock2: i32,
    /// Whether the player has already tried to leave while closing.
    pub panic: bool,

    pub(crate) dwarves: [Dwarf; DWARFMAX],
    /// Dwarf activation level: 0 dormant, 1 woken, 2 met, 3+ hostile.
    pub dflag: u8,
    /// Where dwarves are shifted during the first encounter.
    pub daltloc: LocationId,
    /// Dwarves killed by the player.
    pub dkill: u16,
    /// Where the pirate hides the chest.
    pub chloc: LocationId,
    /// Where the pirate stashes stolen treasure.
    pub chloc2: LocationId,
    /// Closed-cave ending code: 0, 133, 134 or 135.
    pub bonus: u16,
    /// Number of deaths so far.
    pub numdie: u8,
    /// Object inferred by an intransitive verb, pending a follow-up.
    pub object1: Option<ObjectId>,
    /// Whether the player quit or ran the lamp dry.
    pub gave_up: bool,
    /// Fee-fie-foe-foo progress, negative while decaying.
    pub foobar: i8,
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState {
    /// The world at the start of a new game.
    pub fn new() -> Self {
        let cond = layout::expand(CONDITIONS, MAXLOC)
            .into_iter()
            .map(|bits| ConditionBits::from_bits(bits as u8))
            .collect();
        let place = layout::expand(PLACES, MAXOBJ)
            .into_iter()
            .map(|raw| Place::from_raw(raw).unwrap_or_default())
            .collect();
        let fixed = layout::expand(FIXED, MAXOBJ)
            .into_iter()
            .map(|raw| Fixed::from_raw(raw).unwrap_or_default())
            .collect();
        let prop = (0..MAXOBJ)
            .map(|i| if i >= ObjectId::NUGGET.index() { -1 } else { 0 })
            .collect();

        let mut dwarves = [Dwarf::default(); DWARFMAX];
        for (dwarf, start) in dwarves.iter_mut().zip(DWARF_START) {
            dwarf.location = LocationId::new(i32::from(start)).unwrap_or_default();
        }

        Self {
            turns: 0,
            loc: LocationId::BUILDING,
            oldloc: LocationId::BUILDING,
            oldloc2: LocationId::BUILDING,
            newloc: LocationId::ROAD,
            cond,
            place,
            fixed,
            visited: vec![0; MAXLOC],
            prop,
            holding: 0,
            tally: layout::INITIAL_TALLY,
            tally2: 0,
            limit: layout::INITIAL_LIMIT,
            lamp_warned: false,
            was_dark: false,
            closing: false,
            closed: false,
            detail: 0,
            knife: KnifeHint::None,
            clock1: layout::INITIAL_CLOCK1,
            clock2: layout::INITIAL_CLOCK2,
            panic: false,
            dwarves,
            dflag: 0,
            daltloc: LocationId::NUGGET_ROOM,
            dkill: 0,
            chloc: LocationId::DEAD_END,
            chloc2: LocationId::MAZE_DEAD_END,
            bonus: 0,
            numdie: 0,
            object1: None,
            gave_up: false,
            foobar: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Condition bits of a location.
    pub fn condition(&self, loc: LocationId) -> ConditionBits {
        self.cond.get(loc.index()).copied().unwrap_or_default()
    }

    /// Where an object is.
    pub fn place(&self, obj: ObjectId) -> Place {
        self.place.get(obj.index()).copied().unwrap_or_default()
    }

    /// An object's fixed association.
    pub fn fixed(&self, obj: ObjectId) -> Fixed {
        self.fixed.get(obj.index()).copied().unwrap_or_default()
    }

    /// Raw property value, negative while unseen.
    pub fn property(&self, obj: ObjectId) -> i8 {
        self.prop.get(obj.index()).copied().unwrap_or_default()
    }

    /// Overwrite an object's raw property.
    pub fn set_property(&mut self, obj: ObjectId, value: i8) {
        if let Some(slot) = self.prop.get_mut(obj.index()) {
            *slot = value;
        }
    }

    /// True if the object has not been described yet.
    pub fn is_unseen(&self, obj: ObjectId) -> bool {
        self.property(obj) < 0
    }

    /// Typed state of an object, decoded from its seen property.
    pub fn state<T: ObjectState>(&self) -> T {
        T::from_property(seen_value(self.property(T::OBJECT)))
    }

    /// Store a typed state.
    pub fn set_state<T: ObjectState>(&mut self, state: T) {
        self.set_property(T::OBJECT, state.property());
    }

    /// How often a location has been described in full.
    pub fn visited(&self, loc: LocationId) -> u16 {
        self.visited.get(loc.index()).copied().unwrap_or_default()
    }

    /// Record a visit to a location.
    pub fn mark_visited(&mut self, loc: LocationId) {
        if let Some(slot) = self.visited.get_mut(loc.index()) {
            *slot = slot.saturating_add(1);
        }
    }

    /// Forget a location so the long description shows again.
    pub fn forget_visit(&mut self, loc: LocationId) {
        if let Some(slot) = self.visited.get_mut(loc.index()) {
            *slot = 0;
        }
    }

    /// Number of carried objects, liquids excluded.
    pub fn holding(&self) -> u32 {
        self.holding
    }

    /// One dwarf record. Index 0 is unused and 6 is the pirate.
    pub fn dwarf(&self, index: usize) -> Dwarf {
        self.dwarves.get(index).copied().unwrap_or_default()
    }

    /// Mutable dwarf record.
    pub fn dwarf_mut(&mut self, index: usize) -> Option<&mut Dwarf> {
        self.dwarves.get_mut(index)
    }

    /// Iterate the dwarves (pirate included) with their slot index.
    pub fn dwarves(&self) -> impl Iterator<Item = (usize, &Dwarf)> {
        self.dwarves.iter().enumerate().skip(1)
    }

    // -----------------------------------------------------------------------
    // Predicates
    // -----------------------------------------------------------------------

    /// True if the player is carrying the object.
    pub fn toting(&self, obj: ObjectId) -> bool {
        self.place(obj) == Place::Carried
    }

    /// True if the object lies here or is carried.
    pub fn here(&self, obj: ObjectId) -> bool {
        self.place(obj) == Place::At(self.loc) || self.toting(obj)
    }

    /// True if the object lies here or is scenery fixed here.
    pub fn at(&self, obj: ObjectId) -> bool {
        self.place(obj) == Place::At(self.loc) || self.fixed(obj) == Fixed::At(self.loc)
    }

    /// True if the player cannot see.
    pub fn is_dark(&self) -> bool {
        !self.condition(self.loc).contains(ConditionBits::LIGHT)
            && (self.state::<LampState>() == LampState::Off || !self.here(ObjectId::LAMP))
    }

    /// The liquid in the bottle, if any.
    pub fn liquid_carried(&self) -> Option<ObjectId> {
        self.state::<BottleContents>().liquid()
    }

    /// The liquid available at a location, if any.
    pub fn liquid_at(&self, loc: LocationId) -> Option<ObjectId> {
        self.condition(loc).liquid().map(Liquid::object)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Pick an object up. Carrying something already carried changes nothing.
    pub fn carry(&mut self, obj: ObjectId) {
        let Some(slot) = self.place.get_mut(obj.index()) else {
            return;
        };
        if *slot == Place::Carried {
            return;
        }
        *slot = Place::Carried;
        if !obj.is_liquid() {
            self.holding += 1;
        }
    }

    /// Put an object at a location, releasing it if carried.
    pub fn drop(&mut self, obj: ObjectId, loc: LocationId) {
        let Some(slot) = self.place.get_mut(obj.index()) else {
            return;
        };
        if *slot == Place::Carried && !obj.is_liquid() {
            self.holding = self.holding.saturating_sub(1);
        }
        *slot = Place::at(loc);
    }

    /// Relocate an object unconditionally.
    pub fn move_object(&mut self, obj: ObjectId, place: Place) {
        match place {
            Place::Carried => self.carry(obj),
            Place::At(loc) => self.drop(obj, loc),
            Place::Nowhere => self.drop(obj, LocationId::NOWHERE),
        }
    }

    /// Change an object's fixed association.
    pub fn move_fixed(&mut self, obj: ObjectId, fixed: Fixed) {
        if let Some(slot) = self.fixed.get_mut(obj.index()) {
            *slot = fixed;
        }
    }

    /// Remove an object from play.
    pub fn destroy(&mut self, obj: ObjectId) {
        self.move_object(obj, Place::Nowhere);
    }

    /// Place an object with a fresh unseen property, as when the repository is set up.
    pub fn put_unseen(&mut self, obj: ObjectId, loc: LocationId, value: i8) {
        self.move_object(obj, Place::at(loc));
        self.set_property(obj, unseen_value(value));
    }

    /// First non-pirate dwarf standing at the player's location.
    pub fn dwarf_check(&self) -> Option<usize> {
        (1..PIRATE).find(|&i| self.dwarves[i].location == self.loc)
    }

    /// Send the first loose object lying at `loc` back to the road.
    pub fn juggle(&mut self, loc: LocationId) -> Option<ObjectId> {
        let resident = ObjectId::all().find(|&obj| {
            self.place(obj) == Place::At(loc) && self.fixed(obj).is_loose()
        })?;
        self.drop(resident, LocationId::ROAD);
        Some(resident)
    }
}

/// True with probability `p` percent.
pub fn percent_chance<R: Rng + ?Sized>(rng: &mut R, p: u32) -> bool {
    rng.random_range(0..100) < p
}
