//! World model for the Colossal Cave adventure.
//!
//! Holds everything the game remembers between turns: where the player and
//! every object are, object states, dwarves, timers and scores. Also owns the
//! bundled cave map and the save-file format.

/// Dwarf and pirate records.
pub mod dwarf;
/// Error types for the world model.
pub mod error;
/// Initial object and condition tables.
pub mod layout;
/// Location identifiers and condition bits.
pub mod location;
/// The bundled cave map.
pub mod map;
/// Object identifiers, placements and typed states.
pub mod object;
/// Save-file encoding.
pub mod snapshot;
/// Travel edges between locations.
pub mod travel;
/// The mutable world state and its primitive operations.
pub mod world;

pub use dwarf::{DWARFMAX, Dwarf, DwarfStatus, PIRATE};
pub use error::{CoreError, CoreResult};
pub use location::{ConditionBits, Liquid, LocationId, MAXLOC};
pub use object::{
    AxeState, BearState, BirdState, BottleContents, CARRY_LIMIT, ChainState, DoorState,
    DragonState, FissureState, Fixed, GrateState, LampState, MAXOBJ, ObjectId, ObjectState,
    Place, PlantState, TrollState, VaseState,
};
pub use travel::{Destination, Motion, MotionMatch, TravelCondition, TravelEdge, TravelTable};
pub use world::{KnifeHint, WorldState, percent_chance};
