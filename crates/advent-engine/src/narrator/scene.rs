//! Describing where the player is and what they carry.

use advent_core::{Fixed, LocationId, ObjectId, WorldState, percent_chance};
use rand::rngs::StdRng;

use super::transcript::Transcript;

/// Describe the player's location.
///
/// Long text on a first visit, short text after. Darkness hides everything.
pub fn describe(world: &WorldState, rng: &mut StdRng, out: &mut Transcript) {
    if world.toting(ObjectId::BEAR) {
        out.message(141);
    }
    if world.is_dark() {
        out.message(16);
    } else {
        out.location(world.loc, world.visited(world.loc) == 0);
    }
    if world.loc == LocationId::Y2 && percent_chance(rng, 25) && !world.closing {
        out.message(8);
    }
}

/// List the objects at the player's location.
///
/// Unseen objects become seen here, which is what counts down the treasure
/// tally.
pub fn describe_items(world: &mut WorldState, out: &mut Transcript) {
    for obj in ObjectId::all() {
        if !world.at(obj) {
            continue;
        }
        if obj == ObjectId::STEPS && world.toting(ObjectId::NUGGET) {
            continue;
        }
        if world.is_unseen(obj) {
            if world.closed {
                continue;
            }
            let first = if obj == ObjectId::RUG || obj == ObjectId::CHAIN {
                1
            } else {
                0
            };
            world.set_property(obj, first);
            world.tally = world.tally.saturating_sub(1);
        }
        let state = if obj == ObjectId::STEPS && world.fixed(obj) == Fixed::At(world.loc) {
            1
        } else {
            world.property(obj)
        };
        out.object(obj, state);
    }

    if world.tally == world.tally2 && world.tally != 0 && world.limit > 35 {
        world.limit = 35;
    }
}

/// List what the player is carrying.
pub fn inventory(world: &WorldState, out: &mut Transcript) {
    let mut carrying = false;
    for obj in ObjectId::all() {
        if obj == ObjectId::BEAR || !world.toting(obj) {
            continue;
        }
        if !carrying {
            out.message(99);
            carrying = true;
        }
        out.object(obj, -1);
    }
    if world.toting(ObjectId::BEAR) {
        out.message(141);
    } else if !carrying {
        out.message(98);
    }
}
