//! Dwarves and the pirate: waking, wandering, stalking and attacking.
//!
//! Runs once per turn, after the command and before the player arrives at
//! the pending location. Dwarves move along the same travel table as the
//! player, but never through edges reserved for the player and never into
//! forced or pirate-free locations.

use advent_core::{
    ConditionBits, DWARFMAX, Destination, KnifeHint, LampState, LocationId, ObjectId, PIRATE,
    Place, TravelCondition, TravelTable, WorldState, percent_chance,
};
use rand::Rng;
use rand::rngs::StdRng;

use crate::actions::Flow;
use crate::narrator::Transcript;

/// Most candidate destinations a dwarf considers in one move.
const MAX_CANDIDATES: usize = 19;

fn quiet_zone(world: &WorldState, table: &TravelTable, loc: LocationId) -> bool {
    table.is_forced(loc) || world.condition(loc).contains(ConditionBits::NOPIRAT)
}

/// Stop the player from walking back past a dwarf that is following them.
///
/// Returns true if the move was blocked.
pub fn blocks_player(world: &mut WorldState, table: &TravelTable, out: &mut Transcript) -> bool {
    if world.newloc == world.loc || quiet_zone(world, table, world.loc) {
        return false;
    }
    let newloc = world.newloc;
    let blocked = (1..PIRATE).any(|i| {
        let dwarf = world.dwarf(i);
        dwarf.previous == newloc && dwarf.seen
    });
    if blocked {
        world.newloc = world.loc;
        out.message(2);
    }
    blocked
}

/// Advance every dwarf by one turn.
///
/// Returns [`Flow::Die`] when a knife finds its mark.
pub fn tick(
    world: &mut WorldState,
    table: &TravelTable,
    rng: &mut StdRng,
    out: &mut Transcript,
) -> Flow {
    let newloc = world.newloc;
    if newloc.is_nowhere() || quiet_zone(world, table, newloc) {
        return Flow::Continue;
    }

    match world.dflag {
        0 => {
            if newloc.is_deep() {
                world.dflag = 1;
            }
            return Flow::Continue;
        }
        1 => {
            if newloc.is_deep() && !percent_chance(rng, 95) {
                first_encounter(world, rng, out);
            }
            return Flow::Continue;
        }
        _ => {}
    }

    let mut present = 0u32;
    let mut attack = 0u32;
    let mut stick = 0u32;
    for i in 1..DWARFMAX {
        let dwarf = world.dwarf(i);
        if dwarf.location.is_nowhere() {
            continue;
        }
        let next = wander_target(world, table, rng, i);
        let seen = (dwarf.seen && newloc.is_deep())
            || next == newloc
            || dwarf.location == newloc;
        if let Some(d) = world.dwarf_mut(i) {
            d.previous = dwarf.location;
            d.location = next;
            d.seen = seen;
            if seen {
                d.location = newloc;
            }
        }
        if !seen {
            continue;
        }
        if i == PIRATE {
            pirate(world, rng, out);
            continue;
        }
        present += 1;
        if dwarf.location == newloc {
            attack += 1;
            if world.knife != KnifeHint::Explained {
                world.knife = KnifeHint::At(newloc);
            }
            let odds = 95 * u32::from(world.dflag.saturating_sub(2));
            if rng.random_range(0..1000) < odds {
                stick += 1;
            }
        }
    }

    if present == 0 {
        return Flow::Continue;
    }
    if present == 1 {
        out.message(4);
    } else {
        out.text(format!(
            "There are {present} threatening little dwarves in the room with you."
        ));
    }
    if attack == 0 {
        return Flow::Continue;
    }
    if world.dflag == 2 {
        world.dflag = 3;
    }
    let base = if attack == 1 {
        out.message(5);
        52
    } else {
        out.text(format!("{attack} of them throw knives at you!"));
        6
    };
    match stick {
        0 => {
            out.message(base);
            return Flow::Continue;
        }
        1 => out.message(base + 1),
        _ => out.text(format!("{stick} of them get you!")),
    }
    tracing::info!(attack, stick, loc = %world.loc, "killed by dwarves");
    world.oldloc2 = world.loc;
    Flow::Die
}

/// The dwarves wake: a couple may be lost, none starts on the player, and
/// the first one throws an axe.
fn first_encounter(world: &mut WorldState, rng: &mut StdRng, out: &mut Transcript) {
    world.dflag = 2;
    for _ in 0..2 {
        let i = rng.random_range(1..PIRATE);
        if percent_chance(rng, 50) {
            if let Some(dwarf) = world.dwarf_mut(i) {
                dwarf.remove();
            }
        }
    }
    let (newloc, daltloc) = (world.newloc, world.daltloc);
    for i in 1..PIRATE {
        if let Some(dwarf) = world.dwarf_mut(i) {
            if dwarf.location == newloc {
                dwarf.location = daltloc;
            }
            dwarf.previous = dwarf.location;
        }
    }
    out.message(3);
    world.drop(ObjectId::AXE, newloc);
    tracing::info!(loc = %newloc, "dwarves awake");
}

/// Pick where dwarf `i` moves next.
///
/// Candidates are deep locations one edge away, other than where the dwarf
/// is or just was. With none, the dwarf retraces its step.
fn wander_target(
    world: &WorldState,
    table: &TravelTable,
    rng: &mut StdRng,
    i: usize,
) -> LocationId {
    let dwarf = world.dwarf(i);
    let mut candidates: Vec<LocationId> = Vec::with_capacity(MAX_CANDIDATES);
    for edge in table.edges(dwarf.location) {
        let Destination::Location(dest) = edge.destination else {
            continue;
        };
        if edge.condition == TravelCondition::NotDwarf
            || !dest.is_deep()
            || dest == dwarf.location
            || dest == dwarf.previous
            || candidates.last() == Some(&dest)
            || quiet_zone(world, table, dest)
        {
            continue;
        }
        candidates.push(dest);
        if candidates.len() == MAX_CANDIDATES {
            break;
        }
    }
    if candidates.is_empty() {
        return if dwarf.previous.is_nowhere() {
            dwarf.location
        } else {
            dwarf.previous
        };
    }
    candidates[rng.random_range(0..candidates.len())]
}

/// The pirate's turn once he has caught up with the player.
fn pirate(world: &mut WorldState, rng: &mut StdRng, out: &mut Transcript) {
    let newloc = world.newloc;
    if newloc == world.chloc || !world.is_unseen(ObjectId::CHEST) {
        return;
    }

    let pyramid_guarded = world.place(ObjectId::PYRAMID) == Place::At(newloc)
        || world.place(ObjectId::EMERALD) == Place::At(newloc);
    let in_reach = |obj: &ObjectId| *obj != ObjectId::PYRAMID || !pyramid_guarded;

    let mut visible = 0;
    for obj in ObjectId::treasures().filter(in_reach) {
        if world.toting(obj) {
            steal(world, out, pyramid_guarded);
            return;
        }
        if world.here(obj) {
            visible += 1;
        }
    }

    if world.tally == world.tally2 + 1
        && visible == 0
        && world.place(ObjectId::CHEST) == Place::Nowhere
        && world.here(ObjectId::LAMP)
        && world.state::<LampState>() == LampState::On
    {
        out.message(186);
        hide_chest(world);
        send_home(world);
        tracing::debug!("pirate revealed his chest");
        return;
    }

    let pirate = world.dwarf(PIRATE);
    if pirate.previous != pirate.location && percent_chance(rng, 20) {
        out.message(127);
    }
}

fn steal(world: &mut WorldState, out: &mut Transcript, pyramid_guarded: bool) {
    out.message(128);
    if world.place(ObjectId::MESSAGE) == Place::Nowhere {
        world.drop(ObjectId::CHEST, world.chloc);
    }
    world.drop(ObjectId::MESSAGE, world.chloc2);
    let (loc, chloc) = (world.loc, world.chloc);
    for obj in ObjectId::treasures() {
        if obj == ObjectId::PYRAMID && pyramid_guarded {
            continue;
        }
        let loose_here = world.place(obj) == Place::At(loc) && world.fixed(obj).is_loose();
        if loose_here || world.toting(obj) {
            world.drop(obj, chloc);
        }
    }
    send_home(world);
    tracing::info!(loc = %loc, "pirate stole the treasure");
}

fn hide_chest(world: &mut WorldState) {
    world.drop(ObjectId::CHEST, world.chloc);
    world.drop(ObjectId::MESSAGE, world.chloc2);
}

fn send_home(world: &mut WorldState) {
    let chloc = world.chloc;
    if let Some(pirate) = world.dwarf_mut(PIRATE) {
        pirate.location = chloc;
        pirate.previous = chloc;
        pirate.seen = false;
    }
}
