//! Per-turn timers: the incantation decay, the closing clocks and the lamp.

use advent_core::{
    ChainState, DWARFMAX, Fixed, GrateState, LampState, LocationId, ObjectId, Place, WorldState,
};

use crate::actions::{Flow, chase_troll};
use crate::ending::Ending;
use crate::narrator::Transcript;

/// Turns of lamp power left when the low-battery warning is given.
const LAMP_WARNING: i32 = 30;

/// Power added by fresh batteries.
const BATTERY_CHARGE: i32 = 2500;

/// Turns allowed after a first attempt to leave the closing cave.
const PANIC_GRACE: i32 = 15;

/// Objects set out in the repository when the cave closes, with their
/// starting state. The NE end holds the player's side.
const REPOSITORY: [(ObjectId, LocationId, i8); 12] = [
    (ObjectId::BOTTLE, LocationId::REPOSITORY_NE, 1),
    (ObjectId::PLANT, LocationId::REPOSITORY_NE, 0),
    (ObjectId::OYSTER, LocationId::REPOSITORY_NE, 0),
    (ObjectId::LAMP, LocationId::REPOSITORY_NE, 0),
    (ObjectId::ROD, LocationId::REPOSITORY_NE, 0),
    (ObjectId::DWARF, LocationId::REPOSITORY_NE, 0),
    (ObjectId::MIRROR, LocationId::REPOSITORY_NE, 0),
    (ObjectId::SNAKE, LocationId::REPOSITORY_SW, 1),
    (ObjectId::BIRD, LocationId::REPOSITORY_SW, 1),
    (ObjectId::CAGE, LocationId::REPOSITORY_SW, 0),
    (ObjectId::ROD2, LocationId::REPOSITORY_SW, 0),
    (ObjectId::PILLOW, LocationId::REPOSITORY_SW, 0),
];

/// Refuse to let the player out of the cave once it is closing.
///
/// The first attempt shortens the time left before the cave closes.
pub fn guard_exit(world: &mut WorldState, out: &mut Transcript) {
    if !world.closing || world.newloc.is_nowhere() || !world.newloc.is_surface() {
        return;
    }
    out.message(130);
    world.newloc = world.loc;
    if !world.panic {
        world.clock2 = PANIC_GRACE;
    }
    world.panic = true;
}

/// Run the timers once, after the player has arrived.
///
/// Returns [`Flow::Redescribe`] when the cave has just closed and
/// [`Flow::End`] when the lamp has died above ground.
pub fn tick(world: &mut WorldState, out: &mut Transcript) -> Flow {
    world.foobar = if world.foobar > 0 { -world.foobar } else { 0 };

    if world.tally == 0 && world.loc.is_deep() && world.loc != LocationId::Y2 {
        world.clock1 -= 1;
    }
    if world.clock1 == 0 {
        start_closing(world);
        out.message(129);
        return Flow::Continue;
    }
    if world.clock1 < 0 {
        world.clock2 -= 1;
    }
    if world.clock2 == 0 {
        close(world);
        out.message(132);
        return Flow::Redescribe;
    }
    lamp(world, out)
}

fn start_closing(world: &mut WorldState) {
    world.set_state(GrateState::Locked);
    world.set_property(ObjectId::FISSURE, 0);
    for i in 1..DWARFMAX {
        if let Some(dwarf) = world.dwarf_mut(i) {
            dwarf.seen = false;
        }
    }
    chase_troll(world);
    if world.property(ObjectId::BEAR) != 3 {
        world.destroy(ObjectId::BEAR);
    }
    world.set_state(ChainState::Unlocked);
    world.move_fixed(ObjectId::CHAIN, Fixed::Loose);
    world.set_property(ObjectId::AXE, 0);
    world.move_fixed(ObjectId::AXE, Fixed::Loose);
    world.clock1 = -1;
    world.closing = true;
    tracing::info!(turns = world.turns, "cave closing");
}

fn close(world: &mut WorldState) {
    for (obj, loc, value) in REPOSITORY {
        world.put_unseen(obj, loc, value);
    }
    world.move_object(ObjectId::GRATE, Place::At(LocationId::REPOSITORY_SW));
    world.move_fixed(ObjectId::MIRROR, Fixed::At(LocationId::REPOSITORY_SW));
    world.loc = LocationId::REPOSITORY_NE;
    world.oldloc = LocationId::REPOSITORY_NE;
    world.newloc = LocationId::REPOSITORY_NE;
    for obj in ObjectId::all() {
        if world.toting(obj) {
            world.destroy(obj);
        }
    }
    world.closed = true;
    tracing::info!(turns = world.turns, "cave closed");
}

fn lamp(world: &mut WorldState, out: &mut Transcript) -> Flow {
    if world.state::<LampState>() == LampState::On {
        world.limit -= 1;
    }

    if world.limit <= LAMP_WARNING
        && world.here(ObjectId::BATTERIES)
        && world.property(ObjectId::BATTERIES) == 0
        && world.here(ObjectId::LAMP)
    {
        out.message(188);
        world.set_property(ObjectId::BATTERIES, 1);
        if world.toting(ObjectId::BATTERIES) {
            let loc = world.loc;
            world.drop(ObjectId::BATTERIES, loc);
        }
        world.limit += BATTERY_CHARGE;
        world.lamp_warned = false;
        return Flow::Continue;
    }

    if world.limit == 0 {
        world.limit = -1;
        world.set_state(LampState::Off);
        if world.here(ObjectId::LAMP) {
            out.message(184);
        }
        return Flow::Continue;
    }

    if world.limit < 0 && world.loc.is_surface() {
        out.message(185);
        world.gave_up = true;
        tracing::info!("lamp died outside the cave");
        return Flow::End(Ending::Normal);
    }

    if world.limit <= LAMP_WARNING && !world.lamp_warned && world.here(ObjectId::LAMP) {
        world.lamp_warned = true;
        let msg = if world.place(ObjectId::BATTERIES) == Place::Nowhere {
            183
        } else if world.property(ObjectId::BATTERIES) == 1 {
            189
        } else {
            187
        };
        out.message(msg);
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use advent_core::{BearState, BottleContents, FissureState, TrollState};

    use super::*;
    use crate::narrator::Reply;

    fn at(raw: i32) -> WorldState {
        let mut world = WorldState::new();
        world.loc = LocationId::new(raw).unwrap();
        world.newloc = world.loc;
        world
    }

    fn messages(out: &Transcript) -> Vec<u16> {
        out.replies()
            .iter()
            .filter_map(|r| match r {
                Reply::Message(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn incantation_decays() {
        let mut world = at(3);
        let mut out = Transcript::new();
        world.foobar = 2;
        tick(&mut world, &mut out);
        assert_eq!(world.foobar, -2);
        tick(&mut world, &mut out);
        assert_eq!(world.foobar, 0);
    }

    #[test]
    fn closing_starts_once_every_treasure_is_seen() {
        let mut world = at(19);
        let mut out = Transcript::new();
        world.tally = 0;
        world.clock1 = 2;
        world.set_state(GrateState::Open);
        world.set_state(FissureState::Bridged);
        world.set_state(TrollState::Returned);

        tick(&mut world, &mut out);
        assert!(!world.closing);
        tick(&mut world, &mut out);

        assert!(world.closing);
        assert_eq!(world.clock1, -1);
        assert_eq!(messages(&out), [129]);
        assert_eq!(world.state::<GrateState>(), GrateState::Locked);
        assert_eq!(world.state::<FissureState>(), FissureState::Unbridged);
        assert_eq!(world.place(ObjectId::TROLL), Place::Nowhere);
        assert_eq!(world.place(ObjectId::TROLL2), Place::At(LocationId::CHASM_SW));
        assert_eq!(world.place(ObjectId::BEAR), Place::Nowhere);
        assert!(world.fixed(ObjectId::CHAIN).is_loose());
    }

    #[test]
    fn a_dead_bear_stays_put() {
        let mut world = at(19);
        world.set_state(BearState::Dead);
        start_closing(&mut world);
        assert_eq!(world.place(ObjectId::BEAR), Place::At(LocationId::BARREN_ROOM));
    }

    #[test]
    fn clock_pauses_at_y2_and_above_ground() {
        let mut world = at(33);
        let mut out = Transcript::new();
        world.tally = 0;
        tick(&mut world, &mut out);
        assert_eq!(world.clock1, 30);

        let mut world = at(3);
        world.tally = 0;
        tick(&mut world, &mut out);
        assert_eq!(world.clock1, 30);
    }

    #[test]
    fn closed_cave_sets_up_the_repository() {
        let mut world = at(19);
        let mut out = Transcript::new();
        world.closing = true;
        world.clock1 = -1;
        world.clock2 = 1;
        world.carry(ObjectId::KEYS);
        world.carry(ObjectId::LAMP);

        assert_eq!(tick(&mut world, &mut out), Flow::Redescribe);

        assert!(world.closed);
        assert_eq!(messages(&out), [132]);
        assert_eq!(world.loc, LocationId::REPOSITORY_NE);
        assert_eq!(world.newloc, LocationId::REPOSITORY_NE);
        assert_eq!(world.place(ObjectId::KEYS), Place::Nowhere);
        assert_eq!(world.place(ObjectId::LAMP), Place::At(LocationId::REPOSITORY_NE));
        assert!(world.is_unseen(ObjectId::LAMP));
        assert_eq!(world.place(ObjectId::ROD2), Place::At(LocationId::REPOSITORY_SW));
        assert_eq!(world.fixed(ObjectId::MIRROR), Fixed::At(LocationId::REPOSITORY_SW));
        assert_eq!(world.state::<BottleContents>(), BottleContents::Empty);
        assert_eq!(world.holding(), 0);
    }

    #[test]
    fn leaving_while_closing_is_refused() {
        let mut world = at(9);
        let mut out = Transcript::new();
        world.newloc = LocationId::OUTSIDE_GRATE;
        guard_exit(&mut world, &mut out);
        assert_eq!(world.newloc, LocationId::OUTSIDE_GRATE);

        world.closing = true;
        world.clock2 = 40;
        guard_exit(&mut world, &mut out);
        assert_eq!(world.newloc, LocationId::BELOW_GRATE);
        assert_eq!(world.clock2, 15);
        assert!(world.panic);

        world.clock2 = 9;
        world.newloc = LocationId::OUTSIDE_GRATE;
        guard_exit(&mut world, &mut out);
        assert_eq!(world.clock2, 9);
        assert_eq!(messages(&out), [130, 130]);
    }

    #[test]
    fn lamp_runs_down() {
        let mut world = at(3);
        let mut out = Transcript::new();
        world.carry(ObjectId::LAMP);
        world.set_state(LampState::On);
        world.limit = 31;
        world.destroy(ObjectId::BATTERIES);

        tick(&mut world, &mut out);
        assert_eq!(world.limit, 30);
        assert!(world.lamp_warned);
        tick(&mut world, &mut out);
        assert_eq!(messages(&out), [183]);

        world.limit = 1;
        tick(&mut world, &mut out);
        assert_eq!(world.limit, -1);
        assert_eq!(world.state::<LampState>(), LampState::Off);
        assert_eq!(messages(&out), [183, 184]);
    }

    #[test]
    fn dead_lamp_above_ground_ends_the_game() {
        let mut world = at(3);
        let mut out = Transcript::new();
        world.limit = -1;
        assert_eq!(tick(&mut world, &mut out), Flow::End(Ending::Normal));
        assert!(world.gave_up);
        assert_eq!(messages(&out), [185]);
    }

    #[test]
    fn fresh_batteries_are_swapped_in() {
        let mut world = at(3);
        let mut out = Transcript::new();
        world.carry(ObjectId::LAMP);
        world.set_state(LampState::On);
        world.set_property(ObjectId::BATTERIES, 0);
        world.carry(ObjectId::BATTERIES);
        world.limit = 20;

        tick(&mut world, &mut out);

        assert_eq!(messages(&out), [188]);
        assert_eq!(world.limit, 19 + 2500);
        assert_eq!(world.property(ObjectId::BATTERIES), 1);
        assert_eq!(world.place(ObjectId::BATTERIES), Place::At(LocationId::BUILDING));
    }
}
