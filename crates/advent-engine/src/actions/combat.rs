//! Attacking and throwing.

use advent_core::{
    AxeState, BearState, BirdState, DragonState, Fixed, LocationId, ObjectId, ObjectState, Place,
    percent_chance,
};

use super::carry::{self, chase_troll};
use super::{ActionContext, Flow, creature, gather, intransitive};
use crate::ending::Ending;
use crate::error::EngineResult;
use crate::prompt::Prompt;
use crate::verb::Verb;

/// Attack `obj`, or nothing in particular.
pub(super) fn kill(ctx: &mut ActionContext<'_>, obj: Option<ObjectId>) -> EngineResult<Flow> {
    let Some(obj) = obj else {
        return ctx.reply(44);
    };
    let world = &mut *ctx.world;
    match obj {
        ObjectId::BIRD => {
            if world.closed {
                return ctx.reply(137);
            }
            world.destroy(ObjectId::BIRD);
            world.set_state(BirdState::Free);
            if world.place(ObjectId::SNAKE) == Place::At(LocationId::MOUNTAIN_KING) {
                world.tally2 += 1;
            }
            ctx.reply(45)
        }
        ObjectId::CLAM | ObjectId::OYSTER => ctx.reply(150),
        ObjectId::SNAKE => ctx.reply(46),
        ObjectId::DWARF => {
            if world.closed {
                return Ok(Flow::End(Ending::Dwarf));
            }
            ctx.reply(49)
        }
        ObjectId::TROLL => ctx.reply(157),
        ObjectId::BEAR => {
            let bear = world.state::<BearState>().property();
            ctx.reply(165 + ((bear + 1) / 2) as u16)
        }
        ObjectId::DRAGON => {
            if world.state::<DragonState>() != DragonState::Alive {
                return ctx.reply(167);
            }
            Ok(Flow::Ask(Prompt::KillDragon))
        }
        _ => ctx.default_reply(Verb::Kill),
    }
}

/// Finish off the dragon after the player insists on bare hands.
///
/// The corpse and the rug end up in the lair, along with anything lying on
/// either side of it, and the player is moved there.
pub(crate) fn slay_dragon(ctx: &mut ActionContext<'_>) -> Flow {
    let world = &mut *ctx.world;
    ctx.out.object(ObjectId::DRAGON, 1);
    world.set_state(DragonState::Dead);
    world.set_property(ObjectId::RUG, 0);
    world.move_fixed(ObjectId::DRAGON, Fixed::Immovable);
    world.move_fixed(ObjectId::RUG, Fixed::Loose);
    world.drop(ObjectId::DRAGON, LocationId::DRAGON_LAIR);
    world.drop(ObjectId::RUG, LocationId::DRAGON_LAIR);
    gather(world, LocationId::SECRET_CANYON_EAST, LocationId::DRAGON_LAIR);
    gather(world, LocationId::SECRET_CANYON_NORTH, LocationId::DRAGON_LAIR);
    world.newloc = LocationId::DRAGON_LAIR;
    tracing::debug!("dragon slain");
    Flow::Redescribe
}

pub(super) fn throw(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    let mut obj = obj;
    if world.toting(ObjectId::ROD2) && obj == ObjectId::ROD && !world.toting(ObjectId::ROD) {
        obj = ObjectId::ROD2;
    }
    if !world.toting(obj) {
        return ctx.default_reply(Verb::Throw);
    }

    if world.at(ObjectId::TROLL) && obj.is_treasure() {
        world.destroy(obj);
        chase_troll(world);
        return ctx.reply(159);
    }
    if obj == ObjectId::FOOD && world.here(ObjectId::BEAR) {
        return creature::feed(ctx, ObjectId::BEAR);
    }
    if obj != ObjectId::AXE {
        return carry::drop(ctx, obj);
    }

    let loc = world.loc;
    let msg = if let Some(index) = world.dwarf_check() {
        if percent_chance(ctx.rng, 33) {
            if let Some(dwarf) = world.dwarf_mut(index) {
                dwarf.remove();
            }
            world.dkill += 1;
            tracing::debug!(dwarf = index, kills = world.dkill, "dwarf killed");
            if world.dkill == 1 { 149 } else { 47 }
        } else {
            48
        }
    } else if world.at(ObjectId::DRAGON) && world.state::<DragonState>() == DragonState::Alive {
        152
    } else if world.at(ObjectId::TROLL) {
        158
    } else if world.here(ObjectId::BEAR) && world.state::<BearState>() == BearState::Hungry {
        world.drop(ObjectId::AXE, loc);
        world.move_fixed(ObjectId::AXE, Fixed::Immovable);
        world.set_state(AxeState::ByBear);
        return ctx.reply(164);
    } else {
        return intransitive::act(ctx, Verb::Kill);
    };

    ctx.out.message(msg);
    world.drop(ObjectId::AXE, loc);
    Ok(Flow::Redescribe)
}

#[cfg(test)]
mod tests {
    use advent_core::{TrollState, WorldState};

    use super::*;
    use crate::actions::testing::Bench;

    #[test]
    fn killing_the_bird() {
        let mut bench = Bench::at(13);
        bench.world.carry(ObjectId::CAGE);
        bench.run("kill", "bird", |ctx| kill(ctx, Some(ObjectId::BIRD)));
        assert_eq!(bench.messages(), [45]);
        assert_eq!(bench.world.place(ObjectId::BIRD), Place::Nowhere);
        assert_eq!(bench.world.tally2, 1);
    }

    #[test]
    fn assorted_victims() {
        let mut bench = Bench::at(3);
        bench.run("kill", "", |ctx| kill(ctx, None));
        bench.run("kill", "clam", |ctx| kill(ctx, Some(ObjectId::CLAM)));
        bench.run("kill", "snake", |ctx| kill(ctx, Some(ObjectId::SNAKE)));
        bench.run("kill", "dwarf", |ctx| kill(ctx, Some(ObjectId::DWARF)));
        bench.run("kill", "troll", |ctx| kill(ctx, Some(ObjectId::TROLL)));
        bench.run("kill", "bear", |ctx| kill(ctx, Some(ObjectId::BEAR)));
        bench.run("kill", "lamp", |ctx| kill(ctx, Some(ObjectId::LAMP)));
        assert_eq!(bench.messages(), [44, 150, 46, 49, 157, 165, 110]);

        bench.world.set_state(BearState::Dead);
        bench.run("kill", "bear", |ctx| kill(ctx, Some(ObjectId::BEAR)));
        assert_eq!(bench.messages(), [167]);
    }

    #[test]
    fn attacking_a_dwarf_in_the_repository_ends_the_game() {
        let mut bench = Bench::at(115);
        bench.world.closed = true;
        let flow = bench.run("kill", "dwarf", |ctx| kill(ctx, Some(ObjectId::DWARF)));
        assert_eq!(flow, Flow::End(Ending::Dwarf));
    }

    #[test]
    fn dragon_needs_confirmation() {
        let mut bench = Bench::at(120);
        let flow = bench.run("kill", "dragon", |ctx| kill(ctx, Some(ObjectId::DRAGON)));
        assert_eq!(flow, Flow::Ask(Prompt::KillDragon));
        assert_eq!(bench.world.state::<DragonState>(), DragonState::Alive);
    }

    #[test]
    fn slaying_the_dragon_moves_the_hoard() {
        let mut bench = Bench::at(119);
        bench.world.drop(ObjectId::KEYS, LocationId::SECRET_CANYON_NORTH);
        bench.run("yes", "", |ctx| Ok(slay_dragon(ctx)));

        let world: &WorldState = &bench.world;
        assert_eq!(world.state::<DragonState>(), DragonState::Dead);
        assert_eq!(world.place(ObjectId::RUG), Place::At(LocationId::DRAGON_LAIR));
        assert!(world.fixed(ObjectId::RUG).is_loose());
        assert_eq!(world.place(ObjectId::KEYS), Place::At(LocationId::DRAGON_LAIR));
        assert_eq!(world.newloc, LocationId::DRAGON_LAIR);
        assert_eq!(world.property(ObjectId::RUG), 0);
        assert_eq!(
            bench.lines(),
            [
                "Congratulations! You have just vanquished a dragon with your bare hands! \
                 (Unbelievable, isn't it?)"
            ]
        );
    }

    #[test]
    fn treasure_pays_the_troll() {
        let mut bench = Bench::at(117);
        bench.world.carry(ObjectId::COINS);
        bench.run("throw", "coins", |ctx| throw(ctx, ObjectId::COINS));
        assert_eq!(bench.messages(), [159]);
        assert_eq!(bench.world.place(ObjectId::COINS), Place::Nowhere);
        assert_eq!(bench.world.place(ObjectId::TROLL), Place::Nowhere);
        assert_eq!(bench.world.state::<TrollState>(), TrollState::Guarding);
        assert_eq!(bench.world.fixed(ObjectId::TROLL2), Fixed::At(LocationId::CHASM_NE));
    }

    #[test]
    fn throwing_food_feeds_the_bear() {
        let mut bench = Bench::at(130);
        bench.world.carry(ObjectId::FOOD);
        bench.run("throw", "food", |ctx| throw(ctx, ObjectId::FOOD));
        assert_eq!(bench.messages(), [168]);
        assert_eq!(bench.world.state::<BearState>(), BearState::Fed);
    }

    #[test]
    fn throwing_other_things_drops_them() {
        let mut bench = Bench::at(3);
        bench.run("throw", "keys", |ctx| throw(ctx, ObjectId::KEYS));
        bench.world.carry(ObjectId::KEYS);
        bench.run("throw", "keys", |ctx| throw(ctx, ObjectId::KEYS));
        assert_eq!(bench.messages(), [29, 54]);
        assert_eq!(bench.world.place(ObjectId::KEYS), Place::At(LocationId::BUILDING));
    }

    #[test]
    fn axe_at_the_bear_lands_out_of_reach() {
        let mut bench = Bench::at(130);
        bench.world.carry(ObjectId::AXE);
        bench.run("throw", "axe", |ctx| throw(ctx, ObjectId::AXE));
        assert_eq!(bench.messages(), [164]);
        assert_eq!(bench.world.state::<AxeState>(), AxeState::ByBear);
        assert_eq!(bench.world.fixed(ObjectId::AXE), Fixed::Immovable);
        assert_eq!(bench.world.place(ObjectId::AXE), Place::At(LocationId::BARREN_ROOM));
    }

    #[test]
    fn axe_at_the_dragon_and_troll() {
        let mut bench = Bench::at(119);
        bench.world.carry(ObjectId::AXE);
        assert_eq!(
            bench.run("throw", "axe", |ctx| throw(ctx, ObjectId::AXE)),
            Flow::Redescribe
        );
        assert_eq!(bench.messages(), [152]);
        assert_eq!(bench.world.place(ObjectId::AXE), Place::At(LocationId::SECRET_CANYON_EAST));

        let mut bench = Bench::at(117);
        bench.world.carry(ObjectId::AXE);
        bench.run("throw", "axe", |ctx| throw(ctx, ObjectId::AXE));
        assert_eq!(bench.messages(), [158]);
    }

    #[test]
    fn axe_at_a_dwarf_eventually_kills_it() {
        let mut bench = Bench::at(19);
        bench.world.dflag = 2;
        let mut messages = Vec::new();
        for _ in 0..40 {
            if bench.world.dwarf_check().is_none() {
                break;
            }
            bench.world.carry(ObjectId::AXE);
            bench.run("throw", "axe", |ctx| throw(ctx, ObjectId::AXE));
            messages.extend(bench.messages());
        }
        assert_eq!(bench.world.dwarf_check(), None);
        assert_eq!(bench.world.dkill, 1);
        assert_eq!(messages.last(), Some(&149));
        assert!(messages[..messages.len() - 1].iter().all(|&m| m == 48));
    }
}
