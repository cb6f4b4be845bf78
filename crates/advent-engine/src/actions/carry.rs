//! Picking things up, putting them down, and looking for them.

use advent_core::{
    BearState, BirdState, BottleContents, CARRY_LIMIT, Fixed, LocationId, ObjectId, ObjectState,
    Place, TrollState, VaseState, WorldState,
};

use super::{ActionContext, Flow, liquid};
use crate::ending::Ending;
use crate::error::EngineResult;
use crate::verb::Verb;

pub(super) fn take(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    if world.toting(obj) {
        return ctx.default_reply(Verb::Take);
    }

    if !world.fixed(obj).is_loose() {
        let msg = if obj == ObjectId::PLANT && world.property(obj) <= 0 {
            115
        } else if obj == ObjectId::BEAR && world.state::<BearState>() == BearState::Fed {
            169
        } else if obj == ObjectId::CHAIN && world.state::<BearState>() != BearState::Hungry {
            170
        } else {
            25
        };
        return ctx.reply(msg);
    }

    let mut obj = obj;
    if obj.is_liquid() {
        if !world.here(ObjectId::BOTTLE) || world.liquid_carried() != Some(obj) {
            let bottle: BottleContents = world.state();
            if world.toting(ObjectId::BOTTLE) && bottle == BottleContents::Empty {
                return liquid::fill(ctx, ObjectId::BOTTLE);
            }
            let msg = if world.toting(ObjectId::BOTTLE) {
                105
            } else {
                104
            };
            return ctx.reply(msg);
        }
        obj = ObjectId::BOTTLE;
    }

    if world.holding() >= CARRY_LIMIT {
        return ctx.reply(92);
    }

    if obj == ObjectId::BIRD && world.state::<BirdState>() == BirdState::Free {
        if world.toting(ObjectId::ROD) {
            return ctx.reply(26);
        }
        if !world.toting(ObjectId::CAGE) {
            return ctx.reply(27);
        }
        world.set_state(BirdState::Caged);
    }
    if (obj == ObjectId::BIRD || obj == ObjectId::CAGE)
        && world.state::<BirdState>() == BirdState::Caged
    {
        let other = if obj == ObjectId::BIRD {
            ObjectId::CAGE
        } else {
            ObjectId::BIRD
        };
        world.carry(other);
    }

    world.carry(obj);
    if obj == ObjectId::BOTTLE {
        if let Some(liquid) = world.liquid_carried() {
            world.carry(liquid);
        }
    }
    ctx.reply(54)
}

pub(super) fn drop(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    let mut obj = obj;
    if obj == ObjectId::ROD && world.toting(ObjectId::ROD2) && !world.toting(ObjectId::ROD) {
        obj = ObjectId::ROD2;
    }
    if !world.toting(obj) {
        return ctx.default_reply(Verb::Drop);
    }

    let loc = world.loc;
    let mut spoken = false;
    if obj == ObjectId::BIRD && world.here(ObjectId::SNAKE) {
        ctx.out.message(30);
        if world.closed {
            return Ok(Flow::End(Ending::Dwarf));
        }
        world.destroy(ObjectId::SNAKE);
        world.set_property(ObjectId::SNAKE, -1);
        spoken = true;
    } else if obj == ObjectId::COINS && world.here(ObjectId::VEND) {
        world.destroy(ObjectId::COINS);
        world.drop(ObjectId::BATTERIES, loc);
        ctx.out.object(ObjectId::BATTERIES, 0);
        return Ok(Flow::Continue);
    } else if obj == ObjectId::BIRD && world.at(ObjectId::DRAGON) && world.property(ObjectId::DRAGON) == 0
    {
        ctx.out.message(154);
        world.destroy(ObjectId::BIRD);
        world.set_state(BirdState::Free);
        if world.place(ObjectId::SNAKE) != Place::Nowhere {
            world.tally2 += 1;
        }
        return Ok(Flow::Continue);
    } else if obj == ObjectId::BEAR && world.at(ObjectId::TROLL) {
        ctx.out.message(163);
        chase_troll(world);
        world.set_state(TrollState::Gone);
        spoken = true;
    } else if obj == ObjectId::VASE {
        if loc == LocationId::SOFT_ROOM {
            ctx.out.message(54);
        } else {
            let state = if world.at(ObjectId::PILLOW) {
                VaseState::Intact
            } else {
                VaseState::Broken
            };
            world.set_state(state);
            ctx.out.object(ObjectId::VASE, state_text(state));
            if state == VaseState::Broken {
                world.move_fixed(ObjectId::VASE, Fixed::Immovable);
            }
        }
        spoken = true;
    }

    let liquid = world.liquid_carried();
    if liquid == Some(obj) {
        obj = ObjectId::BOTTLE;
    }
    if obj == ObjectId::BOTTLE {
        if let Some(liquid) = liquid {
            world.destroy(liquid);
        }
    }
    if obj == ObjectId::CAGE && world.state::<BirdState>() == BirdState::Caged {
        world.drop(ObjectId::BIRD, loc);
    }
    if obj == ObjectId::BIRD {
        world.set_state(BirdState::Free);
    }
    world.drop(obj, loc);
    if !spoken {
        ctx.out.message(54);
    }
    Ok(Flow::Continue)
}

/// The vase's "just dropped" text is one past its resting state.
fn state_text(state: VaseState) -> i8 {
    state.property() + 1
}

/// The troll runs off and the bridge is left to its phony double.
pub(crate) fn chase_troll(world: &mut WorldState) {
    world.destroy(ObjectId::TROLL);
    world.move_fixed(ObjectId::TROLL, Fixed::Loose);
    world.drop(ObjectId::TROLL2, LocationId::CHASM_SW);
    world.move_fixed(ObjectId::TROLL2, Fixed::At(LocationId::CHASM_NE));
    world.juggle(LocationId::CHASM_NE);
}

pub(super) fn find(ctx: &mut ActionContext<'_>, obj: ObjectId, verb: Verb) -> EngineResult<Flow> {
    let world = &*ctx.world;
    if world.toting(obj) {
        return ctx.reply(24);
    }
    if world.closed {
        return ctx.reply(138);
    }
    let dwarf_here = world.dwarf_check().is_some() && world.dflag >= 2;
    let liquid_here = (world.liquid_carried() == Some(obj) && world.here(ObjectId::BOTTLE))
        || world.liquid_at(world.loc) == Some(obj);
    if (dwarf_here && obj == ObjectId::DWARF) || world.at(obj) || liquid_here {
        return ctx.reply(94);
    }
    ctx.default_reply(verb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::Bench;

    fn take_it(bench: &mut Bench, obj: ObjectId) -> Flow {
        bench.run("take", "it", |ctx| take(ctx, obj))
    }

    fn drop_it(bench: &mut Bench, obj: ObjectId) -> Flow {
        bench.run("drop", "it", |ctx| drop(ctx, obj))
    }

    #[test]
    fn take_and_drop_the_lamp() {
        let mut bench = Bench::at(3);
        take_it(&mut bench, ObjectId::LAMP);
        assert!(bench.world.toting(ObjectId::LAMP));
        take_it(&mut bench, ObjectId::LAMP);
        drop_it(&mut bench, ObjectId::LAMP);
        assert_eq!(bench.world.place(ObjectId::LAMP), Place::At(LocationId::BUILDING));
        assert_eq!(bench.messages(), [54, 24, 54]);
        assert_eq!(bench.world.holding(), 0);
    }

    #[test]
    fn scenery_cannot_be_taken() {
        let mut bench = Bench::at(19);
        take_it(&mut bench, ObjectId::SNAKE);
        assert_eq!(bench.messages(), [25]);
        assert!(!bench.world.toting(ObjectId::SNAKE));
    }

    #[test]
    fn liquid_without_a_bottle() {
        let mut bench = Bench::at(1);
        take_it(&mut bench, ObjectId::WATER);
        assert_eq!(bench.messages(), [104]);

        bench.world.carry(ObjectId::BOTTLE);
        take_it(&mut bench, ObjectId::OIL);
        assert_eq!(bench.messages(), [105]);
    }

    #[test]
    fn bottle_comes_with_its_water() {
        let mut bench = Bench::at(3);
        take_it(&mut bench, ObjectId::WATER);
        assert_eq!(bench.messages(), [54]);
        assert!(bench.world.toting(ObjectId::BOTTLE));
        assert!(bench.world.toting(ObjectId::WATER));
        assert_eq!(bench.world.holding(), 1);

        drop_it(&mut bench, ObjectId::WATER);
        assert_eq!(bench.world.place(ObjectId::BOTTLE), Place::At(LocationId::BUILDING));
        assert_eq!(bench.world.place(ObjectId::WATER), Place::Nowhere);
    }

    #[test]
    fn carry_limit() {
        let mut bench = Bench::at(3);
        for obj in [1, 4, 5, 10, 16, 28, 39].map(|raw| ObjectId::new(raw).unwrap()) {
            bench.world.carry(obj);
        }
        take_it(&mut bench, ObjectId::LAMP);
        assert_eq!(bench.messages(), [92]);
        assert!(!bench.world.toting(ObjectId::LAMP));
    }

    #[test]
    fn catching_the_bird() {
        let mut bench = Bench::at(13);
        take_it(&mut bench, ObjectId::BIRD);
        assert_eq!(bench.messages(), [27]);

        bench.world.carry(ObjectId::CAGE);
        bench.world.carry(ObjectId::ROD);
        take_it(&mut bench, ObjectId::BIRD);
        assert_eq!(bench.messages(), [26]);

        bench.world.drop(ObjectId::ROD, LocationId::BUILDING);
        take_it(&mut bench, ObjectId::BIRD);
        assert_eq!(bench.messages(), [54]);
        assert_eq!(bench.world.state::<BirdState>(), BirdState::Caged);

        drop_it(&mut bench, ObjectId::CAGE);
        assert_eq!(bench.world.place(ObjectId::BIRD), Place::At(bench.world.loc));
        take_it(&mut bench, ObjectId::CAGE);
        assert!(bench.world.toting(ObjectId::BIRD));
    }

    #[test]
    fn bird_drives_off_the_snake() {
        let mut bench = Bench::at(19);
        bench.world.carry(ObjectId::CAGE);
        bench.world.carry(ObjectId::BIRD);
        bench.world.set_state(BirdState::Caged);

        drop_it(&mut bench, ObjectId::BIRD);

        assert_eq!(bench.messages(), [30]);
        assert_eq!(bench.world.place(ObjectId::SNAKE), Place::Nowhere);
        assert_eq!(bench.world.property(ObjectId::SNAKE), -1);
        assert_eq!(bench.world.state::<BirdState>(), BirdState::Free);
        assert_eq!(bench.world.place(ObjectId::BIRD), Place::At(LocationId::MOUNTAIN_KING));
    }

    #[test]
    fn bird_against_snake_in_the_closed_cave_wakes_the_dwarves() {
        let mut bench = Bench::at(116);
        bench.world.closed = true;
        bench.world.drop(ObjectId::SNAKE, LocationId::REPOSITORY_SW);
        bench.world.carry(ObjectId::BIRD);
        assert_eq!(drop_it(&mut bench, ObjectId::BIRD), Flow::End(Ending::Dwarf));
    }

    #[test]
    fn coins_buy_batteries() {
        let mut bench = Bench::at(3);
        bench.world.drop(ObjectId::VEND, LocationId::BUILDING);
        bench.world.carry(ObjectId::COINS);
        drop_it(&mut bench, ObjectId::COINS);
        assert_eq!(bench.world.place(ObjectId::COINS), Place::Nowhere);
        assert_eq!(bench.world.place(ObjectId::BATTERIES), Place::At(LocationId::BUILDING));
        assert_eq!(bench.lines(), ["There are fresh batteries here."]);
    }

    #[test]
    fn vase_needs_a_pillow() {
        let mut bench = Bench::at(3);
        bench.world.carry(ObjectId::VASE);
        drop_it(&mut bench, ObjectId::VASE);
        assert_eq!(bench.world.state::<VaseState>(), VaseState::Broken);
        assert_eq!(bench.world.fixed(ObjectId::VASE), Fixed::Immovable);
        assert_eq!(bench.lines(), ["The ming vase drops with a delicate crash."]);

        let mut bench = Bench::at(3);
        bench.world.drop(ObjectId::PILLOW, LocationId::BUILDING);
        bench.world.carry(ObjectId::VASE);
        drop_it(&mut bench, ObjectId::VASE);
        assert_eq!(bench.world.state::<VaseState>(), VaseState::Intact);
        assert_eq!(
            bench.lines(),
            ["The vase is now resting, delicately, on a velvet pillow."]
        );
    }

    #[test]
    fn bear_scares_the_troll() {
        let mut bench = Bench::at(117);
        bench.world.carry(ObjectId::BEAR);
        drop_it(&mut bench, ObjectId::BEAR);
        assert_eq!(bench.messages(), [163]);
        assert_eq!(bench.world.place(ObjectId::TROLL), Place::Nowhere);
        assert_eq!(bench.world.place(ObjectId::TROLL2), Place::At(LocationId::CHASM_SW));
        assert_eq!(bench.world.state::<TrollState>(), TrollState::Gone);
    }

    #[test]
    fn find_things() {
        let mut bench = Bench::at(3);
        bench.world.carry(ObjectId::LAMP);
        bench.run("find", "lamp", |ctx| find(ctx, ObjectId::LAMP, Verb::Find));
        bench.run("find", "keys", |ctx| find(ctx, ObjectId::KEYS, Verb::Find));
        bench.run("find", "water", |ctx| find(ctx, ObjectId::WATER, Verb::Find));
        bench.run("find", "cage", |ctx| find(ctx, ObjectId::CAGE, Verb::Find));
        assert_eq!(bench.messages(), [24, 94, 94, 59]);
    }
}
