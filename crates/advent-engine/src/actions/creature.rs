//! Eating, feeding and waking.

use advent_core::{AxeState, BearState, BirdState, DragonState, Fixed, ObjectId};

use super::{ActionContext, Flow};
use crate::ending::Ending;
use crate::error::EngineResult;
use crate::verb::Verb;

/// Creatures that might tempt a hungry player.
const INEDIBLE: [ObjectId; 8] = [
    ObjectId::BIRD,
    ObjectId::SNAKE,
    ObjectId::CLAM,
    ObjectId::OYSTER,
    ObjectId::DWARF,
    ObjectId::DRAGON,
    ObjectId::TROLL,
    ObjectId::BEAR,
];

pub(super) fn eat(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    if obj == ObjectId::FOOD {
        ctx.world.destroy(ObjectId::FOOD);
        return ctx.reply(72);
    }
    if INEDIBLE.contains(&obj) {
        return ctx.reply(71);
    }
    ctx.default_reply(Verb::Eat)
}

pub(super) fn feed(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    match obj {
        ObjectId::BIRD => ctx.reply(100),
        ObjectId::DWARF => {
            if !world.here(ObjectId::FOOD) {
                return ctx.default_reply(Verb::Feed);
            }
            world.dflag += 1;
            ctx.reply(103)
        }
        ObjectId::BEAR => {
            if !world.here(ObjectId::FOOD) {
                return match world.state::<BearState>() {
                    BearState::Hungry => ctx.reply(102),
                    BearState::Dead => ctx.reply(110),
                    _ => ctx.default_reply(Verb::Feed),
                };
            }
            world.destroy(ObjectId::FOOD);
            world.set_state(BearState::Fed);
            world.move_fixed(ObjectId::AXE, Fixed::Loose);
            world.set_state(AxeState::Free);
            ctx.reply(168)
        }
        ObjectId::DRAGON => {
            let msg = if world.state::<DragonState>() == DragonState::Dead {
                110
            } else {
                102
            };
            ctx.reply(msg)
        }
        ObjectId::TROLL => ctx.reply(182),
        ObjectId::SNAKE => {
            if world.closed || !world.here(ObjectId::BIRD) {
                return ctx.reply(102);
            }
            world.destroy(ObjectId::BIRD);
            world.set_state(BirdState::Free);
            world.tally2 += 1;
            ctx.reply(101)
        }
        _ => ctx.reply(14),
    }
}

pub(super) fn wake(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    if obj != ObjectId::DWARF || !ctx.world.closed {
        return ctx.default_reply(Verb::Wake);
    }
    ctx.out.message(199);
    Ok(Flow::End(Ending::Dwarf))
}

#[cfg(test)]
mod tests {
    use advent_core::Place;

    use super::*;
    use crate::actions::testing::Bench;

    #[test]
    fn eating() {
        let mut bench = Bench::at(3);
        bench.run("eat", "food", |ctx| eat(ctx, ObjectId::FOOD));
        bench.run("eat", "bird", |ctx| eat(ctx, ObjectId::BIRD));
        bench.run("eat", "lamp", |ctx| eat(ctx, ObjectId::LAMP));
        assert_eq!(bench.messages(), [72, 71, 110]);
        assert_eq!(bench.world.place(ObjectId::FOOD), Place::Nowhere);
    }

    #[test]
    fn feeding_the_bear_frees_the_axe() {
        let mut bench = Bench::at(130);
        bench.run("feed", "bear", |ctx| feed(ctx, ObjectId::BEAR));
        assert_eq!(bench.messages(), [102]);

        bench.world.carry(ObjectId::FOOD);
        bench.world.move_fixed(ObjectId::AXE, Fixed::Immovable);
        bench.world.set_state(AxeState::ByBear);
        bench.run("feed", "bear", |ctx| feed(ctx, ObjectId::BEAR));
        assert_eq!(bench.messages(), [168]);
        assert_eq!(bench.world.state::<BearState>(), BearState::Fed);
        assert_eq!(bench.world.state::<AxeState>(), AxeState::Free);
        assert!(bench.world.fixed(ObjectId::AXE).is_loose());
        assert_eq!(bench.world.place(ObjectId::FOOD), Place::Nowhere);

        bench.run("feed", "bear", |ctx| feed(ctx, ObjectId::BEAR));
        assert_eq!(bench.messages(), [174]);
    }

    #[test]
    fn feeding_the_snake_the_bird() {
        let mut bench = Bench::at(19);
        bench.run("feed", "snake", |ctx| feed(ctx, ObjectId::SNAKE));
        bench.world.carry(ObjectId::BIRD);
        bench.run("feed", "snake", |ctx| feed(ctx, ObjectId::SNAKE));
        assert_eq!(bench.messages(), [102, 101]);
        assert_eq!(bench.world.place(ObjectId::BIRD), Place::Nowhere);
        assert_eq!(bench.world.tally2, 1);
    }

    #[test]
    fn feeding_others() {
        let mut bench = Bench::at(3);
        bench.run("feed", "bird", |ctx| feed(ctx, ObjectId::BIRD));
        bench.run("feed", "troll", |ctx| feed(ctx, ObjectId::TROLL));
        bench.run("feed", "dragon", |ctx| feed(ctx, ObjectId::DRAGON));
        bench.run("feed", "lamp", |ctx| feed(ctx, ObjectId::LAMP));
        assert_eq!(bench.messages(), [100, 182, 102, 14]);

        bench.world.dflag = 2;
        bench.run("feed", "dwarf", |ctx| feed(ctx, ObjectId::DWARF));
        assert_eq!(bench.messages(), [103]);
        assert_eq!(bench.world.dflag, 3);
    }

    #[test]
    fn waking_the_dwarves() {
        let mut bench = Bench::at(115);
        assert_eq!(
            bench.run("wake", "dwarf", |ctx| wake(ctx, ObjectId::DWARF)),
            Flow::Continue
        );
        bench.world.closed = true;
        assert_eq!(
            bench.run("wake", "dwarf", |ctx| wake(ctx, ObjectId::DWARF)),
            Flow::End(Ending::Dwarf)
        );
        assert_eq!(bench.messages(), [110, 199]);
    }
}
