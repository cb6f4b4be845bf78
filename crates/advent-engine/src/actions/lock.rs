//! Opening and locking.

use advent_core::{
    BearState, ChainState, DoorState, Fixed, GrateState, LocationId, ObjectId, ObjectState,
};

use super::{ActionContext, Flow};
use crate::error::EngineResult;

/// Unlock `obj`, or lock it when `lock` is set.
pub(super) fn open(ctx: &mut ActionContext<'_>, obj: ObjectId, lock: bool) -> EngineResult<Flow> {
    match obj {
        ObjectId::CLAM | ObjectId::OYSTER => shellfish(ctx, obj, lock),
        ObjectId::DOOR => {
            let msg = if ctx.world.state::<DoorState>() == DoorState::Oiled {
                54
            } else {
                111
            };
            ctx.reply(msg)
        }
        ObjectId::CAGE => ctx.reply(32),
        ObjectId::KEYS => ctx.reply(55),
        ObjectId::CHAIN => chain(ctx, lock),
        ObjectId::GRATE => grate(ctx, lock),
        _ => ctx.reply(33),
    }
}

fn shellfish(ctx: &mut ActionContext<'_>, obj: ObjectId, lock: bool) -> EngineResult<Flow> {
    let oyster = u16::from(obj == ObjectId::OYSTER);
    let world = &mut *ctx.world;
    if lock {
        return ctx.reply(61);
    }
    if !world.toting(ObjectId::TRIDENT) {
        return ctx.reply(122 + oyster);
    }
    if world.toting(obj) {
        return ctx.reply(120 + oyster);
    }
    if obj == ObjectId::CLAM {
        let loc = world.loc;
        world.destroy(ObjectId::CLAM);
        world.drop(ObjectId::OYSTER, loc);
        world.drop(ObjectId::PEARL, LocationId::CUL_DE_SAC);
    }
    ctx.reply(124 + oyster)
}

fn chain(ctx: &mut ActionContext<'_>, lock: bool) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    if !world.here(ObjectId::KEYS) {
        return ctx.reply(31);
    }

    if lock {
        if world.state::<ChainState>() != ChainState::Unlocked {
            return ctx.reply(34);
        }
        if world.loc != LocationId::BARREN_ROOM {
            return ctx.reply(173);
        }
        world.set_state(ChainState::LockedToWall);
        if world.toting(ObjectId::CHAIN) {
            let loc = world.loc;
            world.drop(ObjectId::CHAIN, loc);
        }
        world.move_fixed(ObjectId::CHAIN, Fixed::Immovable);
        return ctx.reply(172);
    }

    let bear: BearState = world.state();
    if bear == BearState::Hungry {
        return ctx.reply(41);
    }
    if world.state::<ChainState>() == ChainState::Unlocked {
        return ctx.reply(37);
    }
    world.set_state(ChainState::Unlocked);
    world.move_fixed(ObjectId::CHAIN, Fixed::Loose);
    if bear != BearState::Dead {
        world.set_state(BearState::Following);
    }
    let bear_fixed = if world.state::<BearState>() == BearState::Dead {
        Fixed::Immovable
    } else {
        Fixed::Loose
    };
    world.move_fixed(ObjectId::BEAR, bear_fixed);
    ctx.reply(171)
}

fn grate(ctx: &mut ActionContext<'_>, lock: bool) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    if !world.here(ObjectId::KEYS) {
        return ctx.reply(31);
    }
    if world.closing {
        if !world.panic {
            world.clock2 = 15;
            world.panic = true;
        }
        return ctx.reply(130);
    }
    let was = world.state::<GrateState>().property();
    let now = if lock {
        GrateState::Locked
    } else {
        GrateState::Open
    };
    world.set_state(now);
    let msg = 34 + was + 2 * now.property();
    ctx.reply(msg as u16)
}

#[cfg(test)]
mod tests {
    use advent_core::Place;

    use super::*;
    use crate::actions::testing::Bench;

    #[test]
    fn grate_needs_keys() {
        let mut bench = Bench::at(8);
        bench.run("open", "grate", |ctx| open(ctx, ObjectId::GRATE, false));
        assert_eq!(bench.messages(), [31]);
    }

    #[test]
    fn grate_lock_cycle() {
        let mut bench = Bench::at(8);
        bench.world.carry(ObjectId::KEYS);
        bench.run("unlock", "grate", |ctx| open(ctx, ObjectId::GRATE, false));
        assert_eq!(bench.world.state::<GrateState>(), GrateState::Open);
        bench.run("unlock", "grate", |ctx| open(ctx, ObjectId::GRATE, false));
        bench.run("lock", "grate", |ctx| open(ctx, ObjectId::GRATE, true));
        bench.run("lock", "grate", |ctx| open(ctx, ObjectId::GRATE, true));
        assert_eq!(bench.messages(), [36, 37, 35, 34]);
        assert_eq!(bench.world.state::<GrateState>(), GrateState::Locked);
    }

    #[test]
    fn grate_during_closing_starts_the_panic() {
        let mut bench = Bench::at(9);
        bench.world.carry(ObjectId::KEYS);
        bench.world.closing = true;
        bench.world.clock2 = 40;
        bench.run("open", "grate", |ctx| open(ctx, ObjectId::GRATE, false));
        assert_eq!(bench.messages(), [130]);
        assert!(bench.world.panic);
        assert_eq!(bench.world.clock2, 15);
        assert_eq!(bench.world.state::<GrateState>(), GrateState::Locked);
    }

    #[test]
    fn clam_yields_the_pearl() {
        let mut bench = Bench::at(103);
        bench.run("open", "clam", |ctx| open(ctx, ObjectId::CLAM, false));
        bench.world.carry(ObjectId::TRIDENT);
        bench.world.carry(ObjectId::CLAM);
        bench.run("open", "clam", |ctx| open(ctx, ObjectId::CLAM, false));
        bench.world.drop(ObjectId::CLAM, bench.world.loc);
        bench.run("open", "clam", |ctx| open(ctx, ObjectId::CLAM, false));
        assert_eq!(bench.messages(), [122, 120, 124]);
        assert_eq!(bench.world.place(ObjectId::CLAM), Place::Nowhere);
        assert_eq!(bench.world.place(ObjectId::OYSTER), Place::At(bench.world.loc));
        assert_eq!(bench.world.place(ObjectId::PEARL), Place::At(LocationId::CUL_DE_SAC));

        bench.run("open", "oyster", |ctx| open(ctx, ObjectId::OYSTER, false));
        bench.run("lock", "oyster", |ctx| open(ctx, ObjectId::OYSTER, true));
        assert_eq!(bench.messages(), [125, 61]);
    }

    #[test]
    fn chain_and_bear() {
        let mut bench = Bench::at(130);
        bench.world.carry(ObjectId::KEYS);
        bench.world.set_property(ObjectId::CHAIN, 1);
        bench.run("unlock", "chain", |ctx| open(ctx, ObjectId::CHAIN, false));
        assert_eq!(bench.messages(), [41]);

        bench.world.set_state(BearState::Fed);
        bench.run("unlock", "chain", |ctx| open(ctx, ObjectId::CHAIN, false));
        assert_eq!(bench.messages(), [171]);
        assert_eq!(bench.world.state::<BearState>(), BearState::Following);
        assert!(bench.world.fixed(ObjectId::CHAIN).is_loose());
        assert!(bench.world.fixed(ObjectId::BEAR).is_loose());

        bench.run("unlock", "chain", |ctx| open(ctx, ObjectId::CHAIN, false));
        bench.run("lock", "chain", |ctx| open(ctx, ObjectId::CHAIN, true));
        assert_eq!(bench.messages(), [37, 172]);
        assert_eq!(bench.world.state::<ChainState>(), ChainState::LockedToWall);
    }

    #[test]
    fn simple_refusals() {
        let mut bench = Bench::at(3);
        bench.run("open", "cage", |ctx| open(ctx, ObjectId::CAGE, false));
        bench.run("open", "keys", |ctx| open(ctx, ObjectId::KEYS, false));
        bench.run("open", "lamp", |ctx| open(ctx, ObjectId::LAMP, false));
        bench.run("open", "door", |ctx| open(ctx, ObjectId::DOOR, false));
        assert_eq!(bench.messages(), [32, 55, 33, 111]);
    }
}
