//! The closed cave: blasting and breaking things.

use advent_core::{Fixed, ObjectId, VaseState};

use super::{ActionContext, Flow};
use crate::ending::Ending;
use crate::error::EngineResult;
use crate::verb::Verb;

pub(super) fn blast(ctx: &mut ActionContext<'_>) -> EngineResult<Flow> {
    if ctx.world.is_unseen(ObjectId::ROD2) || !ctx.world.closed {
        return ctx.default_reply(Verb::Blast);
    }
    let bonus = ctx.ending.blast_bonus(ctx.world);
    ctx.world.bonus = bonus;
    ctx.out.message(bonus);
    tracing::info!(bonus, "blast");
    Ok(Flow::End(Ending::Normal))
}

pub(super) fn smash(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    if obj == ObjectId::MIRROR {
        if world.closed {
            ctx.out.message(197);
            return Ok(Flow::End(Ending::Dwarf));
        }
        return ctx.reply(148);
    }
    if obj == ObjectId::VASE && world.property(ObjectId::VASE) == 0 {
        if world.toting(ObjectId::VASE) {
            let loc = world.loc;
            world.drop(ObjectId::VASE, loc);
        }
        world.set_state(VaseState::Broken);
        world.move_fixed(ObjectId::VASE, Fixed::Immovable);
        return ctx.reply(198);
    }
    ctx.default_reply(Verb::Break)
}
