//! Water and oil: pouring, drinking and filling.

use advent_core::{BottleContents, DoorState, ObjectId, ObjectState, PlantState};

use super::{ActionContext, Flow, carry};
use crate::error::EngineResult;
use crate::verb::Verb;

/// Pour `obj` out. The bottle, or no object at all, means whatever it holds.
pub(super) fn pour(ctx: &mut ActionContext<'_>, obj: Option<ObjectId>) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    let obj = match obj {
        None | Some(ObjectId::BOTTLE) => world.liquid_carried(),
        other => other,
    };
    let Some(obj) = obj else {
        return ctx.ask_what();
    };
    if !world.toting(obj) {
        return ctx.default_reply(Verb::Pour);
    }
    if !obj.is_liquid() {
        return ctx.reply(78);
    }

    world.set_state(BottleContents::Empty);
    world.destroy(obj);

    if world.at(ObjectId::PLANT) {
        if obj != ObjectId::WATER {
            return ctx.reply(112);
        }
        let plant: PlantState = world.state();
        ctx.out.object(ObjectId::PLANT, plant.property() + 1);
        let grown = plant.watered();
        world.set_state(grown);
        world.set_property(ObjectId::PLANT2, grown.phony_property());
        return Ok(Flow::Redescribe);
    }
    if world.at(ObjectId::DOOR) {
        let door = if obj == ObjectId::OIL {
            DoorState::Oiled
        } else {
            DoorState::Rusted
        };
        world.set_state(door);
        return ctx.reply(113 + door.property() as u16);
    }
    ctx.reply(77)
}

pub(super) fn drink(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    if obj != ObjectId::WATER {
        return ctx.reply(110);
    }
    if world.liquid_carried() != Some(ObjectId::WATER) || !world.here(ObjectId::BOTTLE) {
        return ctx.default_reply(Verb::Drink);
    }
    world.set_state(BottleContents::Empty);
    world.destroy(ObjectId::WATER);
    ctx.reply(74)
}

pub(super) fn fill(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    let available = world.liquid_at(world.loc);
    match obj {
        ObjectId::BOTTLE => {
            if world.liquid_carried().is_some() {
                return ctx.reply(105);
            }
            let Some(liquid) = available else {
                return ctx.reply(106);
            };
            let contents = if liquid == ObjectId::OIL {
                BottleContents::Oil
            } else {
                BottleContents::Water
            };
            world.set_state(contents);
            if world.toting(ObjectId::BOTTLE) {
                world.carry(liquid);
            }
            ctx.reply(if liquid == ObjectId::OIL { 108 } else { 107 })
        }
        ObjectId::VASE => {
            if available.is_none() {
                return ctx.reply(144);
            }
            if !world.toting(ObjectId::VASE) {
                return ctx.reply(29);
            }
            ctx.out.message(145);
            carry::drop(ctx, ObjectId::VASE)
        }
        _ => ctx.reply(29),
    }
}
