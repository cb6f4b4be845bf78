//! Words of power, the rod, and things to read.

use advent_core::{FissureState, LocationId, Motion, ObjectId, ObjectState, Place, TrollState};

use super::{ActionContext, Flow};
use crate::error::EngineResult;
use crate::parser::WordClass;
use crate::prompt::Prompt;
use crate::travel;
use crate::verb::Verb;

/// Speak the quoted word. Magic words take effect as if typed alone.
pub(super) fn say(ctx: &mut ActionContext<'_>) -> EngineResult<Flow> {
    let word = ctx.noun_word;
    if word.is_empty() {
        return ctx.ask_what();
    }
    match ctx.vocabulary.classify(word) {
        Some(w) if w.class == WordClass::Motion => {
            let motion = Motion::new(w.code);
            if motion.is_magic() || motion == Motion::PLOVER {
                return Ok(travel::go(ctx, motion));
            }
        }
        Some(w) if w.class == WordClass::Verb && Verb::from_code(w.code) == Some(Verb::Foo) => {
            return incantation(ctx, word);
        }
        _ => {}
    }
    ctx.out.text("Okay.");
    ctx.out.text(word);
    Ok(Flow::Continue)
}

/// One step of fee-fie-foe-foo. The fourth word brings the eggs home.
pub(super) fn incantation(ctx: &mut ActionContext<'_>, word: &str) -> EngineResult<Flow> {
    let Some(step) = ctx.vocabulary.incantation_step(word) else {
        return ctx.default_reply(Verb::Foo);
    };
    let step = step as i8;
    let world = &mut *ctx.world;
    if world.foobar != 1 - step {
        let msg = if world.foobar != 0 { 151 } else { 42 };
        return ctx.reply(msg);
    }
    world.foobar = step;
    if step != 4 {
        return ctx.reply(54);
    }
    world.foobar = 0;

    let giant = LocationId::GIANT_ROOM;
    if world.place(ObjectId::EGGS) == Place::At(giant)
        || (world.toting(ObjectId::EGGS) && world.loc == giant)
    {
        return ctx.reply(42);
    }
    if world.place(ObjectId::EGGS) == Place::Nowhere
        && world.place(ObjectId::TROLL) == Place::Nowhere
        && world.state::<TrollState>() == TrollState::Guarding
    {
        world.set_state(TrollState::Returned);
    }
    let text = if world.loc == giant {
        0
    } else if world.here(ObjectId::EGGS) {
        1
    } else {
        2
    };
    world.drop(ObjectId::EGGS, giant);
    tracing::debug!("eggs returned to the giant room");
    ctx.out.object(ObjectId::EGGS, text);
    Ok(Flow::Continue)
}

pub(super) fn wave(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    let rod2 = obj == ObjectId::ROD && world.toting(ObjectId::ROD2);
    if !world.toting(obj) && !rod2 {
        return ctx.reply(29);
    }
    if obj != ObjectId::ROD
        || !world.at(ObjectId::FISSURE)
        || !world.toting(obj)
        || world.closing
    {
        return ctx.default_reply(Verb::Wave);
    }
    let bridge = match world.state::<FissureState>() {
        FissureState::Unbridged => FissureState::Bridged,
        FissureState::Bridged => FissureState::Unbridged,
    };
    world.set_state(bridge);
    ctx.out.object(ObjectId::FISSURE, 2 - bridge.property());
    Ok(Flow::Continue)
}

pub(super) fn read(ctx: &mut ActionContext<'_>, obj: ObjectId) -> EngineResult<Flow> {
    let world = &*ctx.world;
    if world.is_dark() {
        return ctx.see_no();
    }
    match obj {
        ObjectId::MAGAZINE => ctx.reply(190),
        ObjectId::TABLET => ctx.reply(196),
        ObjectId::MESSAGE => ctx.reply(191),
        ObjectId::OYSTER if world.toting(ObjectId::OYSTER) && world.closed => {
            Ok(Flow::Ask(Prompt::ReadOyster))
        }
        _ => ctx.default_reply(Verb::Read),
    }
}
