//! Verbs typed without an object: infer one, or ask.

use advent_core::{BearState, DragonState, ObjectId, Place, WorldState};

use super::{ActionContext, Flow, carry, combat, creature, endgame, lamp, liquid, lock, magic};
use crate::ending::ScoreCard;
use crate::error::EngineResult;
use crate::narrator;
use crate::prompt::Prompt;
use crate::verb::Verb;

pub(super) fn act(ctx: &mut ActionContext<'_>, verb: Verb) -> EngineResult<Flow> {
    match verb {
        Verb::Drop
        | Verb::Say
        | Verb::Wave
        | Verb::Calm
        | Verb::Rub
        | Verb::Throw
        | Verb::Find
        | Verb::Feed
        | Verb::Break
        | Verb::Wake => ctx.ask_what(),
        Verb::Take => take(ctx),
        Verb::Open | Verb::Lock => open(ctx, verb == Verb::Lock),
        Verb::Nothing => ctx.reply(54),
        Verb::On => lamp::on(ctx),
        Verb::Off => lamp::off(ctx),
        Verb::Pour => liquid::pour(ctx, None),
        Verb::Kill => kill(ctx),
        Verb::Eat => {
            if !ctx.world.here(ObjectId::FOOD) {
                return ctx.ask_what();
            }
            creature::eat(ctx, ObjectId::FOOD)
        }
        Verb::Drink => {
            let world = &*ctx.world;
            let spring = world.liquid_at(world.loc) == Some(ObjectId::WATER);
            let bottled = world.liquid_carried() == Some(ObjectId::WATER)
                && world.here(ObjectId::BOTTLE);
            if !spring && !bottled {
                return ctx.ask_what();
            }
            liquid::drink(ctx, ObjectId::WATER)
        }
        Verb::Quit => Ok(Flow::Ask(Prompt::Quit)),
        Verb::Fill => {
            if !ctx.world.here(ObjectId::BOTTLE) {
                return ctx.ask_what();
            }
            liquid::fill(ctx, ObjectId::BOTTLE)
        }
        Verb::Blast => endgame::blast(ctx),
        Verb::Score => {
            ScoreCard::of(ctx.world).report(ctx.out);
            Ok(Flow::Continue)
        }
        Verb::Foo => {
            let word = ctx.verb_word;
            magic::incantation(ctx, word)
        }
        Verb::Suspend => Ok(Flow::Suspend),
        Verb::Inventory => {
            narrator::inventory(ctx.world, ctx.out);
            Ok(Flow::Continue)
        }
        Verb::Read => read(ctx),
        Verb::Walk | Verb::Brief | Verb::Hours | Verb::Log | Verb::Load => {
            ctx.default_reply(verb)
        }
    }
}

fn take(ctx: &mut ActionContext<'_>) -> EngineResult<Flow> {
    let world = &*ctx.world;
    let mut lying = ObjectId::all().filter(|&obj| world.place(obj) == Place::At(world.loc));
    let only = match (lying.next(), lying.next()) {
        (Some(obj), None) => Some(obj),
        _ => None,
    };
    let dwarf_here = world.dwarf_check().is_some() && world.dflag >= 2;
    match only {
        Some(obj) if !dwarf_here => carry::take(ctx, obj),
        _ => ctx.ask_what(),
    }
}

fn open(ctx: &mut ActionContext<'_>, lock: bool) -> EngineResult<Flow> {
    let world = &*ctx.world;
    let mut target = None;
    if world.here(ObjectId::CLAM) {
        target = Some(ObjectId::CLAM);
    }
    if world.here(ObjectId::OYSTER) {
        target = Some(ObjectId::OYSTER);
    }
    if world.at(ObjectId::DOOR) {
        target = Some(ObjectId::DOOR);
    }
    if world.at(ObjectId::GRATE) {
        target = Some(ObjectId::GRATE);
    }
    if world.here(ObjectId::CHAIN) {
        if target.is_some() {
            return ctx.ask_what();
        }
        target = Some(ObjectId::CHAIN);
    }
    match target {
        Some(obj) => lock::open(ctx, obj, lock),
        None => ctx.reply(28),
    }
}

/// Offer a kill target. A second offer makes the choice ambiguous.
fn offer(world: &mut WorldState, target: &mut Option<ObjectId>, obj: ObjectId) {
    if world.object1.is_some() {
        return;
    }
    if target.is_some() {
        world.object1 = Some(obj);
        return;
    }
    *target = Some(obj);
}

fn kill(ctx: &mut ActionContext<'_>) -> EngineResult<Flow> {
    let world = &mut *ctx.world;
    world.object1 = None;
    let mut target = None;

    if world.dwarf_check().is_some() && world.dflag >= 2 {
        target = Some(ObjectId::DWARF);
    }
    if world.here(ObjectId::SNAKE) {
        offer(world, &mut target, ObjectId::SNAKE);
    }
    if world.at(ObjectId::DRAGON) && world.state::<DragonState>() == DragonState::Alive {
        offer(world, &mut target, ObjectId::DRAGON);
    }
    if world.at(ObjectId::TROLL) {
        offer(world, &mut target, ObjectId::TROLL);
    }
    if world.here(ObjectId::BEAR) && world.state::<BearState>() == BearState::Hungry {
        offer(world, &mut target, ObjectId::BEAR);
    }
    if world.object1.is_some() {
        return ctx.ask_what();
    }
    if target.is_some() {
        return combat::kill(ctx, target);
    }

    if world.here(ObjectId::BIRD) {
        target = Some(ObjectId::BIRD);
    }
    if world.here(ObjectId::CLAM) || world.here(ObjectId::OYSTER) {
        offer(world, &mut target, ObjectId::CLAM);
    }
    if world.object1.is_some() {
        return ctx.ask_what();
    }
    combat::kill(ctx, target)
}

fn read(ctx: &mut ActionContext<'_>) -> EngineResult<Flow> {
    let world = &*ctx.world;
    let mut readable = [ObjectId::MAGAZINE, ObjectId::TABLET, ObjectId::MESSAGE]
        .into_iter()
        .filter(|&obj| world.here(obj));
    let mut target = match (readable.next(), readable.next()) {
        (Some(obj), None) => Some(obj),
        (None, _) => None,
        _ => return ctx.ask_what(),
    };
    if world.closed && world.toting(ObjectId::OYSTER) {
        target = Some(ObjectId::OYSTER);
    }
    match target {
        Some(obj) if !world.is_dark() => magic::read(ctx, obj),
        _ => ctx.ask_what(),
    }
}
