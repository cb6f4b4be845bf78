//! Verb dispatch: what each command does to the world.

mod carry;
mod combat;
mod creature;
mod endgame;
mod intransitive;
mod lamp;
mod liquid;
mod lock;
mod magic;

use advent_core::{Fixed, KnifeHint, LocationId, Motion, ObjectId, Place, TravelTable, WorldState};
use rand::rngs::StdRng;

use crate::ending::{Ending, EndingRule};
use crate::error::EngineResult;
use crate::narrator::Transcript;
use crate::parser::{Noun, ParsedCommand, Vocabulary};
use crate::prompt::Prompt;
use crate::travel;
use crate::verb::Verb;

pub(crate) use carry::chase_troll;
pub(crate) use combat::slay_dragon;

/// Everything a handler may read or change during one command.
pub struct ActionContext<'a> {
    /// The world being played.
    pub world: &'a mut WorldState,
    /// The session's random source.
    pub rng: &'a mut StdRng,
    /// Where replies go.
    pub out: &'a mut Transcript,
    /// The cave map.
    pub table: &'a TravelTable,
    /// Word lookup, for spoken words.
    pub vocabulary: &'a Vocabulary,
    /// Decides the blast outcome.
    pub ending: &'a dyn EndingRule,
    /// The word that named the verb.
    pub verb_word: &'a str,
    /// The word that named the object.
    pub noun_word: &'a str,
}

impl ActionContext<'_> {
    pub(crate) fn reply(&mut self, id: u16) -> EngineResult<Flow> {
        self.out.message(id);
        Ok(Flow::Continue)
    }

    pub(crate) fn default_reply(&mut self, verb: Verb) -> EngineResult<Flow> {
        if let Some(id) = verb.default_message()? {
            self.out.message(id);
        }
        Ok(Flow::Continue)
    }

    /// "X what?"
    pub(crate) fn ask_what(&mut self) -> EngineResult<Flow> {
        self.out.text(format!("{} what?", self.verb_word));
        Ok(Flow::Continue)
    }

    pub(crate) fn see_no(&mut self) -> EngineResult<Flow> {
        self.out.text(format!("I see no {} here.", self.noun_word));
        Ok(Flow::Continue)
    }
}

/// What the session should do once a command has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Carry on with the arrival phase.
    Continue,
    /// As `Continue`, describing the location even if the player stayed put.
    Redescribe,
    /// Stop and wait for the answer to a question.
    Ask(Prompt),
    /// The player has died.
    Die,
    /// The game is over.
    End(Ending),
    /// Save and stop.
    Suspend,
}

/// Carry out a parsed command.
pub fn dispatch(ctx: &mut ActionContext<'_>, command: ParsedCommand) -> EngineResult<Flow> {
    tracing::debug!(?command, loc = %ctx.world.loc, "dispatching command");
    match command {
        ParsedCommand::Motion(motion) => Ok(travel::go(ctx, motion)),
        ParsedCommand::Intransitive(verb) => intransitive::act(ctx, verb),
        ParsedCommand::Transitive {
            object: Noun::Quoted,
            ..
        } => magic::say(ctx),
        ParsedCommand::Transitive {
            verb,
            object: Noun::Object(obj),
        } => resolve_object(ctx, obj, Some(verb)),
        ParsedCommand::Object(obj) => resolve_object(ctx, obj, None),
    }
}

/// Work out which object the player means, then act on it.
fn resolve_object(
    ctx: &mut ActionContext<'_>,
    obj: ObjectId,
    verb: Option<Verb>,
) -> EngineResult<Flow> {
    let world = &*ctx.world;
    let loc = world.loc;

    if world.fixed(obj) == Fixed::At(loc) || world.here(obj) {
        return act_or_ask(ctx, obj, verb);
    }
    if obj == ObjectId::GRATE {
        if [1, 4, 7].contains(&loc.raw()) {
            return Ok(travel::go(ctx, Motion::DEPRESSION));
        }
        if (10..=14).contains(&loc.raw()) {
            return Ok(travel::go(ctx, Motion::ENTRANCE));
        }
    }
    if world.dwarf_check().is_some() && world.dflag >= 2 {
        return act_or_ask(ctx, ObjectId::DWARF, verb);
    }
    let bottled = world.liquid_carried() == Some(obj) && world.here(ObjectId::BOTTLE);
    if bottled || world.liquid_at(loc) == Some(obj) {
        return act_or_ask(ctx, obj, verb);
    }
    if obj == ObjectId::PLANT && world.at(ObjectId::PLANT2) && world.property(ObjectId::PLANT2) != 0
    {
        return act_or_ask(ctx, ObjectId::PLANT2, verb);
    }
    if obj == ObjectId::KNIFE && world.knife == KnifeHint::At(loc) {
        ctx.world.knife = KnifeHint::Explained;
        return ctx.reply(116);
    }
    if obj == ObjectId::ROD && world.here(ObjectId::ROD2) {
        return act_or_ask(ctx, ObjectId::ROD2, verb);
    }
    if matches!(verb, Some(Verb::Find | Verb::Inventory)) {
        return act_or_ask(ctx, obj, verb);
    }
    ctx.see_no()
}

fn act_or_ask(ctx: &mut ActionContext<'_>, obj: ObjectId, verb: Option<Verb>) -> EngineResult<Flow> {
    match verb {
        Some(verb) => act_on(ctx, verb, obj),
        None => {
            ctx.out.text(format!(
                "What do you want to do with the {}?",
                ctx.noun_word
            ));
            Ok(Flow::Continue)
        }
    }
}

/// Apply a verb to an object that is within reach.
pub(crate) fn act_on(ctx: &mut ActionContext<'_>, verb: Verb, obj: ObjectId) -> EngineResult<Flow> {
    match verb {
        Verb::Calm
        | Verb::Walk
        | Verb::Quit
        | Verb::Score
        | Verb::Foo
        | Verb::Brief
        | Verb::Suspend
        | Verb::Hours
        | Verb::Log
        | Verb::Load => ctx.default_reply(verb),
        Verb::Take => carry::take(ctx, obj),
        Verb::Drop => carry::drop(ctx, obj),
        Verb::Find | Verb::Inventory => carry::find(ctx, obj, verb),
        Verb::Open => lock::open(ctx, obj, false),
        Verb::Lock => lock::open(ctx, obj, true),
        Verb::Say => magic::say(ctx),
        Verb::Nothing => ctx.reply(54),
        Verb::On => lamp::on(ctx),
        Verb::Off => lamp::off(ctx),
        Verb::Rub if obj != ObjectId::LAMP => ctx.reply(76),
        Verb::Rub => ctx.default_reply(verb),
        Verb::Wave => magic::wave(ctx, obj),
        Verb::Read => magic::read(ctx, obj),
        Verb::Kill => combat::kill(ctx, Some(obj)),
        Verb::Throw => combat::throw(ctx, obj),
        Verb::Pour => liquid::pour(ctx, Some(obj)),
        Verb::Drink => liquid::drink(ctx, obj),
        Verb::Fill => liquid::fill(ctx, obj),
        Verb::Eat => creature::eat(ctx, obj),
        Verb::Feed => creature::feed(ctx, obj),
        Verb::Wake => creature::wake(ctx, obj),
        Verb::Blast => endgame::blast(ctx),
        Verb::Break => endgame::smash(ctx, obj),
    }
}

/// Sweep everything lying at `from` over to `to`.
pub(crate) fn gather(world: &mut WorldState, from: LocationId, to: LocationId) {
    for obj in ObjectId::all() {
        if world.place(obj) == Place::At(from) {
            world.drop(obj, to);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers shared by the handler tests.

    use advent_core::{LocationId, TravelTable, WorldState};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{ActionContext, Flow};
    use crate::ending::BlastEnding;
    use crate::error::EngineResult;
    use crate::narrator::{BuiltinMessages, Reply, Transcript};
    use crate::parser::Vocabulary;

    /// A world plus everything needed to run handlers against it.
    pub struct Bench {
        pub world: WorldState,
        pub rng: StdRng,
        pub out: Transcript,
        pub table: TravelTable,
        pub vocabulary: Vocabulary,
    }

    impl Bench {
        pub fn at(raw: i32) -> Self {
            let mut world = WorldState::new();
            world.loc = LocationId::new(raw).unwrap();
            world.newloc = world.loc;
            Self {
                world,
                rng: StdRng::seed_from_u64(511),
                out: Transcript::new(),
                table: TravelTable::builtin().unwrap(),
                vocabulary: Vocabulary::builtin(),
            }
        }

        pub fn run<F>(&mut self, verb_word: &str, noun_word: &str, f: F) -> Flow
        where
            F: FnOnce(&mut ActionContext<'_>) -> EngineResult<Flow>,
        {
            let mut ctx = ActionContext {
                world: &mut self.world,
                rng: &mut self.rng,
                out: &mut self.out,
                table: &self.table,
                vocabulary: &self.vocabulary,
                ending: &BlastEnding,
                verb_word,
                noun_word,
            };
            f(&mut ctx).unwrap()
        }

        pub fn messages(&mut self) -> Vec<u16> {
            let ids = self
                .out
                .replies()
                .iter()
                .filter_map(|r| match r {
                    Reply::Message(id) => Some(*id),
                    _ => None,
                })
                .collect();
            self.out = Transcript::new();
            ids
        }

        pub fn lines(&mut self) -> Vec<String> {
            self.out.render(&BuiltinMessages::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Bench;
    use super::*;

    fn command(bench: &mut Bench, verb_word: &str, noun_word: &str, command: ParsedCommand) -> Flow {
        bench.run(verb_word, noun_word, |ctx| dispatch(ctx, command))
    }

    #[test]
    fn bare_object_here_asks_what_to_do() {
        let mut bench = Bench::at(3);
        command(&mut bench, "", "lamp", ParsedCommand::Object(ObjectId::LAMP));
        assert_eq!(bench.lines(), ["What do you want to do with the lamp?"]);
    }

    #[test]
    fn absent_object_is_not_seen() {
        let mut bench = Bench::at(1);
        let take = ParsedCommand::Transitive {
            verb: Verb::Take,
            object: Noun::Object(ObjectId::LAMP),
        };
        command(&mut bench, "take", "lamp", take);
        assert_eq!(bench.lines(), ["I see no lamp here."]);
        assert_eq!(bench.world.place(ObjectId::LAMP), Place::At(LocationId::BUILDING));
    }

    #[test]
    fn naming_the_grate_walks_to_it() {
        let mut bench = Bench::at(1);
        command(&mut bench, "", "grate", ParsedCommand::Object(ObjectId::GRATE));
        assert_eq!(bench.world.newloc, LocationId::OUTSIDE_GRATE);

        let mut bench = Bench::at(11);
        command(&mut bench, "", "grate", ParsedCommand::Object(ObjectId::GRATE));
        assert_eq!(bench.world.newloc, LocationId::BELOW_GRATE);
    }

    #[test]
    fn find_reports_remote_objects_vaguely() {
        let mut bench = Bench::at(1);
        let find = ParsedCommand::Transitive {
            verb: Verb::Find,
            object: Noun::Object(ObjectId::CAGE),
        };
        command(&mut bench, "find", "cage", find);
        assert_eq!(bench.messages(), [59]);
    }

    #[test]
    fn knife_hint_is_explained_once() {
        let mut bench = Bench::at(19);
        bench.world.knife = KnifeHint::At(LocationId::MOUNTAIN_KING);
        command(&mut bench, "", "knife", ParsedCommand::Object(ObjectId::KNIFE));
        assert_eq!(bench.messages(), [116]);
        assert_eq!(bench.world.knife, KnifeHint::Explained);
    }

    #[test]
    fn motions_go_through_travel() {
        let mut bench = Bench::at(1);
        command(&mut bench, "", "", ParsedCommand::Motion(Motion::EAST));
        assert_eq!(bench.world.newloc, LocationId::BUILDING);
        assert_eq!(bench.world.oldloc, LocationId::ROAD);
    }

    #[test]
    fn rub_and_nothing() {
        let mut bench = Bench::at(3);
        bench.run("rub", "keys", |ctx| act_on(ctx, Verb::Rub, ObjectId::KEYS));
        bench.run("rub", "lamp", |ctx| act_on(ctx, Verb::Rub, ObjectId::LAMP));
        bench.run("nothing", "lamp", |ctx| act_on(ctx, Verb::Nothing, ObjectId::LAMP));
        assert_eq!(bench.messages(), [76, 75, 54]);
    }

    #[test]
    fn transcript_only_verbs_are_fatal() {
        let mut bench = Bench::at(3);
        let mut ctx = ActionContext {
            world: &mut bench.world,
            rng: &mut bench.rng,
            out: &mut bench.out,
            table: &bench.table,
            vocabulary: &bench.vocabulary,
            ending: &crate::ending::BlastEnding,
            verb_word: "",
            noun_word: "lamp",
        };
        assert!(act_on(&mut ctx, Verb::Log, ObjectId::LAMP).is_err());
    }
}
