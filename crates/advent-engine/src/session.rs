//! A game in progress.
//!
//! [`GameSession`] owns the world, the random source and the static tables.
//! Each input line goes through [`GameSession::process_turn`], which parses
//! it, dispatches the command and runs the arrival phase: the closing guard,
//! the dwarves, the move itself with any forced moves, the description and
//! the timers. The replies come back rendered, in one [`TurnReport`].

use advent_core::object::seen_value;
use advent_core::{KnifeHint, ObjectId, TravelTable, WorldState, percent_chance, snapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::actions::{self, ActionContext, Flow};
use crate::clock;
use crate::config::GameConfig;
use crate::dwarves;
use crate::ending::{self, BlastEnding, Ending, EndingRule, MAXDIE, ScoreCard};
use crate::error::{EngineError, EngineResult};
use crate::narrator::{self, BuiltinMessages, MessageStore, Transcript};
use crate::parser::{self, ParseFailure, ParsedCommand, Vocabulary};
use crate::prompt::{Prompt, is_yes};
use crate::travel;

/// Forced moves followed in one arrival before giving up.
const MAX_FORCED_MOVES: usize = 16;

/// Replies to a word the game does not know, one picked at random.
const UNKNOWN_WORD: [u16; 3] = [60, 61, 13];

/// Reply to input once the game has ended.
const GAME_OVER: &str = "The game is over.";

/// Whether the session still accepts commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    /// Waiting for the next command.
    Playing,
    /// The player asked to save; the caller should write a snapshot.
    Suspended,
    /// The game has ended.
    Finished,
}

/// Everything one input line produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Rendered replies, in order.
    pub messages: Vec<String>,
    /// False when the line could not be understood or the game is over.
    pub accepted: bool,
    /// Session status after the turn.
    pub status: SessionStatus,
    /// The command the line resolved to. `None` for prompt answers.
    pub command: Option<ParsedCommand>,
}

/// One game from the opening question to the final score.
pub struct GameSession {
    config: GameConfig,
    world: WorldState,
    rng: StdRng,
    table: TravelTable,
    vocabulary: Vocabulary,
    store: Box<dyn MessageStore>,
    ending: Box<dyn EndingRule>,
    pending: Option<Prompt>,
    status: SessionStatus,
    opening: Transcript,
}

impl GameSession {
    /// Start a new game. The first line answers the instructions question.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        let mut session = Self::build(config, WorldState::new())?;
        let mut opening = Transcript::new();
        session.ask(Prompt::Instructions, &mut opening);
        session.opening = opening;
        tracing::info!(seed = session.config.seed, "new game");
        Ok(session)
    }

    /// Resume a saved game and describe where the player stands.
    pub fn restore(config: GameConfig, bytes: &[u8]) -> EngineResult<Self> {
        let world = snapshot::deserialize(bytes)?;
        let mut session = Self::build(config, world)?;
        let mut opening = Transcript::new();
        session.look(&mut opening);
        session.opening = opening;
        tracing::info!(
            turns = session.world.turns,
            loc = %session.world.loc,
            "game restored"
        );
        Ok(session)
    }

    fn build(config: GameConfig, world: WorldState) -> EngineResult<Self> {
        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            world,
            table: TravelTable::builtin()?,
            vocabulary: Vocabulary::builtin(),
            store: Box::new(BuiltinMessages::new()),
            ending: Box::new(BlastEnding),
            pending: None,
            status: SessionStatus::Playing,
            opening: Transcript::new(),
        })
    }

    /// Use a different text source.
    pub fn with_store(mut self, store: impl MessageStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Use a different rule for the blast ending.
    pub fn with_ending_rule(mut self, rule: impl EndingRule + 'static) -> Self {
        self.ending = Box::new(rule);
        self
    }

    /// What the game says before the first input. Empty once taken.
    pub fn opening_messages(&mut self) -> Vec<String> {
        self.opening.render(self.store.as_ref())
    }

    /// The world as it stands.
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// The session's configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The question the next line will answer, if any.
    pub fn pending_prompt(&self) -> Option<Prompt> {
        self.pending
    }

    /// Encode the world for saving.
    pub fn snapshot(&self) -> EngineResult<Vec<u8>> {
        Ok(snapshot::serialize(&self.world)?)
    }

    // -----------------------------------------------------------------------
    // Turns
    // -----------------------------------------------------------------------

    /// Handle one line of input.
    ///
    /// A line answering a question does not count as a turn. Any other line
    /// does, even if it cannot be understood.
    pub fn process_turn(&mut self, line: &str) -> EngineResult<TurnReport> {
        let mut out = Transcript::new();
        if self.status == SessionStatus::Finished {
            out.text(GAME_OVER);
            return Ok(self.report(&mut out, false, None));
        }
        self.status = SessionStatus::Playing;

        if let Some(prompt) = self.pending.take() {
            let flow = self.answer(prompt, is_yes(line), &mut out);
            self.settle(flow, &mut out)?;
            return Ok(self.report(&mut out, true, None));
        }

        self.world.turns += 1;
        let words = parser::tokenize(line, self.config.word_size);
        let phrase = match parser::resolve(&self.vocabulary, &words) {
            Ok(phrase) => phrase,
            Err(failure) => {
                self.refuse(failure, &mut out);
                return Ok(self.report(&mut out, false, None));
            }
        };

        let flow = {
            let mut ctx = ActionContext {
                verb_word: &phrase.verb_word,
                noun_word: &phrase.noun_word,
                ..self.context(&mut out)
            };
            actions::dispatch(&mut ctx, phrase.command)
        }
        .inspect_err(|e| tracing::warn!(error = %e, line, "turn aborted"))?;
        self.settle(flow, &mut out)?;
        Ok(self.report(&mut out, true, Some(phrase.command)))
    }

    fn context<'a>(&'a mut self, out: &'a mut Transcript) -> ActionContext<'a> {
        ActionContext {
            world: &mut self.world,
            rng: &mut self.rng,
            out,
            table: &self.table,
            vocabulary: &self.vocabulary,
            ending: self.ending.as_ref(),
            verb_word: "",
            noun_word: "",
        }
    }

    fn report(
        &mut self,
        out: &mut Transcript,
        accepted: bool,
        command: Option<ParsedCommand>,
    ) -> TurnReport {
        TurnReport {
            messages: out.render(self.store.as_ref()),
            accepted,
            status: self.status,
            command,
        }
    }

    fn refuse(&mut self, failure: ParseFailure, out: &mut Transcript) {
        match failure {
            ParseFailure::UnknownWord => {
                let pick = self.rng.random_range(0..UNKNOWN_WORD.len());
                out.message(UNKNOWN_WORD[pick]);
            }
            ParseFailure::Message(id) => out.message(id),
            ParseFailure::BadGrammar => out.text("bad grammar..."),
        }
    }

    fn ask(&mut self, prompt: Prompt, out: &mut Transcript) {
        out.message(prompt.question(&self.world));
        self.pending = Some(prompt);
    }

    fn answer(&mut self, prompt: Prompt, yes: bool, out: &mut Transcript) -> Flow {
        match prompt {
            Prompt::Instructions => {
                self.world.limit = if yes {
                    out.message(1);
                    self.config.limit_with_instructions
                } else {
                    self.config.limit_without_instructions
                };
                Flow::Continue
            }
            Prompt::KillDragon => {
                if !yes {
                    return Flow::Continue;
                }
                let mut ctx = self.context(out);
                actions::slay_dragon(&mut ctx)
            }
            Prompt::ReadOyster => {
                out.message(if yes { 193 } else { 54 });
                Flow::Continue
            }
            Prompt::Quit => {
                out.message(54);
                if !yes {
                    return Flow::Continue;
                }
                self.world.gave_up = true;
                Flow::End(Ending::Normal)
            }
            Prompt::Reincarnate => {
                let deaths = u16::from(self.world.numdie);
                out.message(if yes { 82 + 2 * deaths } else { 54 });
                self.world.numdie += 1;
                if !yes || self.world.numdie >= MAXDIE {
                    return Flow::End(Ending::Normal);
                }
                ending::reincarnate(&mut self.world);
                Flow::Continue
            }
        }
    }

    fn settle(&mut self, flow: Flow, out: &mut Transcript) -> EngineResult<()> {
        match flow {
            Flow::Continue => self.arrive(false, out)?,
            Flow::Redescribe => self.arrive(true, out)?,
            Flow::Ask(prompt) => self.ask(prompt, out),
            Flow::Die => self.die(out),
            Flow::End(ending) => self.finish(ending, out),
            Flow::Suspend => {
                self.status = SessionStatus::Suspended;
                tracing::info!(turns = self.world.turns, "game suspended");
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Arrival
    // -----------------------------------------------------------------------

    fn arrive(&mut self, redescribe: bool, out: &mut Transcript) -> EngineResult<()> {
        let mut redescribe = redescribe;
        for _ in 0..MAX_FORCED_MOVES {
            clock::guard_exit(&mut self.world, out);
            dwarves::blocks_player(&mut self.world, &self.table, out);
            if dwarves::tick(&mut self.world, &self.table, &mut self.rng, out) == Flow::Die {
                self.die(out);
                return Ok(());
            }

            if self.world.newloc != self.world.loc || redescribe {
                redescribe = false;
                self.world.loc = self.world.newloc;
                if self.world.loc.is_nowhere() {
                    self.die(out);
                    return Ok(());
                }
                if self.table.is_forced(self.world.loc) {
                    narrator::describe(&self.world, &mut self.rng, out);
                    travel::go_forced(&mut self.context(out));
                    continue;
                }
                if self.world.was_dark && self.world.is_dark() && percent_chance(&mut self.rng, 35)
                {
                    out.message(23);
                    self.world.oldloc2 = self.world.loc;
                    self.die(out);
                    return Ok(());
                }
                self.look(out);
            }
            self.end_of_turn(out);
            return Ok(());
        }
        tracing::warn!(loc = %self.world.loc, "forced moves did not settle");
        Err(EngineError::ForcedMoveLoop)
    }

    fn look(&mut self, out: &mut Transcript) {
        narrator::describe(&self.world, &mut self.rng, out);
        if !self.world.is_dark() {
            self.world.mark_visited(self.world.loc);
            narrator::describe_items(&mut self.world, out);
        }
    }

    fn end_of_turn(&mut self, out: &mut Transcript) {
        let world = &mut self.world;
        if world.closed {
            if world.is_unseen(ObjectId::OYSTER) && world.toting(ObjectId::OYSTER) {
                out.object(ObjectId::OYSTER, 1);
            }
            for obj in ObjectId::all() {
                if world.toting(obj) && world.is_unseen(obj) {
                    let seen = seen_value(world.property(obj));
                    world.set_property(obj, seen);
                }
            }
        }
        world.was_dark = world.is_dark();
        if matches!(world.knife, KnifeHint::At(spot) if spot != world.loc) {
            world.knife = KnifeHint::None;
        }

        match clock::tick(&mut self.world, out) {
            Flow::Redescribe => self.look(out),
            Flow::End(ending) => self.finish(ending, out),
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Death and endings
    // -----------------------------------------------------------------------

    fn die(&mut self, out: &mut Transcript) {
        tracing::info!(
            loc = %self.world.loc,
            deaths = self.world.numdie,
            "player died"
        );
        if self.world.closing {
            out.message(131);
            self.world.numdie += 1;
            self.finish(Ending::Normal, out);
            return;
        }
        self.ask(Prompt::Reincarnate, out);
    }

    fn finish(&mut self, ending: Ending, out: &mut Transcript) {
        if ending == Ending::Dwarf {
            out.message(136);
        }
        let card = ScoreCard::of(&self.world);
        card.report(out);
        self.pending = None;
        self.status = SessionStatus::Finished;
        tracing::info!(
            ?ending,
            score = card.total,
            turns = self.world.turns,
            "game over"
        );
    }
}
