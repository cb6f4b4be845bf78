//! Moving the player along the travel table.

use advent_core::{
    Destination, LocationId, Motion, MotionMatch, TravelCondition, TravelEdge, TravelTable,
    WorldState,
};
use rand::Rng;
use rand::rngs::StdRng;

use crate::actions::{ActionContext, Flow};

/// Result of looking up a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelOutcome {
    /// Move here. `NOWHERE` is death.
    Go(LocationId),
    /// Stay put and print this message.
    Blocked(u16),
}

/// Find where `motion` leads from the player's location.
///
/// The first edge answering the motion is tried; if its condition fails the
/// following edges are tried in turn whatever their motions. One percentage
/// roll serves the whole lookup.
pub fn resolve(
    table: &TravelTable,
    world: &WorldState,
    motion: Motion,
    rng: &mut StdRng,
) -> TravelOutcome {
    let roll: u8 = rng.random_range(0..100);
    let mut matched = false;
    for edge in table.edges(world.loc) {
        if !matched && !edge.motions.matches(motion) {
            continue;
        }
        matched = true;
        if passes(edge.condition, world, roll) {
            return match edge.destination {
                Destination::Location(loc) => TravelOutcome::Go(loc),
                Destination::Message(msg) => TravelOutcome::Blocked(msg),
            };
        }
    }
    TravelOutcome::Blocked(blocked_message(motion))
}

fn passes(condition: TravelCondition, world: &WorldState, roll: u8) -> bool {
    match condition {
        TravelCondition::Always | TravelCondition::NotDwarf => true,
        TravelCondition::Chance(p) => roll < p,
        TravelCondition::Carrying(obj) => world.toting(obj),
        TravelCondition::Present(obj) => world.toting(obj) || world.at(obj),
        TravelCondition::PropertyNot { object, value } => world.property(object) != value,
    }
}

/// What to say when a motion leads nowhere.
pub fn blocked_message(motion: Motion) -> u16 {
    if motion.is_compass() || motion == Motion::UP || motion == Motion::DOWN {
        9
    } else if motion == Motion::FORWARD || motion == Motion::LEFT || motion == Motion::RIGHT {
        10
    } else if motion == Motion::OUT || motion == Motion::IN {
        11
    } else if motion.is_magic() {
        42
    } else if motion == Motion::CRAWL {
        80
    } else {
        12
    }
}

/// Carry out a motion command.
pub fn go(ctx: &mut ActionContext<'_>, motion: Motion) -> Flow {
    match motion {
        Motion::NULL => Flow::Continue,
        Motion::BACK => go_back(ctx),
        Motion::LOOK => look(ctx),
        Motion::CAVE => {
            let msg = if ctx.world.loc.raw() < LocationId::OUTSIDE_GRATE.raw() {
                57
            } else {
                58
            };
            ctx.out.message(msg);
            Flow::Continue
        }
        _ => {
            ctx.world.oldloc2 = ctx.world.oldloc;
            ctx.world.oldloc = ctx.world.loc;
            travel(ctx, motion);
            Flow::Continue
        }
    }
}

/// Move the player on from a forced location.
pub fn go_forced(ctx: &mut ActionContext<'_>) {
    ctx.world.oldloc2 = ctx.world.oldloc;
    ctx.world.oldloc = ctx.world.loc;
    travel(ctx, Motion::ANY);
}

fn travel(ctx: &mut ActionContext<'_>, motion: Motion) {
    let outcome = resolve(ctx.table, ctx.world, motion, ctx.rng);
    tracing::debug!(from = %ctx.world.loc, %motion, ?outcome, "travel");
    match outcome {
        TravelOutcome::Go(dest) => ctx.world.newloc = dest,
        TravelOutcome::Blocked(msg) => {
            ctx.world.newloc = ctx.world.loc;
            ctx.out.message(msg);
        }
    }
}

fn go_back(ctx: &mut ActionContext<'_>) -> Flow {
    let table = ctx.table;
    let world = &mut *ctx.world;
    let target = if table.is_forced(world.oldloc) {
        world.oldloc2
    } else {
        world.oldloc
    };
    world.oldloc2 = world.oldloc;
    world.oldloc = world.loc;

    if target == world.loc {
        ctx.out.message(91);
        return Flow::Continue;
    }

    let leads_to = |edge: &TravelEdge, to: LocationId| {
        edge.condition == TravelCondition::Always
            && edge.destination == Destination::Location(to)
    };
    let edges = table.edges(world.loc);
    let route = edges
        .iter()
        .find(|edge| leads_to(*edge, target))
        .or_else(|| {
            edges.iter().find(|edge| match edge.destination {
                Destination::Location(via) if edge.condition == TravelCondition::Always => {
                    table.is_forced(via)
                        && table
                            .edges(via)
                            .first()
                            .is_some_and(|next| next.destination == Destination::Location(target))
                }
                _ => false,
            })
        });

    match route {
        Some(edge) => {
            let motion = match &edge.motions {
                MotionMatch::Words(words) => words.first().copied().unwrap_or(Motion::ANY),
                MotionMatch::Any => Motion::ANY,
            };
            travel(ctx, motion);
        }
        None => ctx.out.message(140),
    }
    Flow::Continue
}

fn look(ctx: &mut ActionContext<'_>) -> Flow {
    let world = &mut *ctx.world;
    if world.detail < 3 {
        ctx.out.message(15);
    }
    world.detail += 1;
    world.was_dark = false;
    world.forget_visit(world.loc);
    world.newloc = world.loc;
    Flow::Redescribe
}

#[cfg(test)]
mod tests {
    use advent_core::{GrateState, ObjectId};
    use rand::SeedableRng;

    use super::*;

    fn loc(raw: i32) -> LocationId {
        LocationId::new(raw).unwrap()
    }

    fn at(raw: i32) -> WorldState {
        let mut world = WorldState::new();
        world.loc = loc(raw);
        world
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(511)
    }

    #[test]
    fn plain_moves() {
        let table = TravelTable::builtin().unwrap();
        let world = at(1);
        assert_eq!(
            resolve(&table, &world, Motion::EAST, &mut rng()),
            TravelOutcome::Go(LocationId::BUILDING)
        );
        assert_eq!(
            resolve(&table, &world, Motion::DEPRESSION, &mut rng()),
            TravelOutcome::Go(LocationId::OUTSIDE_GRATE)
        );
    }

    #[test]
    fn unmatched_motions_are_blocked_by_kind() {
        let table = TravelTable::builtin().unwrap();
        let world = at(3);
        assert_eq!(
            resolve(&table, &world, Motion::NORTH, &mut rng()),
            TravelOutcome::Blocked(9)
        );
        assert_eq!(
            resolve(&table, &world, Motion::FORWARD, &mut rng()),
            TravelOutcome::Blocked(10)
        );
        assert_eq!(
            resolve(&table, &world, Motion::IN, &mut rng()),
            TravelOutcome::Blocked(11)
        );
        assert_eq!(
            resolve(&table, &world, Motion::CRAWL, &mut rng()),
            TravelOutcome::Blocked(80)
        );
        assert_eq!(blocked_message(Motion::PLUGH), 42);
        assert_eq!(blocked_message(Motion::CAVE), 12);
    }

    #[test]
    fn locked_grate_falls_through_to_message() {
        let table = TravelTable::builtin().unwrap();
        let mut world = at(8);
        assert_eq!(
            resolve(&table, &world, Motion::DOWN, &mut rng()),
            TravelOutcome::Blocked(93)
        );
        world.set_state(GrateState::Open);
        assert_eq!(
            resolve(&table, &world, Motion::DOWN, &mut rng()),
            TravelOutcome::Go(LocationId::BELOW_GRATE)
        );
    }

    #[test]
    fn carrying_the_nugget_up_the_pit() {
        let table = TravelTable::builtin().unwrap();
        let mut world = at(14);
        assert_eq!(
            resolve(&table, &world, Motion::DOWN, &mut rng()),
            TravelOutcome::Go(LocationId::HALL_OF_MISTS)
        );
        world.carry(ObjectId::NUGGET);
        assert_eq!(
            resolve(&table, &world, Motion::DOWN, &mut rng()),
            TravelOutcome::Go(loc(20))
        );
    }

    #[test]
    fn forest_chance_reaches_one_of_two_places() {
        let table = TravelTable::builtin().unwrap();
        let world = at(5);
        let mut seen = std::collections::BTreeSet::new();
        let mut rng = rng();
        for _ in 0..50 {
            match resolve(&table, &world, Motion::NORTH, &mut rng) {
                TravelOutcome::Go(dest) => {
                    seen.insert(dest.raw());
                }
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), [5, 6]);
    }
}
