//! Death, endings and scoring.

use std::fmt;

use advent_core::{LampState, LocationId, ObjectId, Place, WorldState};
use serde::Serialize;

use crate::narrator::Transcript;

/// Lives available before the game gives up on the player.
pub const MAXDIE: u8 = 3;

/// Best possible score.
pub const MAX_SCORE: u32 = 350;

/// How a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ending {
    /// Score and stop.
    Normal,
    /// The dwarves were woken in the repository.
    Dwarf,
}

/// Chooses the result of blasting in the closed cave.
pub trait EndingRule: fmt::Debug {
    /// Message, and bonus code, for the blast.
    fn blast_bonus(&self, world: &WorldState) -> u16;
}

/// The classic blast outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlastEnding;

impl EndingRule for BlastEnding {
    fn blast_bonus(&self, world: &WorldState) -> u16 {
        if world.here(ObjectId::ROD2) {
            135
        } else if world.loc == LocationId::REPOSITORY_NE {
            134
        } else {
            133
        }
    }
}

/// Points earned so far, by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCard {
    /// Treasures found and deposited.
    pub treasures: u32,
    /// Unused lives.
    pub survival: u32,
    /// Getting far enough to wake the dwarves.
    pub well_in: u32,
    /// Reaching the closing of the cave.
    pub masters: u32,
    /// Closed-cave bonus.
    pub bonus: u32,
    /// Everything, including points with no line of their own.
    pub total: u32,
}

impl ScoreCard {
    /// Tally the score for a world.
    pub fn of(world: &WorldState) -> Self {
        let mut card = Self::default();

        for obj in ObjectId::treasures() {
            let deposit = if obj == ObjectId::CHEST {
                14
            } else if obj > ObjectId::CHEST {
                16
            } else {
                12
            };
            let prop = world.property(obj);
            if prop >= 0 {
                card.treasures += 2;
            }
            if world.place(obj) == Place::At(LocationId::BUILDING) && prop == 0 {
                card.treasures += deposit - 2;
            }
        }

        card.survival = u32::from(MAXDIE.saturating_sub(world.numdie)) * 10;
        if world.dflag != 0 {
            card.well_in = 25;
        }
        if world.closing {
            card.masters = 25;
        }
        if world.closed {
            card.bonus = match world.bonus {
                135 => 25,
                134 => 30,
                133 => 45,
                _ => 10,
            };
        }

        card.total = card.treasures + card.survival + card.well_in + card.masters + card.bonus;
        if !world.gave_up {
            card.total += 4;
        }
        if world.place(ObjectId::MAGAZINE) == Place::At(LocationId::WITTS_END) {
            card.total += 1;
        }
        card.total += 2;
        card
    }

    /// Print the score, one line per category that earned anything.
    pub fn report(&self, out: &mut Transcript) {
        out.text(line("Treasures:", self.treasures));
        for (label, points) in [
            ("Survival:", self.survival),
            ("Getting well in:", self.well_in),
            ("Masters section:", self.masters),
            ("Bonus:", self.bonus),
        ] {
            if points != 0 {
                out.text(line(label, points));
            }
        }
        out.text(line("Score:", self.total));
        out.text(format!(
            "You scored {} out of a possible {MAX_SCORE}.",
            self.total
        ));
    }
}

fn line(label: &str, points: u32) -> String {
    format!("{label:<20}{points}")
}

/// Bring the player back to the building.
///
/// Liquids vanish, the lamp goes out and returns to the road, and everything
/// else carried is left where the player died.
pub fn reincarnate(world: &mut WorldState) {
    world.destroy(ObjectId::WATER);
    world.destroy(ObjectId::OIL);
    if world.toting(ObjectId::LAMP) {
        world.set_state(LampState::Off);
    }
    for obj in ObjectId::all().rev() {
        if !world.toting(obj) {
            continue;
        }
        let spot = if obj == ObjectId::LAMP {
            LocationId::ROAD
        } else {
            world.oldloc2
        };
        world.drop(obj, spot);
    }
    world.newloc = LocationId::BUILDING;
    world.oldloc = world.loc;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::BuiltinMessages;

    #[test]
    fn fresh_game_scores_the_basics() {
        let world = WorldState::new();
        let card = ScoreCard::of(&world);
        assert_eq!(card.treasures, 0);
        assert_eq!(card.survival, 30);
        assert_eq!(card.total, 36);
    }

    #[test]
    fn deposited_treasure() {
        let mut world = WorldState::new();
        world.set_property(ObjectId::NUGGET, 0);
        world.drop(ObjectId::NUGGET, LocationId::BUILDING);
        world.set_property(ObjectId::PEARL, 0);
        assert_eq!(ScoreCard::of(&world).treasures, 12 + 2);

        world.drop(ObjectId::PEARL, LocationId::BUILDING);
        assert_eq!(ScoreCard::of(&world).treasures, 12 + 16);
    }

    #[test]
    fn quitting_costs_four() {
        let mut world = WorldState::new();
        let before = ScoreCard::of(&world).total;
        world.gave_up = true;
        assert_eq!(ScoreCard::of(&world).total, before - 4);
    }

    #[test]
    fn perfect_game_is_the_maximum() {
        let mut world = WorldState::new();
        for obj in ObjectId::treasures().filter(|o| *o <= ObjectId::CHAIN) {
            world.set_property(obj, 0);
            world.drop(obj, LocationId::BUILDING);
        }
        world.dflag = 3;
        world.closing = true;
        world.closed = true;
        world.bonus = 133;
        world.drop(ObjectId::MAGAZINE, LocationId::WITTS_END);
        assert_eq!(ScoreCard::of(&world).total, MAX_SCORE);
    }

    #[test]
    fn report_skips_empty_lines() {
        let world = WorldState::new();
        let mut out = Transcript::new();
        ScoreCard::of(&world).report(&mut out);
        let lines = out.render(&BuiltinMessages::new());
        assert_eq!(lines[0], "Treasures:          0");
        assert_eq!(lines[1], "Survival:           30");
        assert_eq!(lines[2], "Score:              36");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn blast_outcomes() {
        let mut world = WorldState::new();
        world.loc = LocationId::REPOSITORY_SW;
        assert_eq!(BlastEnding.blast_bonus(&world), 133);
        world.loc = LocationId::REPOSITORY_NE;
        assert_eq!(BlastEnding.blast_bonus(&world), 134);
        world.carry(ObjectId::ROD2);
        assert_eq!(BlastEnding.blast_bonus(&world), 135);
    }

    #[test]
    fn reincarnation_scatters_belongings() {
        let mut world = WorldState::new();
        world.loc = LocationId::new(35).unwrap();
        world.oldloc2 = LocationId::Y2;
        world.carry(ObjectId::LAMP);
        world.set_state(LampState::On);
        world.carry(ObjectId::KEYS);
        world.carry(ObjectId::BOTTLE);
        world.move_object(ObjectId::WATER, Place::Carried);

        reincarnate(&mut world);

        assert_eq!(world.place(ObjectId::LAMP), Place::At(LocationId::ROAD));
        assert_eq!(world.state::<LampState>(), LampState::Off);
        assert_eq!(world.place(ObjectId::KEYS), Place::At(LocationId::Y2));
        assert_eq!(world.place(ObjectId::WATER), Place::Nowhere);
        assert_eq!(world.holding(), 0);
        assert_eq!(world.newloc, LocationId::BUILDING);
    }
}
