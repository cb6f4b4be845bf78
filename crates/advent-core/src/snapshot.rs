//! Save-file encoding.
//!
//! A save is a MessagePack document holding a magic tag, a format version and
//! an ordered list of sections. Sections must appear in [`SECTION_ORDER`].

use serde::{Deserialize, Serialize};

use crate::dwarf::DWARFMAX;
use crate::error::{CoreError, CoreResult};
use crate::location::{ConditionBits, LocationId, MAXLOC};
use crate::object::{Fixed, MAXOBJ, ObjectId, Place};
use crate::world::{KnifeHint, WorldState};

/// Tag at the start of every save.
pub const MAGIC: &str = "colossal-cave";

/// Current save format version.
pub const FORMAT_VERSION: u16 = 1;

/// Names of the sections, in the order they must appear.
pub const SECTION_ORDER: [&str; 9] = [
    "locations",
    "conditions",
    "placements",
    "fixed_placements",
    "visited",
    "properties",
    "counters",
    "dwarves",
    "endgame",
];

#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    magic: String,
    version: u16,
    sections: Vec<Section>,
}

#[derive(Debug, Serialize, Deserialize)]
enum Section {
    Locations {
        turns: u32,
        loc: u8,
        oldloc: u8,
        oldloc2: u8,
        newloc: u8,
    },
    Conditions(Vec<u8>),
    Placements(Vec<i16>),
    FixedPlacements(Vec<i16>),
    Visited(Vec<u16>),
    Properties(Vec<i8>),
    Counters {
        tally: u16,
        tally2: u16,
        limit: i32,
        lamp_warned: bool,
        was_dark: bool,
        closing: bool,
        closed: bool,
        holding: u32,
        detail: u32,
        knife: i16,
        clock1: i32,
        clock2: i32,
        panic: bool,
    },
    Dwarves {
        dloc: Vec<u8>,
        dflag: u8,
        dseen: Vec<bool>,
        odloc: Vec<u8>,
    },
    Endgame {
        daltloc: u8,
        dkill: u16,
        chloc: u8,
        chloc2: u8,
        bonus: u16,
        numdie: u8,
        object1: u8,
        gave_up: bool,
        foobar: i8,
    },
}

impl Section {
    fn name(&self) -> &'static str {
        match self {
            Self::Locations { .. } => SECTION_ORDER[0],
            Self::Conditions(_) => SECTION_ORDER[1],
            Self::Placements(_) => SECTION_ORDER[2],
            Self::FixedPlacements(_) => SECTION_ORDER[3],
            Self::Visited(_) => SECTION_ORDER[4],
            Self::Properties(_) => SECTION_ORDER[5],
            Self::Counters { .. } => SECTION_ORDER[6],
            Self::Dwarves { .. } => SECTION_ORDER[7],
            Self::Endgame { .. } => SECTION_ORDER[8],
        }
    }
}

/// Encode the world as a save file.
pub fn serialize(world: &WorldState) -> CoreResult<Vec<u8>> {
    let sections = vec![
        Section::Locations {
            turns: world.turns,
            loc: world.loc.raw(),
            oldloc: world.oldloc.raw(),
            oldloc2: world.oldloc2.raw(),
            newloc: world.newloc.raw(),
        },
        Section::Conditions(world.cond.iter().map(|c| c.bits()).collect()),
        Section::Placements(world.place.iter().map(|p| p.to_raw()).collect()),
        Section::FixedPlacements(world.fixed.iter().map(|f| f.to_raw()).collect()),
        Section::Visited(world.visited.clone()),
        Section::Properties(world.prop.clone()),
        Section::Counters {
            tally: world.tally,
            tally2: world.tally2,
            limit: world.limit,
            lamp_warned: world.lamp_warned,
            was_dark: world.was_dark,
            closing: world.closing,
            closed: world.closed,
            holding: world.holding,
            detail: world.detail,
            knife: world.knife.to_raw(),
            clock1: world.clock1,
            clock2: world.clock2,
            panic: world.panic,
        },
        Section::Dwarves {
            dloc: world.dwarves.iter().map(|d| d.location.raw()).collect(),
            dflag: world.dflag,
            dseen: world.dwarves.iter().map(|d| d.seen).collect(),
            odloc: world.dwarves.iter().map(|d| d.previous.raw()).collect(),
        },
        Section::Endgame {
            daltloc: world.daltloc.raw(),
            dkill: world.dkill,
            chloc: world.chloc.raw(),
            chloc2: world.chloc2.raw(),
            bonus: world.bonus,
            numdie: world.numdie,
            object1: world.object1.map_or(0, ObjectId::raw),
            gave_up: world.gave_up,
            foobar: world.foobar,
        },
    ];

    let file = SaveFile {
        magic: MAGIC.to_string(),
        version: FORMAT_VERSION,
        sections,
    };
    Ok(rmp_serde::to_vec_named(&file)?)
}

/// Decode a save file, validating section order, lengths and ranges.
pub fn deserialize(bytes: &[u8]) -> CoreResult<WorldState> {
    let file: SaveFile = rmp_serde::from_slice(bytes)?;
    if file.magic != MAGIC {
        return Err(CoreError::Format(format!("bad magic tag {:?}", file.magic)));
    }
    if file.version != FORMAT_VERSION {
        return Err(CoreError::UnsupportedVersion(file.version));
    }
    if file.sections.len() > SECTION_ORDER.len() {
        return Err(CoreError::Format(format!(
            "expected {} sections, found {}",
            SECTION_ORDER.len(),
            file.sections.len()
        )));
    }
    for (&expected, section) in SECTION_ORDER.iter().zip(&file.sections) {
        if section.name() != expected {
            return Err(CoreError::FieldOrder {
                expected,
                found: section.name(),
            });
        }
    }
    if let Some(missing) = SECTION_ORDER.get(file.sections.len()) {
        return Err(CoreError::Format(format!("missing section {missing}")));
    }

    let mut world = WorldState::new();
    for section in file.sections {
        apply(&mut world, section)?;
    }

    let carried = ObjectId::all()
        .filter(|&o| world.toting(o) && !o.is_liquid())
        .count() as u32;
    if carried != world.holding {
        return Err(CoreError::Format(format!(
            "holding count {} does not match {carried} carried objects",
            world.holding
        )));
    }
    Ok(world)
}

fn apply(world: &mut WorldState, section: Section) -> CoreResult<()> {
    match section {
        Section::Locations {
            turns,
            loc,
            oldloc,
            oldloc2,
            newloc,
        } => {
            world.turns = turns;
            world.loc = location(loc)?;
            world.oldloc = location(oldloc)?;
            world.oldloc2 = location(oldloc2)?;
            world.newloc = location(newloc)?;
        }
        Section::Conditions(bits) => {
            check_len("conditions", bits.len(), MAXLOC)?;
            world.cond = bits.into_iter().map(ConditionBits::from_bits).collect();
        }
        Section::Placements(raw) => {
            check_len("placements", raw.len(), MAXOBJ)?;
            world.place = raw
                .into_iter()
                .map(Place::from_raw)
                .collect::<CoreResult<_>>()?;
        }
        Section::FixedPlacements(raw) => {
            check_len("fixed_placements", raw.len(), MAXOBJ)?;
            world.fixed = raw
                .into_iter()
                .map(Fixed::from_raw)
                .collect::<CoreResult<_>>()?;
        }
        Section::Visited(visited) => {
            check_len("visited", visited.len(), MAXLOC)?;
            world.visited = visited;
        }
        Section::Properties(prop) => {
            check_len("properties", prop.len(), MAXOBJ)?;
            world.prop = prop;
        }
        Section::Counters {
            tally,
            tally2,
            limit,
            lamp_warned,
            was_dark,
            closing,
            closed,
            holding,
            detail,
            knife,
            clock1,
            clock2,
            panic,
        } => {
            world.tally = tally;
            world.tally2 = tally2;
            world.limit = limit;
            world.lamp_warned = lamp_warned;
            world.was_dark = was_dark;
            world.closing = closing;
            world.closed = closed;
            world.holding = holding;
            world.detail = detail;
            world.knife = KnifeHint::from_raw(knife)?;
            world.clock1 = clock1;
            world.clock2 = clock2;
            world.panic = panic;
        }
        Section::Dwarves {
            dloc,
            dflag,
            dseen,
            odloc,
        } => {
            check_len("dloc", dloc.len(), DWARFMAX)?;
            check_len("dseen", dseen.len(), DWARFMAX)?;
            check_len("odloc", odloc.len(), DWARFMAX)?;
            for (i, dwarf) in world.dwarves.iter_mut().enumerate() {
                dwarf.location = location(dloc[i])?;
                dwarf.previous = location(odloc[i])?;
                dwarf.seen = dseen[i];
            }
            world.dflag = dflag;
        }
        Section::Endgame {
            daltloc,
            dkill,
            chloc,
            chloc2,
            bonus,
            numdie,
            object1,
            gave_up,
            foobar,
        } => {
            world.daltloc = location(daltloc)?;
            world.dkill = dkill;
            world.chloc = location(chloc)?;
            world.chloc2 = location(chloc2)?;
            world.bonus = bonus;
            world.numdie = numdie;
            world.object1 = match object1 {
                0 => None,
                raw => Some(ObjectId::new(i32::from(raw))?),
            };
            world.gave_up = gave_up;
            world.foobar = foobar;
        }
    }
    Ok(())
}

fn location(raw: u8) -> CoreResult<LocationId> {
    LocationId::new(i32::from(raw))
}

fn check_len(name: &str, found: usize, expected: usize) -> CoreResult<()> {
    if found == expected {
        Ok(())
    } else {
        Err(CoreError::Format(format!(
            "{name} has {found} entries, expected {expected}"
        )))
    }
}
