//! The bundled cave map.
//!
//! Each row is `(from, cond * 1000 + dest, motions)`. Rows for a location are
//! tried in order; a destination above 500 prints message `dest - 500`, and
//! destination 0 kills the player. Motion 1 matches anything.

/// Travel rows for the surface, the upper cave, the Hall of Mists, the Hall of
/// the Mountain King and the repository.
pub const TRAVEL: &[(u8, u32, &[u16])] = &[
    // End of road
    (1, 2, &[2, 44, 29]),
    (1, 3, &[3, 12, 19, 43]),
    (1, 4, &[5, 13, 14, 46, 30]),
    (1, 5, &[6, 45, 43]),
    (1, 8, &[63]),
    // Hill in road
    (2, 1, &[2, 12, 7, 43, 45, 30]),
    (2, 5, &[6, 45, 46]),
    // Inside building
    (3, 1, &[11, 32, 44]),
    (3, 11, &[62]),
    (3, 33, &[65]),
    (3, 79, &[5, 14]),
    // Valley
    (4, 1, &[2, 4, 12, 45]),
    (4, 5, &[6, 43, 44, 29]),
    (4, 7, &[5, 46, 30]),
    (4, 8, &[63]),
    // Forest
    (5, 4, &[9, 43, 30]),
    (5, 50005, &[6, 7, 45]),
    (5, 6, &[6]),
    (5, 5, &[44, 46]),
    // Forest, second patch
    (6, 1, &[2, 45]),
    (6, 4, &[9, 43, 44, 30]),
    (6, 5, &[6, 46]),
    // Slit in streambed
    (7, 1, &[12]),
    (7, 4, &[4, 45]),
    (7, 5, &[6, 43, 44]),
    (7, 8, &[5, 15, 16, 46]),
    (7, 595, &[60, 14, 30]),
    // Outside grate
    (8, 5, &[6, 43, 44, 46]),
    (8, 1, &[12]),
    (8, 7, &[4, 13, 45]),
    (8, 303009, &[3, 19, 30]),
    (8, 593, &[3]),
    // Below the grate
    (9, 303008, &[11, 29]),
    (9, 593, &[11]),
    (9, 10, &[17, 18, 19, 44]),
    (9, 14, &[31]),
    (9, 11, &[51]),
    // Cobble crawl
    (10, 9, &[11, 20, 43]),
    (10, 11, &[19, 22, 44, 51]),
    (10, 14, &[31]),
    // Debris room
    (11, 303008, &[63]),
    (11, 9, &[64]),
    (11, 10, &[17, 18, 23, 24, 43]),
    (11, 12, &[25, 19, 29, 44]),
    (11, 3, &[62]),
    (11, 14, &[31]),
    // Awkward canyon
    (12, 303008, &[63]),
    (12, 9, &[64]),
    (12, 11, &[30, 43, 51]),
    (12, 13, &[19, 29, 44]),
    (12, 14, &[31]),
    // Bird chamber
    (13, 303008, &[63]),
    (13, 9, &[64]),
    (13, 11, &[51]),
    (13, 12, &[25, 43]),
    (13, 14, &[23, 31, 44]),
    // Top of small pit
    (14, 303008, &[63]),
    (14, 9, &[64]),
    (14, 11, &[51]),
    (14, 13, &[23, 43]),
    (14, 150020, &[30, 31, 34]),
    (14, 15, &[30]),
    (14, 16, &[33, 44]),
    // Hall of Mists
    (15, 18, &[36, 46]),
    (15, 17, &[7, 38, 44]),
    (15, 19, &[10, 30, 45]),
    (15, 150022, &[29, 31, 34, 35, 23, 43]),
    (15, 14, &[29]),
    (15, 34, &[55]),
    // Crack too small
    (16, 14, &[1]),
    // East bank of fissure
    (17, 15, &[38, 43]),
    (17, 312596, &[39]),
    (17, 412021, &[7]),
    (17, 412597, &[41, 42, 44, 69]),
    (17, 27, &[41]),
    // Nugget room
    (18, 15, &[38, 11, 45]),
    // Hall of the Mountain King
    (19, 15, &[10, 29, 43]),
    (19, 311028, &[45, 36]),
    (19, 311029, &[46, 37]),
    (19, 311030, &[44, 7]),
    (19, 32, &[45]),
    // Broken neck and fissure deaths
    (20, 0, &[1]),
    (21, 0, &[1]),
    // Dome unclimbable
    (22, 15, &[1]),
    // West side of fissure
    (27, 312596, &[39]),
    (27, 412021, &[7]),
    (27, 412597, &[41, 42, 43, 69]),
    (27, 17, &[41]),
    // Low N/S passage
    (28, 19, &[38, 11, 46]),
    (28, 33, &[45, 55]),
    (28, 36, &[30, 52]),
    // South side chamber
    (29, 19, &[38, 11, 45]),
    // West side chamber
    (30, 19, &[38, 11, 43]),
    // Snake blocks the way
    (32, 19, &[1]),
    // Y2
    (33, 3, &[65]),
    (33, 28, &[46]),
    (33, 34, &[43, 53, 54]),
    (33, 35, &[44]),
    // Jumble of rock
    (34, 33, &[30, 55]),
    (34, 15, &[29]),
    // Window on pit
    (35, 33, &[43, 55]),
    (35, 20, &[39]),
    // Dirty passage
    (36, 28, &[29, 52]),
    // Stream into the building
    (79, 3, &[1]),
    // Repository
    (115, 116, &[49]),
    (116, 115, &[47]),
    (116, 593, &[30]),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::location::LocationId;
    use crate::travel::{Destination, TravelTable};

    #[test]
    fn builtin_table_decodes() {
        assert!(TravelTable::builtin().is_ok());
    }

    #[test]
    fn every_destination_has_its_own_edges() {
        let table = TravelTable::builtin().unwrap();
        let sources: BTreeSet<_> = table.locations().collect();
        for from in &sources {
            for edge in table.edges(*from) {
                if let Destination::Location(to) = edge.destination {
                    if to.is_nowhere() {
                        continue;
                    }
                    assert!(sources.contains(&to), "{from} leads to {to}, which has no edges");
                }
            }
        }
    }

    #[test]
    fn road_connects_to_building() {
        let table = TravelTable::builtin().unwrap();
        let reaches_building = table.edges(LocationId::ROAD).iter().any(|edge| {
            edge.destination == Destination::Location(LocationId::BUILDING)
        });
        assert!(reaches_building);
    }
}
