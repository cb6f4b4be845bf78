//! Initial placement of objects and location conditions.
//!
//! Each table is a list of runs: a starting index followed by consecutive
//! values. Indices not covered by any run start at zero.

/// Location condition bits.
pub const CONDITIONS: &[(usize, &[i16])] = &[
    (1, &[5, 1, 5, 5, 1, 1, 5, 17, 1, 1]),
    (13, &[32, 0, 0, 2, 0, 0, 64, 2]),
    (21, &[2, 2, 0, 6, 0, 2]),
    (31, &[2, 2, 0, 0, 0, 0, 0, 4, 0, 2]),
    (42, &[128, 128, 128, 128, 136, 136, 136, 128, 128]),
    (51, &[128, 128, 136, 128, 136, 0, 8, 0, 2]),
    (79, &[2, 128, 128, 136, 0, 0, 8, 136, 128, 0, 2, 2]),
    (95, &[4, 0, 0, 0, 0, 1]),
    (113, &[4, 0, 1, 1]),
    (122, &[8, 8, 8, 8, 8, 8, 8, 8, 8]),
];

/// Where each object starts.
pub const PLACES: &[(usize, &[i16])] = &[
    (1, &[3, 3, 8, 10, 11, 0, 14, 13, 94, 96]),
    (11, &[19, 17, 101, 103, 0, 106, 0, 0, 3, 3]),
    (23, &[109, 25, 23, 111, 35, 0, 97]),
    (31, &[119, 117, 117, 0, 130, 0, 126, 140, 0, 96]),
    (50, &[18, 27, 28, 29, 30]),
    (56, &[92, 95, 97, 100, 101, 0, 119, 127, 130]),
];

/// Second locations of scenery, `-1` for immovable objects.
pub const FIXED: &[(usize, &[i16])] = &[
    (3, &[9, 0, 0, 0, 15, 0, -1]),
    (11, &[-1, 27, -1, 0, 0, 0, -1]),
    (23, &[-1, -1, 67, -1, 110, 0, -1, -1]),
    (31, &[121, 122, 122, 0, -1, -1, -1, -1, 0, -1]),
    (62, &[121, 0, -1]),
];

/// Lamp turns granted before the instructions question is answered.
pub const INITIAL_LIMIT: i32 = 100;

/// Treasures that have never been seen.
pub const INITIAL_TALLY: u16 = 15;

/// Turns left on the first closing clock once every treasure is found.
pub const INITIAL_CLOCK1: i32 = 30;

/// Turns between the closing warning and the repository.
pub const INITIAL_CLOCK2: i32 = 50;

/// Expand a run table into a dense array of `len` entries.
pub fn expand(runs: &[(usize, &[i16])], len: usize) -> Vec<i16> {
    let mut out = vec![0; len];
    for (start, values) in runs {
        for (offset, value) in values.iter().enumerate() {
            if let Some(slot) = out.get_mut(start + offset) {
                *slot = *value;
            }
        }
    }
    out
}
