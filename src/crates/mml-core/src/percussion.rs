/// Absolute note number to percussion identifier of the target player.
/// Covers octaves 1-3 of the drum voices; 27 and 46 have no sound and are
/// left out. Sorted by key.
const PERCUSSION_MAP: [(u32, u32); 23] = [
    (23, 53),
    (24, 53),
    (25, 60),
    (26, 57),
    (28, 57),
    (29, 55),
    (30, 69),
    (31, 64),
    (32, 71),
    (33, 55),
    (34, 67),
    (35, 64),
    (36, 65),
    (37, 72),
    (38, 65),
    (39, 76),
    (40, 72),
    (41, 77),
    (42, 74),
    (43, 72),
    (44, 60),
    (45, 72),
    (47, 76),
];

/// Percussion identifier for an absolute note number, if it has one
pub fn percussion_for(note: u64) -> Option<u32> {
    let note = u32::try_from(note).ok()?;
    PERCUSSION_MAP
        .binary_search_by_key(&note, |&(key, _)| key)
        .ok()
        .map(|idx| PERCUSSION_MAP[idx].1)
}

/// All `(note, percussion)` pairs in ascending note order
pub fn entries() -> impl Iterator<Item = (u32, u32)> {
    PERCUSSION_MAP.iter().copied()
}
