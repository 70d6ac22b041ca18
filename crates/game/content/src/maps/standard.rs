//! The classic cave: rooms on the vertices of a dodecahedron.

use wumpus_core::{CaveMap, CaveMapError};

pub(super) const NAME: &str = "standard";

#[rustfmt::skip]
const TUNNELS: [&[u32]; 20] = [
    &[2, 5, 8],   &[1, 3, 10],  &[2, 4, 12],  &[3, 5, 14],
    &[1, 4, 6],   &[5, 7, 15],  &[6, 8, 17],  &[1, 7, 9],
    &[8, 10, 18], &[2, 9, 11],  &[10, 12, 19], &[3, 11, 13],
    &[12, 14, 20], &[4, 13, 15], &[6, 14, 16], &[15, 17, 20],
    &[7, 16, 18], &[9, 17, 19], &[11, 18, 20], &[13, 16, 19],
];

pub(super) fn build() -> Result<CaveMap, CaveMapError> {
    CaveMap::from_display_table(NAME, &TUNNELS)
}
