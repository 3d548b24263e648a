//! The canonical base icosahedron: 12 vertices, 20 CCW faces, and the
//! 20×3 neighbor table every subdivided triangle ultimately bottoms out on.
//!
//! [`raw`] holds the numbers this crate ships with, baked in as constants.
//! [`builder`] independently re-derives them from first principles (vertex
//! construction, CCW assertion, reversed-edge neighbor matching); its tests
//! assert the two agree, and `tools/generate_canonical_table` runs it to
//! print a fresh copy of [`raw`]'s tables for diffing.

pub mod builder;
pub mod raw;

pub use raw::{FACES, IS_SOUTH, NEIGHBORS, VERTICES};

/// Number of base icosahedron faces.
pub const NUM_D20_FACES: u8 = 20;

/// Number of base icosahedron vertices.
pub const NUM_D20_VERTICES: u8 = 12;

/// Whether base face `d20` points South.
///
/// # Panics
///
/// Panics if `d20 >= 20`; callers are expected to have already validated the
/// base face index (see [`crate::error::InvalidD20`]).
#[must_use]
pub const fn base_polarity(d20: u8) -> bool {
    IS_SOUTH[d20 as usize]
}

/// Returns `(neighbor_d20, neighbor_edge)` for base face `d20` across
/// `edge`.
///
/// # Panics
///
/// Panics if `d20 >= 20` or `edge >= 3`.
#[must_use]
pub const fn raw_neighbor(d20: u8, edge: u8) -> (u8, u8) {
    NEIGHBORS[d20 as usize][edge as usize]
}
