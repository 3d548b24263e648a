//! Baked coordinates and topology of the base icosahedron.
//!
//! Construction: two vertices sit at the poles, `(0, ±1, 0)`; the remaining
//! ten form two rings at `y = ±1/√5`, radius `2/√5`, spaced 72° apart and
//! offset 36° between rings. This is the same regular icosahedron any other
//! construction yields, just oriented so +y is the North pole, matching
//! [`crate::geometry::LatLng`]'s convention.

use crate::geometry::Vec3;

/// The 12 icosahedron vertices, indexed 0 (North pole) through 11 (South
/// pole), already unit length.
pub const VERTICES: [Vec3; 12] = [
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.894_427_190_999_916, 0.447_213_595_499_958, 0.0),
    Vec3::new(
        0.276_393_202_250_021_1,
        0.447_213_595_499_958,
        0.850_650_808_352_04,
    ),
    Vec3::new(
        -0.723_606_797_749_978_9,
        0.447_213_595_499_958,
        0.525_731_112_119_133_8,
    ),
    Vec3::new(
        -0.723_606_797_749_979,
        0.447_213_595_499_957_9,
        -0.525_731_112_119_133_5,
    ),
    Vec3::new(
        0.276_393_202_250_020_84,
        0.447_213_595_499_957_9,
        -0.850_650_808_352_04,
    ),
    Vec3::new(
        0.723_606_797_749_979,
        -0.447_213_595_499_958,
        0.525_731_112_119_133_7,
    ),
    Vec3::new(
        -0.276_393_202_250_021,
        -0.447_213_595_499_957_9,
        0.850_650_808_352_04,
    ),
    Vec3::new(
        -0.894_427_190_999_916,
        -0.447_213_595_499_958,
        1.095_357_396_528_405_4e-16,
    ),
    Vec3::new(
        -0.276_393_202_250_021_2,
        -0.447_213_595_499_958,
        -0.850_650_808_352_04,
    ),
    Vec3::new(
        0.723_606_797_749_978_8,
        -0.447_213_595_499_957_9,
        -0.525_731_112_119_133_8,
    ),
    Vec3::new(0.0, -1.0, 0.0),
];

/// The 20 faces, as CCW (outward-facing) vertex index triples. The first
/// index of each triple is the face's apex.
pub const FACES: [[u8; 3]; 20] = [
    [0, 2, 1],
    [0, 3, 2],
    [0, 4, 3],
    [0, 5, 4],
    [0, 1, 5],
    [6, 1, 2],
    [2, 7, 6],
    [7, 2, 3],
    [3, 8, 7],
    [8, 3, 4],
    [4, 9, 8],
    [9, 4, 5],
    [5, 10, 9],
    [10, 5, 1],
    [1, 6, 10],
    [11, 6, 7],
    [11, 7, 8],
    [11, 8, 9],
    [11, 9, 10],
    [11, 10, 6],
];

/// For face `f`, edge `e`: `(neighbor_face, neighbor_edge)`.
///
/// `neighbor_edge` is the edge the neighbor would use to step back to `f`.
pub const NEIGHBORS: [[(u8, u8); 3]; 20] = [
    [(5, 0), (4, 2), (1, 1)],
    [(7, 0), (0, 2), (2, 1)],
    [(9, 0), (1, 2), (3, 1)],
    [(11, 0), (2, 2), (4, 1)],
    [(13, 0), (3, 2), (0, 1)],
    [(0, 0), (6, 1), (14, 2)],
    [(15, 0), (5, 1), (7, 2)],
    [(1, 0), (8, 1), (6, 2)],
    [(16, 0), (7, 1), (9, 2)],
    [(2, 0), (10, 1), (8, 2)],
    [(17, 0), (9, 1), (11, 2)],
    [(3, 0), (12, 1), (10, 2)],
    [(18, 0), (11, 1), (13, 2)],
    [(4, 0), (14, 1), (12, 2)],
    [(19, 0), (13, 1), (5, 2)],
    [(6, 0), (16, 2), (19, 1)],
    [(8, 0), (17, 2), (15, 1)],
    [(10, 0), (18, 2), (16, 1)],
    [(12, 0), (19, 2), (17, 1)],
    [(14, 0), (15, 2), (18, 1)],
];

/// Whether face `f`'s apex points South (i.e. its apex's `y` is below the
/// average `y` of its other two vertices).
pub const IS_SOUTH: [bool; 20] = [
    false, false, false, false, false, true, false, true, false, true, false,
    true, false, true, false, true, true, true, true, true,
];
