//! The neighbor-finding traversal: given a face and one of its edges,
//! which face lies across it, and which edge would it use to step back.
//!
//! The descent scans inward from the deepest digit of the path looking for
//! the first digit that is either the center child (`3`) or the edge
//! itself — that digit marks where the neighbor relationship "attaches".
//! Everything shallower than that digit is unaffected by the hop and
//! carries over unchanged; everything deeper gets recomputed through the
//! same local step rule, which turns out to depend only on that digit,
//! the fixed `edge`, and a single polarity-agreement flag established at
//! the attach point — not on any state that accumulates level by level.

use super::face_index::FaceIndex;
use super::path::set_digit;
use crate::base;

/// The local step rule, excluding the center-child case (handled directly
/// by the caller).
///
/// Returns `(nbr_is_south, nbr_pos, nbr_return_edge)`.
fn neighbor_of(
    is_south: bool,
    pos: u8,
    edge: u8,
    copolar: bool,
) -> (bool, u8, u8) {
    match edge {
        0 => (!is_south, if pos == 1 { 2 } else { 1 }, 0),
        1 if copolar => (is_south, if pos == 0 { 0 } else { 1 }, 2),
        1 => (!is_south, if pos == 0 { 2 } else { 0 }, 1),
        2 if copolar => (is_south, if pos == 0 { 0 } else { 2 }, 1),
        2 => (!is_south, if pos == 0 { 1 } else { 0 }, 2),
        _ => unreachable!("edge must be 0, 1, or 2"),
    }
}

/// Finds the neighbor of `face` across `edge` (already validated to be
/// `0..=2` by the caller), plus the edge the neighbor would use to return.
pub(super) fn find_neighbor(face: FaceIndex, edge: u8) -> (FaceIndex, u8) {
    let orig_lod = face.lod();
    let is_south = face.is_south();

    if orig_lod == 0 {
        let (nbr_d20, _) = base::raw_neighbor(face.d20(), edge);
        let nbr_is_south = base::base_polarity(nbr_d20);
        let (_, _, nbr_edge) =
            neighbor_of(is_south, 0, edge, is_south == nbr_is_south);
        let nbr = FaceIndex::with_polarity(0, nbr_d20, 0, nbr_is_south)
            .expect("base neighbor d20 is always in range");
        return (nbr, nbr_edge);
    }

    // Descend from the deepest digit, looking for the attach point.
    let mut attach = None;
    for l in (1..=orig_lod).rev() {
        let pos = face.digit(l);
        if pos == 3 {
            attach = Some((l, edge));
            break;
        }
        if pos == edge {
            attach = Some((l, 3));
            break;
        }
    }

    let (attach_level, attach_digit, nbr_is_south, stop_edge, d20) =
        match attach {
            Some((l, digit)) => (l, digit, !is_south, edge, face.d20()),
            None => {
                // The hop reached the base icosahedron: cross there instead.
                let (nbr_d20, _) = base::raw_neighbor(face.d20(), edge);
                let base_is_south = base::base_polarity(nbr_d20);
                let copolar = base_is_south == is_south;
                let (_, digit, stop_edge) =
                    neighbor_of(is_south, face.digit(1), edge, copolar);
                (1, digit, base_is_south, stop_edge, nbr_d20)
            }
        };

    // Levels shallower than the attach point carry over unchanged, so start
    // from the original path and only overwrite the digits that change.
    let copolar = nbr_is_south == is_south;
    let mut nbr_path = set_digit(face.path(), attach_level, attach_digit);
    for l in attach_level + 1..=orig_lod {
        let digit = neighbor_of(is_south, face.digit(l), edge, copolar).1;
        nbr_path = set_digit(nbr_path, l, digit);
    }

    let nbr = FaceIndex::with_polarity(orig_lod, d20, nbr_path, nbr_is_south)
        .expect("orig_lod and d20 are already validated");

    (nbr, stop_edge)
}
