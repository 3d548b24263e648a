//! Re-derives the canonical base tables from raw vertex construction,
//! independently of the baked constants in [`super::raw`].
//!
//! This is the "one-shot script" of §4.1: given the icosahedron's defining
//! geometry, normalize the vertices, assert each face is CCW and its apex
//! correctly identified, compute polarity from apex latitude, and build the
//! neighbor table by matching each directed edge to its reverse on another
//! face. [`crate::base::raw`] is what you get by running this once and
//! writing the result down; `tools/generate_canonical_table` runs it again
//! so the baked copy can be checked for drift.

use crate::geometry::Vec3;
use std::f64::consts::TAU;

/// Un-normalized vertex positions, before [`normalize`].
///
/// Two vertices sit at the poles; the other ten form two rings of five at
/// `y = ±1/√5`, radius `2/√5`, each ring spaced 72° apart and offset 36°
/// from the other.
#[must_use]
pub fn raw_vertices() -> [Vec3; 12] {
    let y_ring = 1.0 / 5.0_f64.sqrt();
    let r_ring = 2.0 / 5.0_f64.sqrt();

    let mut verts = [Vec3::new(0.0, 0.0, 0.0); 12];
    verts[0] = Vec3::new(0.0, 1.0, 0.0);
    verts[11] = Vec3::new(0.0, -1.0, 0.0);

    for k in 0..5_u32 {
        let angle = TAU * f64::from(k) / 5.0;
        verts[1 + k as usize] =
            Vec3::new(r_ring * angle.cos(), y_ring, r_ring * angle.sin());
    }
    for k in 0..5_u32 {
        let angle = TAU * f64::from(k) / 5.0 + TAU / 10.0;
        verts[6 + k as usize] =
            Vec3::new(r_ring * angle.cos(), -y_ring, r_ring * angle.sin());
    }

    verts
}

/// Scales `v` to unit length.
#[must_use]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalized()
}

/// Whether the triangle `(a, b, c)` is CCW when viewed from outside the
/// sphere: the cross product of its first two edges must point the same
/// way as its centroid.
#[must_use]
pub fn is_ccw(a: Vec3, b: Vec3, c: Vec3) -> bool {
    let ab = Vec3::new(b.x - a.x, b.y - a.y, b.z - a.z);
    let ac = Vec3::new(c.x - a.x, c.y - a.y, c.z - a.z);
    let normal = ab.cross(ac);
    let centroid = a.centroid(b, c);

    normal.dot(centroid) > 0.0
}

/// Whether a face with apex `apex` and base vertices `v1`, `v2` points
/// South: the apex's latitude is below the average latitude of the other
/// two.
#[must_use]
pub fn is_south(apex: Vec3, v1: Vec3, v2: Vec3) -> bool {
    apex.y < (v1.y + v2.y) / 2.0
}

/// Re-derives `(vertices, polarities)` for [`super::raw::FACES`]' topology
/// from [`raw_vertices`].
///
/// # Panics
///
/// Panics if any face in [`super::raw::FACES`] is not CCW once its vertices
/// are normalized — that would mean the topology and the geometry have
/// drifted apart.
#[must_use]
pub fn build_canonical() -> ([Vec3; 12], [bool; 20]) {
    let raw = raw_vertices();
    let mut verts = [Vec3::new(0.0, 0.0, 0.0); 12];
    for (i, v) in raw.iter().enumerate() {
        verts[i] = normalize(*v);
    }

    let mut polarities = [false; 20];
    for (f, face) in super::raw::FACES.iter().enumerate() {
        let a = verts[face[0] as usize];
        let b = verts[face[1] as usize];
        let c = verts[face[2] as usize];
        assert!(is_ccw(a, b, c), "base face {f} is not CCW");
        polarities[f] = is_south(a, b, c);
    }

    (verts, polarities)
}

/// Re-derives the 20×3 neighbor table by matching each directed edge
/// `(a, b)` of a face to the face owning the reversed edge `(b, a)`.
///
/// # Panics
///
/// Panics if any directed edge has no owner of its reverse, which would
/// mean `faces` does not describe a closed, properly oriented mesh.
#[must_use]
pub fn build_neighbors(faces: &[[u8; 3]; 20]) -> [[(u8, u8); 3]; 20] {
    let edge_verts = |face: [u8; 3], e: u8| -> (u8, u8) {
        match e {
            0 => (face[1], face[2]),
            1 => (face[2], face[0]),
            2 => (face[0], face[1]),
            _ => unreachable!(),
        }
    };

    let mut owner = std::collections::HashMap::new();
    for (f, &face) in faces.iter().enumerate() {
        for e in 0..3_u8 {
            let (a, b) = edge_verts(face, e);
            owner.insert((a, b), (f as u8, e));
        }
    }

    let mut neighbors = [[(0_u8, 0_u8); 3]; 20];
    for (f, &face) in faces.iter().enumerate() {
        for e in 0..3_u8 {
            let (a, b) = edge_verts(face, e);
            let (nbr_face, nbr_edge) = *owner
                .get(&(b, a))
                .unwrap_or_else(|| panic!("edge ({a}, {b}) of face {f} has no neighbor"));
            neighbors[f][e as usize] = (nbr_face, nbr_edge);
        }
    }

    neighbors
}

#[cfg(test)]
mod tests {
    use super::{build_canonical, build_neighbors, is_ccw};
    use crate::base::raw;

    #[test]
    fn rebuilt_vertices_match_baked_constants() {
        let (verts, _) = build_canonical();
        for (i, (built, baked)) in
            verts.iter().zip(raw::VERTICES.iter()).enumerate()
        {
            assert!(
                (built.x - baked.x).abs() < 1e-9
                    && (built.y - baked.y).abs() < 1e-9
                    && (built.z - baked.z).abs() < 1e-9,
                "vertex {i} mismatch: {built:?} vs {baked:?}"
            );
        }
    }

    #[test]
    fn rebuilt_polarities_match_baked_constants() {
        let (_, polarities) = build_canonical();
        assert_eq!(polarities, raw::IS_SOUTH);
    }

    #[test]
    fn rebuilt_neighbors_match_baked_constants() {
        let neighbors = build_neighbors(&raw::FACES);
        assert_eq!(neighbors, raw::NEIGHBORS);
    }

    #[test]
    fn every_baked_face_is_ccw() {
        for face in raw::FACES {
            let a = raw::VERTICES[face[0] as usize];
            let b = raw::VERTICES[face[1] as usize];
            let c = raw::VERTICES[face[2] as usize];
            assert!(is_ccw(a, b, c));
        }
    }

    #[test]
    fn neighbor_table_is_symmetric() {
        for (f, row) in raw::NEIGHBORS.iter().enumerate() {
            for (e, &(nf, ne)) in row.iter().enumerate() {
                let (back_f, back_e) = raw::NEIGHBORS[nf as usize][ne as usize];
                assert_eq!((back_f, back_e), (f as u8, e as u8));
            }
        }
    }

    #[test]
    fn every_vertex_has_degree_five() {
        let mut degree = [0_u32; 12];
        for face in raw::FACES {
            for v in face {
                degree[v as usize] += 1;
            }
        }
        assert!(degree.iter().all(|&d| d == 5));
    }

    #[test]
    fn euler_formula_holds() {
        let vertices = 12;
        let edges = 30;
        let faces = 20;
        assert_eq!(vertices - edges + faces, 2);
    }
}
