//! Regenerates the canonical base icosahedron tables from first principles
//! and prints them, in the shape baked into [`d20::base::raw`], so the
//! checked-in constants can be diffed against a fresh derivation.

use d20::base::builder::{build_canonical, build_neighbors};
use d20::base::raw::FACES;

fn main() {
    let (verts, is_south) = build_canonical();
    let neighbors = build_neighbors(&FACES);

    println!("VERTICES:");
    for (i, v) in verts.iter().enumerate() {
        println!("    Vec3::new({:?}, {:?}, {:?}), // {i}", v.x, v.y, v.z);
    }

    println!("\nFACES:");
    for (i, face) in FACES.iter().enumerate() {
        println!("    {face:?}, // {i}");
    }

    println!("\nNEIGHBORS:");
    for (i, row) in neighbors.iter().enumerate() {
        println!("    {row:?}, // {i}");
    }

    println!("\nIS_SOUTH:");
    println!("    {is_south:?}");
}
