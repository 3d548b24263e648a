//! Spherical geometry helpers.
//!
//! These are collaborators of the mesh index, not part of it: nothing in
//! [`crate::index`] reads a [`LatLng`] or a [`Vec3`]. They exist so that
//! callers (and this crate's own tests) can relate canonical table
//! coordinates to real-world positions.

mod latlng;
mod vec3;

pub use latlng::LatLng;
pub use vec3::Vec3;
