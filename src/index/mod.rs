//! Packed 64-bit identifiers for mesh faces and vertices, and the
//! neighbor-finding algorithm that walks between faces across the mesh.

pub mod bits;
mod face_index;
mod neighbor;
mod path;
mod vertex_index;

pub use face_index::FaceIndex;
pub use path::{
    build_path, build_path_from_str, format_path, get_pos, MAX_DIGITS,
};
pub use vertex_index::VertexIndex;
