//! Error types for this crate's three invalid-argument conditions.

mod direction;
mod invalid_value;
mod pack_error;

pub use direction::InvalidDirection;
pub use invalid_value::{
    InvalidD20, InvalidEdge, InvalidLatLng, InvalidLod, InvalidPath,
    InvalidVertexIndex,
};
pub use pack_error::PackError;
