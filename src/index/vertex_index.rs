use super::bits::{get_d20, get_index, get_lod, set_d20, set_index, set_lod};
use crate::error::{InvalidD20, InvalidLod, InvalidVertexIndex, PackError};
use std::fmt;

/// Maximum valid level of detail.
pub const MAX_LOD: u8 = 22;

/// Maximum value an index can hold (51 semantic bits, of the 54 available).
pub const MAX_INDEX: u64 = 0x0007_ffff_ffff_ffff;

/// Sentinel `d20` value meaning "one of the 12 base icosahedron vertices",
/// rather than a vertex introduced by subdivision inside a particular base
/// face.
pub const BASE_VERTEX_D20: u8 = 0b1_1111;

/// A packed identifier for a vertex of the subdivided icosahedron.
///
/// Bit layout, most significant first: `lod(5) | d20(5) | index(54)`.
/// Unlike [`super::FaceIndex`], vertices carry no polarity bit — a vertex
/// is a point, not an oriented triangle.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexIndex(u64);

impl VertexIndex {
    /// Builds a vertex identifier belonging to base face `d20`.
    ///
    /// # Errors
    ///
    /// - [`PackError::Lod`] if `lod > 22`.
    /// - [`PackError::D20`] if `d20 >= 20`.
    /// - [`PackError::VertexIndex`] if `index` does not fit in 51 bits.
    pub fn new(lod: u8, d20: u8, index: u64) -> Result<Self, PackError> {
        if d20 >= 20 {
            return Err(InvalidD20::new(d20, "base face must be 0..20").into());
        }
        Self::pack(lod, d20, index)
    }

    /// Builds a vertex identifier for one of the 12 base icosahedron
    /// vertices, which belong to no single base face.
    ///
    /// # Errors
    ///
    /// [`PackError::VertexIndex`] if `index` does not fit in 51 bits.
    pub fn base(index: u64) -> Result<Self, PackError> {
        Self::pack(0, BASE_VERTEX_D20, index)
    }

    fn pack(lod: u8, d20: u8, index: u64) -> Result<Self, PackError> {
        if lod > MAX_LOD {
            return Err(InvalidLod::new(lod, "level of detail must be 0..=22").into());
        }
        if index > MAX_INDEX {
            return Err(
                InvalidVertexIndex::new(index, "vertex index must fit in 51 bits").into(),
            );
        }

        let mut bits = 0_u64;
        bits = set_lod(bits, lod);
        bits = set_d20(bits, d20);
        bits = set_index(bits, index);

        Ok(Self(bits))
    }

    /// Wraps a raw `u64` without validation.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw packed bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Level of detail, `0..=22`.
    #[must_use]
    pub const fn lod(self) -> u8 {
        get_lod(self.0)
    }

    /// Base icosahedron face, `0..20`, or [`BASE_VERTEX_D20`] if this is
    /// one of the 12 base vertices.
    #[must_use]
    pub const fn d20(self) -> u8 {
        get_d20(self.0)
    }

    /// Whether this is one of the 12 base icosahedron vertices.
    #[must_use]
    pub const fn is_base_vertex(self) -> bool {
        self.d20() == BASE_VERTEX_D20
    }

    /// The vertex index.
    #[must_use]
    pub const fn index(self) -> u64 {
        get_index(self.0)
    }
}

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_base_vertex() {
            write!(f, "lod={}, base_vertex, index={}", self.lod(), self.index())
        } else {
            write!(
                f,
                "lod={}, d20={}, index={}",
                self.lod(),
                self.d20(),
                self.index()
            )
        }
    }
}

impl fmt::Debug for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexIndex({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::VertexIndex;

    #[test]
    fn round_trips_fields() {
        let v = VertexIndex::new(4, 7, 123).unwrap();
        assert_eq!(v.lod(), 4);
        assert_eq!(v.d20(), 7);
        assert_eq!(v.index(), 123);
        assert!(!v.is_base_vertex());
    }

    #[test]
    fn base_vertex_round_trips() {
        let v = VertexIndex::base(3).unwrap();
        assert!(v.is_base_vertex());
        assert_eq!(v.index(), 3);
    }

    #[test]
    fn rejects_out_of_range_d20() {
        assert!(VertexIndex::new(0, 20, 0).is_err());
    }

    #[test]
    fn rejects_out_of_range_index() {
        assert!(VertexIndex::new(0, 0, super::MAX_INDEX + 1).is_err());
    }
}
