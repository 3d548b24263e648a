use super::{InvalidD20, InvalidLod, InvalidPath, InvalidVertexIndex};
use std::{error::Error, fmt};

/// Any reason a face or vertex identifier failed to pack.
///
/// `pack_face`/`pack_vertex` run several independent range checks; this type
/// unifies whichever one fired first behind a single `Result` so callers
/// don't need to match on which field was at fault unless they want to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum PackError {
    /// The level of detail was out of range.
    Lod(InvalidLod),
    /// The base icosahedron face index was out of range.
    D20(InvalidD20),
    /// The path did not fit in the allotted bits, or held a digit outside
    /// `0..=3`.
    Path(InvalidPath),
    /// The vertex index did not fit in the allotted bits.
    VertexIndex(InvalidVertexIndex),
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lod(err) => err.fmt(f),
            Self::D20(err) => err.fmt(f),
            Self::Path(err) => err.fmt(f),
            Self::VertexIndex(err) => err.fmt(f),
        }
    }
}

impl Error for PackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(match self {
            Self::Lod(err) => err,
            Self::D20(err) => err,
            Self::Path(err) => err,
            Self::VertexIndex(err) => err,
        })
    }
}

impl From<InvalidLod> for PackError {
    fn from(err: InvalidLod) -> Self {
        Self::Lod(err)
    }
}

impl From<InvalidD20> for PackError {
    fn from(err: InvalidD20) -> Self {
        Self::D20(err)
    }
}

impl From<InvalidPath> for PackError {
    fn from(err: InvalidPath) -> Self {
        Self::Path(err)
    }
}

impl From<InvalidVertexIndex> for PackError {
    fn from(err: InvalidVertexIndex) -> Self {
        Self::VertexIndex(err)
    }
}
