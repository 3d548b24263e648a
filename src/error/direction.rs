use crate::LatLng;
use std::{error::Error, fmt};

/// The great-circle direction between two points is undefined.
///
/// Raised by [`LatLng::initial_great_circle_azimuth`] when the two endpoints
/// are identical or antipodal: every direction leaving `start` reaches such a
/// `goal` equally validly, so no single initial bearing exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidDirection {
    /// The starting point.
    pub start: LatLng,
    /// The target point.
    pub goal: LatLng,
}

impl InvalidDirection {
    pub(crate) const fn new(start: LatLng, goal: LatLng) -> Self {
        Self { start, goal }
    }
}

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "undefined great-circle direction between {} and {} \
             (identical or antipodal points)",
            self.start, self.goal
        )
    }
}

impl Error for InvalidDirection {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}
