use super::Vec3;
use crate::error::{InvalidDirection, InvalidLatLng};
use float_eq::float_eq;
use std::f64::consts::PI;

/// Epsilon of ~0.1mm in degrees.
const EPSILON_DEG: f64 = 0.000_000_001;

/// Same as `EPSILON_DEG`, but in radians.
const EPSILON_RAD: f64 = EPSILON_DEG * PI / 180.0;

/// How close the dot product of two unit vectors must be to `±1` for the
/// points to be considered identical/antipodal (and thus directionless).
const DIRECTION_EPSILON: f64 = 1e-15;

/// A point on the sphere, stored as latitude/longitude in radians.
///
/// The `Display` impl prints the values as degrees (10 decimals at most),
/// while the `Debug` impl prints both degrees and radians.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Latitude, in radians.
    lat: f64,
    /// Longitude, in radians.
    lng: f64,
}

impl LatLng {
    /// Initializes a new coordinate from degrees.
    ///
    /// # Errors
    ///
    /// [`InvalidLatLng`] when one (or both) components is not a finite
    /// number.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidLatLng> {
        Self::from_radians(lat.to_radians(), lng.to_radians())
    }

    /// Initializes a new coordinate from radians.
    ///
    /// # Errors
    ///
    /// [`InvalidLatLng`] when one (or both) components is not a finite
    /// number.
    pub fn from_radians(lat: f64, lng: f64) -> Result<Self, InvalidLatLng> {
        if !lat.is_finite() {
            return Err(InvalidLatLng::new(lat, "infinite latitude"));
        }
        if !lng.is_finite() {
            return Err(InvalidLatLng::new(lng, "infinite longitude"));
        }

        Ok(Self { lat, lng })
    }

    /// Latitude, in degrees.
    #[must_use]
    pub fn lat(self) -> f64 {
        self.lat.to_degrees()
    }

    /// Longitude, in degrees.
    #[must_use]
    pub fn lng(self) -> f64 {
        self.lng.to_degrees()
    }

    /// Latitude, in radians.
    #[must_use]
    pub const fn lat_radians(self) -> f64 {
        self.lat
    }

    /// Longitude, in radians.
    #[must_use]
    pub const fn lng_radians(self) -> f64 {
        self.lng
    }

    /// The great circle distance, in radians, between two spherical
    /// coordinates, via the Haversine formula.
    #[must_use]
    pub fn distance_rads(self, other: Self) -> f64 {
        let sin_lat = ((other.lat - self.lat) / 2.).sin();
        let sin_lng = ((other.lng - self.lng) / 2.).sin();

        let a = sin_lat.mul_add(
            sin_lat,
            self.lat.cos() * other.lat.cos() * sin_lng * sin_lng,
        );

        2. * a.sqrt().atan2((1. - a).sqrt())
    }

    /// The initial bearing, in `[0, 2π)` radians, of the great-circle arc
    /// leaving `self` towards `goal`.
    ///
    /// # Errors
    ///
    /// [`InvalidDirection`] if `self` and `goal` are identical or antipodal:
    /// every direction leaving `self` reaches such a point equally validly,
    /// so no initial bearing exists.
    pub fn initial_great_circle_azimuth(
        self,
        goal: Self,
    ) -> Result<f64, InvalidDirection> {
        let dot = Vec3::from(self).dot(Vec3::from(goal));
        if dot >= 1.0 - DIRECTION_EPSILON || dot <= -1.0 + DIRECTION_EPSILON {
            return Err(InvalidDirection::new(self, goal));
        }

        let delta_lng = goal.lng - self.lng;
        let y = delta_lng.sin() * goal.lat.cos();
        let x = self.lat.cos().mul_add(
            goal.lat.sin(),
            -(self.lat.sin() * goal.lat.cos() * delta_lng.cos()),
        );
        let theta = y.atan2(x);

        Ok((theta + 2. * PI) % (2. * PI))
    }
}

impl PartialEq for LatLng {
    fn eq(&self, other: &Self) -> bool {
        float_eq!(self.lat, other.lat, abs <= EPSILON_RAD)
            && float_eq!(self.lng, other.lng, abs <= EPSILON_RAD)
    }
}

impl From<LatLng> for Vec3 {
    /// Computes the 3D coordinate on the unit sphere, with +y as the polar
    /// (North) axis.
    fn from(value: LatLng) -> Self {
        let r = value.lat.cos();

        let y = value.lat.sin();
        let x = value.lng.cos() * r;
        let z = value.lng.sin() * r;

        Self::new(x, y, z)
    }
}

impl From<Vec3> for LatLng {
    /// Recovers latitude/longitude from a (not necessarily normalized) 3D
    /// vector, with +y as the polar (North) axis.
    fn from(value: Vec3) -> Self {
        let v = value.normalized();
        Self {
            lat: v.y.clamp(-1., 1.).asin(),
            lng: v.z.atan2(v.x),
        }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.10}, {:.10})", self.lat(), self.lng())
    }
}

impl std::fmt::Debug for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LatLng")
            .field("lat_rad", &self.lat)
            .field("lat_deg", &self.lat())
            .field("lng_rad", &self.lng)
            .field("lng_deg", &self.lng())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::LatLng;

    #[test]
    fn identical_points_have_no_direction() {
        let a = LatLng::new(10., 20.).unwrap();

        assert!(a.initial_great_circle_azimuth(a).is_err());
    }

    #[test]
    fn antipodal_points_have_no_direction() {
        let a = LatLng::new(10., 20.).unwrap();
        let b = LatLng::new(-10., -160.).unwrap();

        assert!(a.initial_great_circle_azimuth(b).is_err());
    }

    #[test]
    fn due_north_is_zero() {
        let a = LatLng::new(0., 0.).unwrap();
        let b = LatLng::new(10., 0.).unwrap();

        let az = a.initial_great_circle_azimuth(b).unwrap();
        assert!(az.abs() < 1e-9);
    }

    #[test]
    fn due_east_is_half_pi() {
        let a = LatLng::new(0., 0.).unwrap();
        let b = LatLng::new(0., 10.).unwrap();

        let az = a.initial_great_circle_azimuth(b).unwrap();
        assert!((az - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }
}
