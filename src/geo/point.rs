use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A location on the sphere, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Latitude in degrees, positive north.
    pub latitude: f64,
}

impl GeoPoint {
    /// Create a point from longitude and latitude in degrees.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Unit vector on the sphere: x towards (0, 0), y towards (90, 0),
    /// z towards the north pole.
    #[must_use]
    pub fn to_unit_vector(self) -> DVec3 {
        let (sin_lambda, cos_lambda) = self.longitude.to_radians().sin_cos();
        let (sin_phi, cos_phi) = self.latitude.to_radians().sin_cos();
        DVec3::new(cos_phi * cos_lambda, cos_phi * sin_lambda, sin_phi)
    }

    /// Inverse of [`GeoPoint::to_unit_vector`]. The vector need not be
    /// normalized; the zero vector maps to (0, 0).
    #[must_use]
    pub fn from_vector(v: DVec3) -> Self {
        let horizontal = v.x.hypot(v.y);
        Self {
            longitude: v.y.atan2(v.x).to_degrees(),
            latitude: v.z.atan2(horizontal).to_degrees(),
        }
    }
}
