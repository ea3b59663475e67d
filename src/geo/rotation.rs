use glam::DVec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Lowest latitudinal rotation, in degrees.
pub const MIN_PHI: f64 = -90.0;
/// Highest latitudinal rotation, in degrees.
pub const MAX_PHI: f64 = 90.0;

/// Rotation applied to a globe before projecting, in degrees.
///
/// `lambda` spins the globe about its polar axis and is left unbounded
/// (the trigonometry is periodic). `phi` tilts it towards or away from the
/// viewer and always stays within [`MIN_PHI`]..=[`MAX_PHI`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RotationState {
    /// Longitudinal rotation in degrees.
    pub lambda: f64,
    /// Latitudinal rotation in degrees.
    pub phi: f64,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            lambda: 0.0,
            phi: -20.0,
        }
    }
}

impl RotationState {
    /// Create a rotation, clamping `phi` into range.
    #[must_use]
    pub fn new(lambda: f64, phi: f64) -> Self {
        Self {
            lambda,
            phi: clamp_phi(phi, 0.0),
        }
    }

    /// Apply a pointer drag of `delta` pixels.
    ///
    /// Horizontal motion spins the globe along with the pointer; vertical
    /// motion is inverted. A component that would become non-finite is left
    /// unchanged.
    #[must_use]
    pub fn dragged(self, delta: DVec2, sensitivity: f64) -> Self {
        let lambda = self.lambda + delta.x * sensitivity;
        let phi = self.phi - delta.y * sensitivity;
        Self {
            lambda: if lambda.is_finite() { lambda } else { self.lambda },
            phi: clamp_phi(phi, self.phi),
        }
    }

    /// The point that sits at the centre of the view under this rotation.
    #[must_use]
    pub fn view_center(&self) -> GeoPoint {
        GeoPoint::new(-self.lambda, -self.phi)
    }
}

fn clamp_phi(phi: f64, fallback: f64) -> f64 {
    if phi.is_nan() {
        fallback
    } else {
        phi.clamp(MIN_PHI, MAX_PHI)
    }
}

/// Rotation after a drag of (`dx`, `dy`) pixels scaled by `sensitivity`.
///
/// `lambda += dx * sensitivity`, `phi -= dy * sensitivity`, then `phi` is
/// clamped to [-90, 90].
#[must_use]
pub fn update_rotation(
    state: RotationState,
    dx: f64,
    dy: f64,
    sensitivity: f64,
) -> RotationState {
    state.dragged(DVec2::new(dx, dy), sensitivity)
}
