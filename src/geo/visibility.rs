use super::{GeoPoint, RotationState};

/// Cosine of the great-circle distance between `point` and the centre of
/// the view under `rotation`.
///
/// Positive on the hemisphere facing the viewer, negative behind it, and
/// NaN when any input is NaN.
#[must_use]
pub fn visibility_cosine(point: GeoPoint, rotation: RotationState) -> f64 {
    let lambda = point.longitude.to_radians();
    let phi = point.latitude.to_radians();
    let lambda0 = (-rotation.lambda).to_radians();
    let phi0 = (-rotation.phi).to_radians();

    phi0.sin() * phi.sin() + phi0.cos() * phi.cos() * (lambda - lambda0).cos()
}

/// Whether `point` lies on the hemisphere facing the viewer.
///
/// Points exactly on the horizon are not visible, and NaN coordinates are
/// never visible.
#[must_use]
pub fn is_visible(point: GeoPoint, rotation: RotationState) -> bool {
    visibility_cosine(point, rotation) > 0.0
}
