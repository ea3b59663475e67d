use glam::{DQuat, DVec2, DVec3};

use crate::error::GlobeError;
use crate::geo::{is_visible, GeoPoint, RotationState};

/// Fraction of the half-width used as the sphere radius when fitting.
pub const DEFAULT_FIT_RATIO: f64 = 0.9;

/// Orthographic projection of a rotated unit sphere.
///
/// `scale` is the on-screen radius of the sphere in pixels and `translate`
/// the screen position of its centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Orthographic {
    scale: f64,
    translate: DVec2,
    fit_ratio: f64,
    rotation: RotationState,
    /// Cached sphere rotation for `rotation`.
    orientation: DQuat,
}

impl Default for Orthographic {
    fn default() -> Self {
        Self::new(250.0, DVec2::new(250.0, 250.0))
    }
}

impl Orthographic {
    /// Create a projection with an explicit scale and translate and no
    /// rotation.
    #[must_use]
    pub fn new(scale: f64, translate: DVec2) -> Self {
        let rotation = RotationState::new(0.0, 0.0);
        Self {
            scale,
            translate,
            fit_ratio: DEFAULT_FIT_RATIO,
            rotation,
            orientation: orientation_for(rotation),
        }
    }

    /// Create a projection fitted to a square container of `width` pixels.
    ///
    /// `fit_ratio` must be finite and positive; a zero ratio collapses the
    /// sphere and a negative one mirrors it.
    pub fn fitted(width: f64, fit_ratio: f64) -> Result<Self, GlobeError> {
        if !fit_ratio.is_finite() || fit_ratio <= 0.0 {
            return Err(GlobeError::InvalidFitRatio(fit_ratio));
        }
        let mut projection = Self::default();
        projection.fit_ratio = fit_ratio;
        projection.fit_width(width)?;
        Ok(projection)
    }

    /// Sphere radius in pixels.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Screen position of the sphere centre.
    #[must_use]
    pub fn translate(&self) -> DVec2 {
        self.translate
    }

    /// Rotation applied before projecting.
    #[must_use]
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Replace the rotation, clamping its latitude.
    pub fn set_rotation(&mut self, rotation: RotationState) {
        self.rotation = RotationState::new(rotation.lambda, rotation.phi);
        self.orientation = orientation_for(self.rotation);
    }

    /// Centre the sphere in a square container of `width` pixels and size it
    /// to `fit_ratio` of the half-width.
    ///
    /// Zero, negative and non-finite widths are rejected and leave the
    /// projection unchanged.
    pub fn fit_width(&mut self, width: f64) -> Result<(), GlobeError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GlobeError::InvalidWidth(width));
        }
        let half = width / 2.0;
        self.translate = DVec2::splat(half);
        self.scale = half * self.fit_ratio;
        Ok(())
    }

    /// Position of `point` on the rotated sphere, as a unit vector whose x
    /// axis points at the viewer.
    #[must_use]
    pub fn rotate_vector(&self, point: GeoPoint) -> DVec3 {
        self.orientation * point.to_unit_vector()
    }

    /// `point` expressed in the rotated frame, where (0, 0) is the centre
    /// of the view.
    #[must_use]
    pub fn rotate(&self, point: GeoPoint) -> GeoPoint {
        GeoPoint::from_vector(self.rotate_vector(point))
    }

    /// Screen position of `point`. Points on the far side are projected
    /// too, overlapping the near side.
    #[must_use]
    pub fn project(&self, point: GeoPoint) -> DVec2 {
        let v = self.rotate_vector(point);
        DVec2::new(
            self.translate.x + self.scale * v.y,
            self.translate.y - self.scale * v.z,
        )
    }

    /// Screen position of `point`, or `None` when it faces away from the
    /// viewer.
    #[must_use]
    pub fn project_visible(&self, point: GeoPoint) -> Option<DVec2> {
        is_visible(point, self.rotation).then(|| self.project(point))
    }

    /// Geographic point under the screen position `screen`, or `None`
    /// outside the sphere's disc.
    #[must_use]
    pub fn invert(&self, screen: DVec2) -> Option<GeoPoint> {
        if self.scale == 0.0 {
            return None;
        }
        let offset = (screen - self.translate) / self.scale;
        let (y, z) = (offset.x, -offset.y);
        let rho_sq = y * y + z * z;
        if !rho_sq.is_finite() || rho_sq > 1.0 {
            return None;
        }
        let x = (1.0 - rho_sq).sqrt();
        let v = self.orientation.inverse() * DVec3::new(x, y, z);
        Some(GeoPoint::from_vector(v))
    }
}

/// Spin by `lambda` about the polar axis, then tilt by `phi` so that the
/// point (-lambda, -phi) faces the viewer along +x.
fn orientation_for(rotation: RotationState) -> DQuat {
    let spin = DQuat::from_rotation_z(rotation.lambda.to_radians());
    let tilt = DQuat::from_rotation_y(-rotation.phi.to_radians());
    tilt * spin
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn projection(rotation: RotationState) -> Orthographic {
        let mut p = Orthographic::new(100.0, DVec2::new(200.0, 200.0));
        p.set_rotation(rotation);
        p
    }

    #[test]
    fn unrotated_projection_axes() {
        let p = projection(RotationState::new(0.0, 0.0));
        assert!(p
            .project(GeoPoint::new(0.0, 0.0))
            .abs_diff_eq(DVec2::new(200.0, 200.0), EPS));
        assert!(p
            .project(GeoPoint::new(90.0, 0.0))
            .abs_diff_eq(DVec2::new(300.0, 200.0), EPS));
        assert!(p
            .project(GeoPoint::new(0.0, 90.0))
            .abs_diff_eq(DVec2::new(200.0, 100.0), EPS));
    }

    #[test]
    fn rotation_centres_the_view_point() {
        for (lambda, phi) in [(0.0, -20.0), (70.0, -20.0), (-150.0, 45.0)] {
            let rotation = RotationState::new(lambda, phi);
            let p = projection(rotation);
            let centre = rotation.view_center();
            assert!(p.project(centre).abs_diff_eq(DVec2::new(200.0, 200.0), EPS));

            let rotated = p.rotate(centre);
            assert!(rotated.longitude.abs() < EPS);
            assert!(rotated.latitude.abs() < EPS);
        }
    }

    #[test]
    fn depth_matches_visibility_cosine() {
        let rotation = RotationState::new(37.0, -20.0);
        let p = projection(rotation);
        for point in [
            GeoPoint::new(10.0, 10.0),
            GeoPoint::new(-120.0, 45.0),
            GeoPoint::new(170.0, -60.0),
        ] {
            let depth = p.rotate_vector(point).x;
            let cosc = crate::geo::visibility_cosine(point, rotation);
            assert!((depth - cosc).abs() < EPS);
        }
    }

    #[test]
    fn far_side_is_not_projected_visibly() {
        let p = projection(RotationState::new(0.0, 0.0));
        assert!(p.project_visible(GeoPoint::new(0.0, 0.0)).is_some());
        assert!(p.project_visible(GeoPoint::new(180.0, 0.0)).is_none());
        assert!(p.project_visible(GeoPoint::new(f64::NAN, 0.0)).is_none());
    }

    #[test]
    fn invert_recovers_visible_points() {
        let p = projection(RotationState::new(-30.0, -20.0));
        for point in [
            GeoPoint::new(30.0, 20.0),
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(60.0, 50.0),
        ] {
            let screen = p.project(point);
            let back = p.invert(screen).unwrap();
            assert!((back.longitude - point.longitude).abs() < 1e-6);
            assert!((back.latitude - point.latitude).abs() < 1e-6);
        }
    }

    #[test]
    fn invert_outside_disc_is_none() {
        let p = projection(RotationState::new(0.0, 0.0));
        assert!(p.invert(DVec2::new(0.0, 0.0)).is_none());
        assert!(p.invert(DVec2::new(301.0, 200.0)).is_none());
        assert!(p.invert(DVec2::new(f64::NAN, 200.0)).is_none());
    }

    #[test]
    fn fit_width_centres_and_scales() {
        let mut p = Orthographic::default();
        p.fit_width(800.0).unwrap();
        assert_eq!(p.translate(), DVec2::new(400.0, 400.0));
        assert!((p.scale() - 360.0).abs() < EPS);
    }

    #[test]
    fn fit_width_rejects_bad_widths() {
        let mut p = Orthographic::fitted(500.0, DEFAULT_FIT_RATIO).unwrap();
        let before = p.clone();
        for width in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                p.fit_width(width),
                Err(GlobeError::InvalidWidth(_))
            ));
        }
        assert_eq!(p, before);
    }

    #[test]
    fn fitted_rejects_bad_ratios() {
        for ratio in [0.0, -0.9, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Orthographic::fitted(400.0, ratio),
                Err(GlobeError::InvalidFitRatio(_))
            ));
        }
        let p = Orthographic::fitted(400.0, 0.5).unwrap();
        assert!((p.scale() - 100.0).abs() < EPS);
    }

    #[test]
    fn set_rotation_clamps_latitude() {
        let mut p = Orthographic::default();
        p.set_rotation(RotationState {
            lambda: 10.0,
            phi: 200.0,
        });
        assert_eq!(p.rotation(), RotationState::new(10.0, 90.0));

        // Tilted fully over, the south pole faces the viewer.
        let south = GeoPoint::new(0.0, -90.0);
        assert!(p.project(south).abs_diff_eq(p.translate(), EPS));
        assert!(p.project_visible(south).is_some());
    }
}
