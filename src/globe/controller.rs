use glam::DVec2;

use super::marker::Marker;
use crate::error::GlobeError;
use crate::geo::{GeoPoint, RotationState};
use crate::input::InputEvent;
use crate::options::{MarkerOptions, Options};
use crate::projection::Orthographic;

/// One drag-rotatable globe: its rotation, gesture state, projection and
/// markers.
///
/// Every globe on a page owns its own controller, so dragging one never
/// disturbs another. The controller only produces numbers; drawing the
/// sphere, outlines and markers is left to the caller.
#[derive(Debug, Clone)]
pub struct GlobeController {
    rotation: RotationState,
    /// Pointer position from the previous drag event; `None` while idle.
    last_sample: Option<DVec2>,
    projection: Orthographic,
    sensitivity: f64,
    marker_options: MarkerOptions,
    markers: Vec<Marker>,
}

impl Default for GlobeController {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl GlobeController {
    /// Create a controller from options.
    ///
    /// An unusable `initial_width` is logged and the default projection
    /// size is kept until the first successful [`resize`](Self::resize).
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let globe = &options.globe;
        let initial = globe.initial_rotation;
        let rotation = RotationState::new(initial.lambda, initial.phi);

        let projection =
            Orthographic::fitted(globe.initial_width, globe.fit_ratio)
                .unwrap_or_else(|e| {
                    log::warn!("{e}; using default projection size");
                    Orthographic::default()
                });

        let mut controller = Self {
            rotation,
            last_sample: None,
            projection,
            sensitivity: globe.sensitivity,
            marker_options: options.markers.clone(),
            markers: Vec::new(),
        };
        controller.projection.set_rotation(rotation);
        controller
    }

    /// Current rotation.
    #[must_use]
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Jump to `rotation` (latitude clamped), e.g. to reset the view.
    pub fn set_rotation(&mut self, rotation: RotationState) {
        self.rotation = RotationState::new(rotation.lambda, rotation.phi);
        self.projection.set_rotation(self.rotation);
    }

    /// Projection reflecting the current rotation and size.
    #[must_use]
    pub fn projection(&self) -> &Orthographic {
        &self.projection
    }

    /// Degrees of rotation per pixel dragged.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Change the drag sensitivity.
    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.sensitivity = sensitivity;
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_sample.is_some()
    }

    /// Begin a drag at the pointer position.
    pub fn drag_start(&mut self, x: f64, y: f64) {
        self.last_sample = Some(DVec2::new(x, y));
        log::debug!("drag started at ({x}, {y})");
    }

    /// Continue a drag. Returns the updated rotation, or `None` when no drag
    /// is in progress.
    pub fn drag_move(&mut self, x: f64, y: f64) -> Option<RotationState> {
        let previous = self.last_sample?;
        let current = DVec2::new(x, y);
        self.last_sample = Some(current);

        self.rotation =
            self.rotation.dragged(current - previous, self.sensitivity);
        self.projection.set_rotation(self.rotation);
        Some(self.rotation)
    }

    /// End the drag gesture; further moves leave the rotation alone.
    pub fn drag_end(&mut self) {
        if self.last_sample.take().is_some() {
            log::debug!(
                "drag ended at rotation ({}, {})",
                self.rotation.lambda,
                self.rotation.phi
            );
        }
    }

    /// Fit the projection to a square container `width` pixels wide.
    pub fn resize(&mut self, width: f64) -> Result<(), GlobeError> {
        self.projection.fit_width(width)?;
        log::debug!(
            "globe resized to {width}px, radius {}",
            self.projection.scale()
        );
        Ok(())
    }

    /// Feed one input event. Returns `true` when the globe must be redrawn.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.drag_start(x, y);
                false
            }
            InputEvent::PointerMoved { x, y } => {
                self.drag_move(x, y).is_some()
            }
            InputEvent::PointerUp => {
                let was_dragging = self.is_dragging();
                self.drag_end();
                was_dragging
            }
            InputEvent::Resized { width } => match self.resize(width) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("ignoring resize: {e}");
                    false
                }
            },
        }
    }

    /// Replace the markers drawn on this globe.
    pub fn set_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    /// All markers, visible or not.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Drawn radius of `marker` in pixels.
    #[must_use]
    pub fn marker_radius(&self, marker: &Marker) -> f64 {
        marker.radius(self.marker_options.radius_scale)
    }

    /// Markers on the visible hemisphere with their screen positions, for
    /// one redraw pass.
    pub fn visible_markers(&self) -> impl Iterator<Item = (&Marker, DVec2)> {
        self.markers.iter().filter_map(|marker| {
            self.projection
                .project_visible(marker.location)
                .map(|screen| (marker, screen))
        })
    }

    /// First visible marker whose disc, grown by the hit slop, contains the
    /// pointer.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Marker> {
        let pointer = DVec2::new(x, y);
        self.visible_markers()
            .find(|(marker, screen)| {
                screen.distance(pointer)
                    < self.marker_radius(marker) + self.marker_options.hit_slop
            })
            .map(|(marker, _)| marker)
    }

    /// Geographic location under the pointer, if it is over the sphere.
    #[must_use]
    pub fn pointer_location(&self, x: f64, y: f64) -> Option<GeoPoint> {
        self.projection.invert(DVec2::new(x, y))
    }
}
