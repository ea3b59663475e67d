//! Spherical geometry for orthographic globes.
//!
//! Geographic points, the drag-driven rotation state of a globe, and the
//! hemisphere test that decides whether a point faces the viewer.

/// Immutable longitude/latitude pairs.
pub mod point;
/// Rotation state and its drag update.
pub mod rotation;
/// Front-hemisphere visibility test.
pub mod visibility;

pub use point::GeoPoint;
pub use rotation::{update_rotation, RotationState, MAX_PHI, MIN_PHI};
pub use visibility::{is_visible, visibility_cosine};
