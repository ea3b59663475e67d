//! Orthographic projection of a rotated sphere onto the screen plane.
//!
//! The projection matches the conventions of the usual web-mapping
//! orthographic projection: the rotation is applied to points before
//! projecting, screen y grows downward, and the sphere centre lands on the
//! translate point.

/// Rotated orthographic projection with scale and translate.
pub mod orthographic;

pub use orthographic::{Orthographic, DEFAULT_FIT_RATIO};
