//! Per-globe controller and the markers it draws.
//!
//! A [`GlobeController`] owns everything one rotatable globe needs between
//! events: its rotation, the previous drag sample, the fitted projection and
//! its markers. Glue code feeds it [`InputEvent`](crate::input::InputEvent)s
//! and redraws from [`GlobeController::visible_markers`] and
//! [`GlobeController::projection`].

/// Drag gestures, resizing and marker queries for one globe.
pub mod controller;
/// Magnitude-sized point markers and their JSON loader.
pub mod marker;

pub use controller::GlobeController;
pub use marker::{load_markers, parse_markers, Marker};
