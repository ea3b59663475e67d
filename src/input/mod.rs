//! Input handling: the platform-agnostic pointer events a globe reacts to.
//!
//! Glue code translates its own window or DOM events into [`InputEvent`]s;
//! the globe controller owns all gesture state.

/// Platform-agnostic input events.
pub mod event;

pub use event::InputEvent;
