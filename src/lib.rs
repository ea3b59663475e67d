// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Geometry for drag-rotatable orthographic globes.
//!
//! Orthoglobe holds the math behind interactive globe views: a rotation that
//! follows pointer drags, a hemisphere test deciding which points face the
//! viewer, an orthographic projection onto screen pixels, and hit-testing of
//! magnitude-sized markers. Drawing is left to the caller.
//!
//! # Key entry points
//!
//! - [`geo::update_rotation`] and [`geo::is_visible`] - the pure rotation
//!   and visibility functions
//! - [`projection::Orthographic`] - rotated orthographic projection with
//!   container fitting and inversion
//! - [`globe::GlobeController`] - per-globe state driven by
//!   [`input::InputEvent`]s
//! - [`options::Options`] - TOML-configurable sensitivity, sizing and marker
//!   parameters
//!
//! # Example
//!
//! ```
//! use orthoglobe::geo::{is_visible, update_rotation, GeoPoint, RotationState};
//!
//! let rotation = update_rotation(RotationState::new(0.0, -20.0), 100.0, 0.0, 0.7);
//! assert!((rotation.lambda - 70.0).abs() < 1e-9);
//! assert!(is_visible(GeoPoint::new(-70.0, 20.0), rotation));
//! ```

pub mod error;
pub mod geo;
pub mod globe;
pub mod input;
pub mod options;
pub mod projection;

pub use error::GlobeError;
