use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geo::RotationState;
use crate::projection::DEFAULT_FIT_RATIO;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Globe", inline)]
#[serde(default)]
/// Drag rotation and projection sizing parameters.
pub struct GlobeOptions {
    /// Degrees of rotation per pixel of pointer drag.
    #[schemars(title = "Drag Sensitivity", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub sensitivity: f64,
    /// Rotation the globe starts with.
    #[schemars(title = "Initial Rotation")]
    pub initial_rotation: RotationState,
    /// Sphere radius as a fraction of half the container width.
    #[schemars(title = "Fit Ratio", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub fit_ratio: f64,
    /// Container width assumed before the first resize.
    #[schemars(skip)]
    pub initial_width: f64,
}

impl Default for GlobeOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.7,
            initial_rotation: RotationState::default(),
            fit_ratio: DEFAULT_FIT_RATIO,
            initial_width: 800.0,
        }
    }
}
