use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marker sizing and pointer hit-testing parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Markers", inline)]
#[serde(default)]
pub struct MarkerOptions {
    /// Pixels of radius per square root of magnitude.
    #[schemars(title = "Radius Scale", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub radius_scale: f64,
    /// Extra pixels around a marker that still count as a hit.
    #[schemars(title = "Hit Slop", range(min = 0.0, max = 10.0), extend("step" = 1.0))]
    pub hit_slop: f64,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            radius_scale: 2.5,
            hit_slop: 3.0,
        }
    }
}
