use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GlobeError;
use crate::geo::GeoPoint;

/// A point feature drawn on a globe, sized by its magnitude (an earthquake,
/// a seismic station, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Where the marker sits.
    #[serde(flatten)]
    pub location: GeoPoint,
    /// Magnitude driving the drawn radius.
    pub magnitude: f64,
    /// Optional display label (place name, station code).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Marker {
    /// Create an unlabeled marker.
    #[must_use]
    pub fn new(location: GeoPoint, magnitude: f64) -> Self {
        Self {
            location,
            magnitude,
            label: None,
        }
    }

    /// Attach a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Drawn radius in pixels: `sqrt(|magnitude|) * radius_scale`.
    #[must_use]
    pub fn radius(&self, radius_scale: f64) -> f64 {
        self.magnitude.abs().sqrt() * radius_scale
    }
}

/// On-disk record; any numeric field may be null or missing. Earthquake
/// catalogue rows use `mag` and `place`.
#[derive(Debug, Deserialize)]
struct MarkerRecord {
    longitude: Option<f64>,
    latitude: Option<f64>,
    #[serde(alias = "mag")]
    magnitude: Option<f64>,
    #[serde(default, alias = "place")]
    label: Option<String>,
}

impl MarkerRecord {
    fn into_marker(self) -> Option<Marker> {
        let location = GeoPoint::new(self.longitude?, self.latitude?);
        let magnitude = self.magnitude?;
        if !location.is_finite() || !magnitude.is_finite() {
            return None;
        }
        Some(Marker {
            location,
            magnitude,
            label: self.label,
        })
    }
}

/// Parse a JSON array of marker records, dropping incomplete ones.
pub fn parse_markers(json: &str) -> Result<Vec<Marker>, GlobeError> {
    let records: Vec<MarkerRecord> = serde_json::from_str(json)
        .map_err(|e| GlobeError::MarkersParse(e.to_string()))?;
    let total = records.len();
    let markers: Vec<Marker> = records
        .into_iter()
        .filter_map(MarkerRecord::into_marker)
        .collect();
    let dropped = total - markers.len();
    if dropped > 0 {
        log::warn!(
            "dropped {dropped} of {total} marker records with missing \
             coordinates or magnitude"
        );
    }
    Ok(markers)
}

/// Load markers from a JSON file. See [`parse_markers`].
pub fn load_markers(path: &Path) -> Result<Vec<Marker>, GlobeError> {
    let content = std::fs::read_to_string(path)?;
    let markers = parse_markers(&content)?;
    log::info!("Loaded {} markers from {}", markers.len(), path.display());
    Ok(markers)
}
