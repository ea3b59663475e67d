//! Globe options with TOML preset support.
//!
//! Drag sensitivity, initial rotation, projection fitting and marker sizing
//! are consolidated here. Options serialize to/from TOML so each globe on a
//! page can load its own preset.

mod globe;
mod markers;

use std::path::Path;

pub use globe::GlobeOptions;
pub use markers::MarkerOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GlobeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[markers]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Rotation and projection parameters.
    pub globe: GlobeOptions,
    /// Marker sizing and hit-testing parameters.
    pub markers: MarkerOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GlobeError> {
        let content = std::fs::read_to_string(path).map_err(GlobeError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| GlobeError::OptionsParse(e.to_string()))?;
        log::info!("Loaded globe options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GlobeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlobeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlobeError::Io)?;
        }
        std::fs::write(path, content).map_err(GlobeError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("orthoglobe-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[globe]
sensitivity = 0.8

[globe.initial_rotation]
lambda = 30.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.globe.sensitivity, 0.8);
        assert_eq!(opts.globe.initial_rotation.lambda, 30.0);
        // Everything else should be default
        assert_eq!(opts.globe.initial_rotation.phi, -20.0);
        assert_eq!(opts.globe.fit_ratio, 0.9);
        assert_eq!(opts.markers, MarkerOptions::default());
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let dir = scratch_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[globe\nsensitivity = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(GlobeError::OptionsParse(_))
        ));
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(GlobeError::Io(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = scratch_dir("presets");
        let mut opts = Options::default();
        opts.globe.sensitivity = 0.8;
        opts.markers.hit_slop = 5.0;

        opts.save(&dir.join("stations.toml")).unwrap();
        Options::default().save(&dir.join("earthquakes.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        assert_eq!(Options::load(&dir.join("stations.toml")).unwrap(), opts);
        assert_eq!(
            Options::list_presets(&dir),
            vec!["earthquakes".to_owned(), "stations".to_owned()]
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("globe"));
        assert!(props.contains_key("markers"));

        let globe = &props["globe"]["properties"];
        assert!(globe.get("sensitivity").is_some());
        assert!(globe.get("initial_rotation").is_some());
        assert!(globe.get("initial_width").is_none());
    }
}
