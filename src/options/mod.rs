//! Centralized scene, camera and output options with TOML preset support.
//!
//! All tweakable settings (fractal, scene lighting, camera sensitivities,
//! playback output) are consolidated here. Options serialize to/from TOML so
//! a whole viewer setup can be saved next to its waypoint presets.

mod camera;
mod fractal;
mod output;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use fractal::{
    wrap_keyframe, FractalOptions, KEYFRAME_PERIOD, WOBBLE_AMPLITUDE,
    WOBBLE_FREQUENCY,
};
pub use output::OutputOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PioneerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[output]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Start pose and fly-camera sensitivities.
    pub camera: CameraOptions,
    /// Fractal transform and color.
    pub fractal: FractalOptions,
    /// Ray-marcher lighting and shading.
    pub scene: SceneOptions,
    /// Playback timing and frame output.
    pub output: OutputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults; values
    /// the setters would reject make the load fail.
    pub fn load(path: &Path) -> Result<Self, PioneerError> {
        let content = std::fs::read_to_string(path).map_err(PioneerError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| PioneerError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PioneerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PioneerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PioneerError::Io)?;
        }
        std::fs::write(path, content).map_err(PioneerError::Io)
    }

    /// Reject values that could not have been set interactively.
    pub fn validate(&self) -> Result<(), PioneerError> {
        self.output.validate()?;
        if self.scene.anti_aliasing_samples < 0.0 {
            return Err(PioneerError::InvalidOption(
                "Cannot set scene anti-aliasing to a negative value".to_owned(),
            ));
        }
        Ok(())
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
[output]
target_fps = 30.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.output.target_fps, 30.0);
        // Everything else should be default
        assert_eq!(opts.output.target_duration, 10.0);
        assert_eq!(opts.scene.light_direction, [-0.36, 0.8, 0.48]);
        assert_eq!(opts.camera.move_speed, 0.01);
    }

    #[test]
    fn load_rejects_invalid_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[output]\ntarget_duration = -2.0\n").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, PioneerError::InvalidOption(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("viewer.toml");
        let mut opts = Options::default();
        opts.fractal.set_color_rgb8([255, 233, 228]);
        opts.output.set_target_duration(30.0).unwrap();
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            Options::list_presets(&dir.path().join("nested")),
            vec!["viewer".to_owned()]
        );
    }

    #[test]
    fn keyframe_wraps_and_wobbles() {
        assert_eq!(KEYFRAME_PERIOD, 20943);
        assert_eq!(wrap_keyframe(KEYFRAME_PERIOD + 5), 5);
        assert_eq!(wrap_keyframe(-1), KEYFRAME_PERIOD - 1);

        let fractal = FractalOptions::default();
        assert_eq!(fractal.animated_rotation(0), fractal.rotation);
        let quarter = (std::f64::consts::FRAC_PI_2 / WOBBLE_FREQUENCY) as i64;
        let wobbled = fractal.animated_rotation(quarter);
        assert!((wobbled[0] - (fractal.rotation[0] + 0.3)).abs() < 1e-4);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("fractal"));
        assert!(props.contains_key("scene"));
        assert!(props.contains_key("output"));

        // Skipped fields should be absent
        let output = &props["output"]["properties"];
        assert!(output.get("target_fps").is_some());
        assert!(output.get("directory").is_none());
    }
}
