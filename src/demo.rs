//! Scripted fly-throughs played back to back.
//!
//! A [`Preset`] bundles everything needed to replay one recorded flight:
//! waypoints, fractal keyframe, duration and color. The
//! [`DemoSequencer`] walks an ordered list of presets, handing the next one
//! out each time the previous session finishes.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::animation::{PlaybackMode, WaypointStore};
use crate::error::PioneerError;
use crate::options::Options;

/// Presets shipped with the crate.
const BUILTIN_PRESETS: &str = include_str!("../assets/demo_presets.toml");

/// One waypoint as stored in a preset file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresetWaypoint {
    /// Camera position.
    pub position: [f64; 3],
    /// Euler rotation (pitch, yaw, roll) in radians.
    pub rotation: [f64; 3],
}

/// A recorded flight with the scene settings it was recorded under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name.
    pub name: String,
    /// Fractal animation clock at the start of the flight.
    pub keyframe: i64,
    /// Seconds from the first to the last waypoint.
    pub target_duration: f64,
    /// Fractal base color (RGB, 0-255).
    pub color: [u8; 3],
    /// Path through the scene.
    pub waypoints: Vec<PresetWaypoint>,
}

impl Preset {
    /// Replace the recorded waypoints with this preset's and apply its
    /// duration and color.
    ///
    /// Fails without touching anything if the store is locked by a running
    /// session or the duration is not positive. The keyframe is left to the
    /// caller, which owns the fractal clock.
    pub fn apply(
        &self,
        waypoints: &mut WaypointStore,
        options: &mut Options,
    ) -> Result<(), PioneerError> {
        if waypoints.is_locked() {
            return Err(PioneerError::InvalidOption(format!(
                "Cannot load preset '{}' while playback is running",
                self.name
            )));
        }
        options.output.set_target_duration(self.target_duration)?;
        options.fractal.set_color_rgb8(self.color);

        let _ = waypoints.clear();
        for w in &self.waypoints {
            let _ = waypoints.append(
                DVec3::from_array(w.position),
                DVec3::from_array(w.rotation),
            );
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct PresetFile {
    #[serde(default)]
    presets: Vec<Preset>,
}

/// Ordered list of presets parsed from TOML `[[presets]]` tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetLibrary {
    presets: Vec<Preset>,
}

impl PresetLibrary {
    /// The fly-throughs bundled with the crate.
    pub fn builtin() -> Result<Self, PioneerError> {
        Self::from_toml_str(BUILTIN_PRESETS)
    }

    /// Parse a preset file's contents.
    pub fn from_toml_str(content: &str) -> Result<Self, PioneerError> {
        let file: PresetFile = toml::from_str(content)
            .map_err(|e| PioneerError::PresetParse(e.to_string()))?;
        Ok(Self {
            presets: file.presets,
        })
    }

    /// Read and parse a preset file.
    pub fn load(path: &Path) -> Result<Self, PioneerError> {
        let content = std::fs::read_to_string(path)?;
        let library = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded {} presets from {}",
            library.len(),
            path.display()
        );
        Ok(library)
    }

    /// Presets in file order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Preset with the given name.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the library holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Cursor over a preset list for one demo run.
#[derive(Debug, Clone)]
pub struct DemoSequencer {
    presets: Vec<Preset>,
    cursor: usize,
    mode: PlaybackMode,
}

impl DemoSequencer {
    /// Sequencer over `library` that plays every preset in `mode`.
    pub fn new(library: PresetLibrary, mode: PlaybackMode) -> Self {
        Self {
            presets: library.presets,
            cursor: 0,
            mode,
        }
    }

    /// Sequencer over the built-in presets.
    pub fn builtin(mode: PlaybackMode) -> Result<Self, PioneerError> {
        Ok(Self::new(PresetLibrary::builtin()?, mode))
    }

    /// Playback mode used for every preset.
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Rewind and return the first preset.
    pub fn start(&mut self) -> Option<&Preset> {
        self.reset();
        self.next_preset()
    }

    /// Return the next preset and advance, or `None` once all are played.
    pub fn next_preset(&mut self) -> Option<&Preset> {
        let preset = self.presets.get(self.cursor)?;
        self.cursor += 1;
        Some(preset)
    }

    /// Rewind to the first preset.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of presets already handed out.
    pub fn played(&self) -> usize {
        self.cursor
    }

    /// Total number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether there is nothing to play.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_presets_parse() {
        let library = PresetLibrary::builtin().unwrap();
        assert_eq!(library.len(), 7);

        let keyframes: Vec<i64> =
            library.presets().iter().map(|p| p.keyframe).collect();
        assert_eq!(keyframes, [0, 15200, 13400, 10600, 9800, 9300, 11300]);
        for preset in library.presets() {
            assert!(preset.waypoints.len() >= 2, "{}", preset.name);
            assert!(preset.target_duration > 0.0);
        }
        assert_eq!(library.get("dive").map(|p| p.waypoints.len()), Some(4));
    }

    #[test]
    fn malformed_file_is_a_preset_error() {
        let err = PresetLibrary::from_toml_str("[[presets]]\nname = 3\n")
            .unwrap_err();
        assert!(matches!(err, PioneerError::PresetParse(_)));
        assert!(PresetLibrary::from_toml_str("").unwrap().is_empty());
    }

    #[test]
    fn apply_replaces_waypoints_and_scene() {
        let library = PresetLibrary::builtin().unwrap();
        let preset = &library.presets()[1];
        let mut store = WaypointStore::new();
        assert!(store.append(DVec3::ONE, DVec3::ZERO));
        let mut options = Options::default();

        preset.apply(&mut store, &mut options).unwrap();
        assert_eq!(store.len(), preset.waypoints.len());
        assert_eq!(
            store.positions()[0],
            DVec3::from_array(preset.waypoints[0].position)
        );
        assert_eq!(options.output.target_duration, 80.0);
        assert_eq!(options.fractal.color, [1.0, 233.0 / 255.0, 228.0 / 255.0]);
    }

    #[test]
    fn apply_refuses_locked_store() {
        let library = PresetLibrary::builtin().unwrap();
        let mut store = WaypointStore::new();
        store.set_locked(true);
        let mut options = Options::default();
        assert!(library.presets()[0].apply(&mut store, &mut options).is_err());
        assert_eq!(options, Options::default());
    }

    #[test]
    fn sequencer_walks_presets_once() {
        let mut demo = DemoSequencer::builtin(PlaybackMode::Preview).unwrap();
        assert_eq!(demo.start().map(|p| p.keyframe), Some(0));
        let mut seen = 1;
        while demo.next_preset().is_some() {
            seen += 1;
        }
        assert_eq!(seen, 7);
        assert!(demo.next_preset().is_none());
        assert_eq!(demo.played(), demo.len());
        assert_eq!(demo.start().map(|p| p.name.clone()), Some("dive".to_owned()));
        assert_eq!(demo.played(), 1);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flight.toml");
        std::fs::write(
            &path,
            r#"
[[presets]]
name = "hop"
keyframe = 12
target_duration = 2.0
color = [10, 20, 30]
waypoints = [
    { position = [0.0, 0.0, 0.0], rotation = [0.0, 0.0, 0.0] },
    { position = [0.0, 0.0, 1.0], rotation = [0.0, 0.0, 0.0] },
]
"#,
        )
        .unwrap();
        let library = PresetLibrary::load(&path).unwrap();
        assert_eq!(library.presets()[0].keyframe, 12);
        assert!(PresetLibrary::load(&dir.path().join("missing.toml")).is_err());
    }
}
