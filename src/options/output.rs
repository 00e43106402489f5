//! Output section: playback timing, resolution and the frame directory.
//!
//! Timing values must stay positive; the setters reject anything else with
//! [`PioneerError::InvalidOption`].

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PioneerError;

/// Playback timing and rendered-frame output settings.
///
/// Fields are public for deserialization; interactive changes should go
/// through the validating setters so bad values never reach playback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Output", inline)]
#[serde(default)]
pub struct OutputOptions {
    /// Exported frame size in pixels (width, height).
    #[schemars(skip)]
    pub resolution: [u32; 2],
    /// Frames per second of preview and exported animation.
    #[schemars(title = "Target FPS", range(min = 1.0, max = 240.0), extend("step" = 1.0))]
    pub target_fps: f64,
    /// Length of the whole fly-through in seconds.
    #[schemars(title = "Duration (s)", range(min = 1.0, max = 600.0), extend("step" = 1.0))]
    pub target_duration: f64,
    /// Directory that receives `<index>.png` frames.
    #[schemars(skip)]
    pub directory: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            resolution: [1920, 1080],
            target_fps: 60.0,
            target_duration: 10.0,
            directory: PathBuf::from("."),
        }
    }
}

impl OutputOptions {
    /// Set the exported frame size; both sides must be positive.
    pub fn set_resolution(
        &mut self,
        resolution: [u32; 2],
    ) -> Result<(), PioneerError> {
        if resolution.contains(&0) {
            return Err(invalid(
                "Cannot set output resolution to a non-positive value",
            ));
        }
        self.resolution = resolution;
        Ok(())
    }

    /// Set the playback frame rate; must be positive and finite.
    pub fn set_target_fps(&mut self, fps: f64) -> Result<(), PioneerError> {
        if !is_positive(fps) {
            return Err(invalid(
                "Cannot set output target FPS to a non-positive value",
            ));
        }
        self.target_fps = fps;
        Ok(())
    }

    /// Set the fly-through length in seconds; must be positive and finite.
    pub fn set_target_duration(
        &mut self,
        seconds: f64,
    ) -> Result<(), PioneerError> {
        if !is_positive(seconds) {
            return Err(invalid(
                "Cannot set output target duration to a non-positive value",
            ));
        }
        self.target_duration = seconds;
        Ok(())
    }

    /// Set the frame output directory; it must exist and be writable.
    pub fn set_directory(&mut self, dir: &Path) -> Result<(), PioneerError> {
        let writable = std::fs::metadata(dir)
            .is_ok_and(|meta| meta.is_dir() && !meta.permissions().readonly());
        if !writable {
            return Err(PioneerError::InvalidOption(format!(
                "Cannot set directory to \"{}\" because it does not exist or \
                 it is not writable",
                dir.display()
            )));
        }
        dir.clone_into(&mut self.directory);
        Ok(())
    }

    /// Check values that may have bypassed the setters (e.g. loaded from
    /// TOML). The directory is not checked here; it only matters once an
    /// animation starts.
    pub fn validate(&self) -> Result<(), PioneerError> {
        let mut probe = self.clone();
        probe.set_resolution(self.resolution)?;
        probe.set_target_fps(self.target_fps)?;
        probe.set_target_duration(self.target_duration)
    }

    /// Number of frames a full animation exports.
    pub fn frame_count(&self) -> u64 {
        (self.target_fps * self.target_duration).ceil() as u64
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(msg: &str) -> PioneerError {
    PioneerError::InvalidOption(msg.to_owned())
}
