//! Fractal transform options and the keyframe wobble applied to them.

use std::f64::consts::TAU;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Angular frequency of the fractal wobble per keyframe.
pub const WOBBLE_FREQUENCY: f64 = 0.0003;

/// Amplitude of the fractal wobble in radians.
pub const WOBBLE_AMPLITUDE: f64 = 0.3;

/// Number of keyframes in one full wobble period; the fractal keyframe clock
/// wraps here.
pub const KEYFRAME_PERIOD: i64 = (TAU / WOBBLE_FREQUENCY) as i64;

/// Fractal transform, exposure and orbit-trap color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fractal", inline)]
#[serde(default)]
pub struct FractalOptions {
    /// Fractal scale factor.
    #[schemars(title = "Scale", range(min = 0.5, max = 3.0), extend("step" = 0.01))]
    pub scale: f32,
    /// Fractal translation.
    #[schemars(skip)]
    pub shift: [f32; 3],
    /// Fractal fold rotation.
    #[schemars(skip)]
    pub rotation: [f32; 3],
    /// Amount of light reaching the camera.
    #[schemars(title = "Exposure", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub exposure: f32,
    /// Orbit-trap color (linear RGB, 0..1).
    #[schemars(skip)]
    pub color: [f32; 3],
}

impl Default for FractalOptions {
    fn default() -> Self {
        Self {
            scale: 1.77,
            shift: [-2.08, -1.42, -1.93],
            rotation: [5.52, 0.0, -0.22],
            exposure: 1.0,
            color: rgb8([107, 97, 49]),
        }
    }
}

impl FractalOptions {
    /// Set the orbit-trap color from 8-bit RGB.
    pub fn set_color_rgb8(&mut self, rgb: [u8; 3]) {
        self.color = rgb8(rgb);
    }

    /// Fold rotation at `keyframe`, with the slow sinusoidal wobble applied
    /// to the X component.
    pub fn animated_rotation(&self, keyframe: i64) -> [f32; 3] {
        let wobble =
            WOBBLE_AMPLITUDE * (keyframe as f64 * WOBBLE_FREQUENCY).sin();
        let [x, y, z] = self.rotation;
        [x + wobble as f32, y, z]
    }
}

/// Wrap a keyframe into `[0, KEYFRAME_PERIOD)`.
pub fn wrap_keyframe(keyframe: i64) -> i64 {
    keyframe.rem_euclid(KEYFRAME_PERIOD)
}

/// Convert 8-bit RGB into normalized floats.
pub(crate) fn rgb8(rgb: [u8; 3]) -> [f32; 3] {
    rgb.map(|c| f32::from(c) / 255.0)
}
