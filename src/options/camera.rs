//! Camera section.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Start pose and fly-camera sensitivities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
pub struct CameraOptions {
    /// Start position in scene units.
    #[schemars(skip)]
    pub position: [f64; 3],
    /// Start rotation as Euler angles (pitch, yaw, roll) in radians.
    #[schemars(skip)]
    pub rotation: [f64; 3],
    /// Distance travelled per tick while a movement key is held.
    #[schemars(title = "Move Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub move_speed: f64,
    /// Radians turned per pixel of mouse offset.
    #[schemars(title = "Look Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub look_speed: f64,
    /// Radians rolled per tick while a roll key is held.
    #[schemars(title = "Roll Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub roll_speed: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [2.80, 1.32, 3.46],
            rotation: [0.0; 3],
            move_speed: 0.01,
            look_speed: 0.005,
            roll_speed: 0.01,
        }
    }
}
