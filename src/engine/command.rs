//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a panel
//! button or a script, is represented as a `PioneerCommand`. Consumers
//! construct commands and pass them to
//! [`PioneerEngine::execute`](super::PioneerEngine::execute).

use std::path::PathBuf;

use crate::animation::PlaybackMode;
use crate::camera::{CameraPose, MovementInput};
use crate::demo::Preset;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(PioneerCommand::AddWaypoint, &mut ());
/// engine.execute(PioneerCommand::SetTargetFps { fps: 30.0 }, &mut ());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PioneerCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Replace the held fly-camera input applied on every idle tick.
    SetMovement {
        /// Thrust, strafe, roll and look delta.
        input: MovementInput,
    },

    /// Teleport the camera.
    SetCameraPose {
        /// New pose; rounded to four decimals like every camera pose.
        pose: CameraPose,
    },

    // ── Waypoints ───────────────────────────────────────────────────
    /// Record the current camera pose as a waypoint.
    AddWaypoint,

    /// Record an explicit pose as a waypoint.
    AddWaypointAt {
        /// Pose to record.
        pose: CameraPose,
    },

    /// Drop the most recent waypoint.
    RemoveLastWaypoint,

    /// Drop every waypoint.
    ClearWaypoints,

    /// Load a preset's waypoints, keyframe, duration and color.
    ApplyPreset {
        /// Preset to load.
        preset: Preset,
    },

    // ── Playback ────────────────────────────────────────────────────
    /// Fly the path in real time.
    Preview,

    /// Fly the path and export one frame per tick.
    Animate,

    /// Stop the running preview, animation or demo.
    Cancel,

    /// Play the built-in presets back to back.
    PlayDemo {
        /// Whether each preset is previewed or rendered.
        mode: PlaybackMode,
    },

    // ── Scene ───────────────────────────────────────────────────────
    /// Point the scene light along the camera's look direction.
    AlignLight,

    /// Jump the fractal animation clock.
    SetFractalKeyframe {
        /// New keyframe; wrapped into one wobble period.
        keyframe: i64,
    },

    /// Set the fractal base color.
    SetFractalColor {
        /// 8-bit RGB.
        rgb: [u8; 3],
    },

    // ── Output ──────────────────────────────────────────────────────
    /// Playback frame rate.
    SetTargetFps {
        /// Frames per second; must be positive.
        fps: f64,
    },

    /// Length of the whole flight.
    SetTargetDuration {
        /// Seconds; must be positive.
        seconds: f64,
    },

    /// Exported frame size.
    SetResolution {
        /// Width and height in pixels; both must be positive.
        resolution: [u32; 2],
    },

    /// Directory receiving exported frames.
    SetOutputDirectory {
        /// Existing, writable directory.
        path: PathBuf,
    },
}
