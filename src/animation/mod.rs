//! Camera path animation: waypoint recording, smooth splines through the
//! waypoints, constant-speed reparametrization and the playback state
//! machine that samples them once per frame.

mod arc_length;
mod path;
mod playback;
mod position_spline;
pub mod quaternion;
mod rotation_spline;
mod waypoints;

pub use arc_length::{ArcLengthSample, ArcLengthTable, STEP as ARC_LENGTH_STEP};
pub use path::CameraPath;
pub use playback::{
    PlaybackController, PlaybackEvent, PlaybackListener, PlaybackMode,
    PlaybackSession, PlaybackState,
};
pub use position_spline::PositionSpline;
pub use rotation_spline::RotationSpline;
pub use waypoints::{Waypoint, WaypointStore};
