//! Camera pose and the Euler-angle conventions shared by the crate.
//!
//! Rotations are stored as (pitch, yaw, roll) and composed as
//! `Ry(yaw) * Rx(pitch) * Rz(roll)`; the look direction is the resulting
//! z axis.

use glam::{DMat3, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Camera position and orientation at one instant.
///
/// `rotation` holds Euler angles in radians: `x` is pitch about the X axis,
/// `y` is yaw about the Y axis and `z` is roll about the Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPose {
    /// World-space position in scene units.
    pub position: DVec3,
    /// Euler angles (pitch, yaw, roll) in radians.
    pub rotation: DVec3,
}

impl CameraPose {
    /// Pose from a position and Euler rotation.
    pub fn new(position: DVec3, rotation: DVec3) -> Self {
        Self { position, rotation }
    }

    /// Forward axis of this pose's rotation.
    pub fn look_direction(&self) -> DVec3 {
        look_direction(self.rotation)
    }
}

/// Unit quaternion for an Euler rotation.
///
/// Yaw is applied first about the world-up Y axis, then pitch about X, then
/// roll about Z (`Ry · Rx · Rz`), so the camera behaves like a first-person
/// view rather than a flight simulator.
pub fn orientation(rotation: DVec3) -> DQuat {
    DQuat::from_euler(EulerRot::YXZ, rotation.y, rotation.x, rotation.z)
}

/// Rotation matrix for an Euler rotation.
pub fn rotation_matrix(rotation: DVec3) -> DMat3 {
    DMat3::from_quat(orientation(rotation))
}

/// Forward (Z) axis of the rotation matrix built from `rotation`.
pub fn look_direction(rotation: DVec3) -> DVec3 {
    rotation_matrix(rotation).z_axis
}

/// Euler angles (pitch, yaw, roll) of a unit quaternion, inverse of
/// [`orientation`].
pub fn euler_from_quat(q: DQuat) -> DVec3 {
    let (yaw, pitch, roll) = q.to_euler(EulerRot::YXZ);
    DVec3::new(pitch, yaw, roll)
}
