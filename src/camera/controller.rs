//! First-person fly camera driven by held input.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::{DVec2, DVec3};

use crate::camera::core::{look_direction, rotation_matrix, CameraPose};
use crate::options::CameraOptions;

/// Held input for one tick of free flight.
///
/// The host maps its key and mouse state onto this struct; the camera never
/// sees raw window events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementInput {
    /// Forward (+1) / backward (-1) thrust.
    pub forward: f64,
    /// Right (+1) / left (-1) strafe.
    pub strafe: f64,
    /// Counterclockwise (+1) / clockwise (-1) roll.
    pub roll: f64,
    /// Cursor offset from the viewport center in pixels (`center - cursor`).
    pub look_delta: DVec2,
}

impl MovementInput {
    /// Whether this input would move or turn the camera.
    pub fn is_idle(&self) -> bool {
        self.forward == 0.0
            && self.strafe == 0.0
            && self.roll == 0.0
            && self.look_delta == DVec2::ZERO
    }
}

/// First-person camera that flies through the scene.
///
/// Positions and rotations are stored rounded to four decimals so recorded
/// waypoints stay readable in preset files.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pose: CameraPose,
    move_speed: f64,
    look_speed: f64,
    roll_speed: f64,
}

impl FlyCamera {
    /// Camera placed at the configured start pose.
    pub fn new(options: &CameraOptions) -> Self {
        let mut camera = Self {
            pose: CameraPose::default(),
            move_speed: options.move_speed,
            look_speed: options.look_speed,
            roll_speed: options.roll_speed,
        };
        let _ = camera.set_position(DVec3::from_array(options.position));
        let _ = camera.set_rotation(DVec3::from_array(options.rotation));
        camera
    }

    /// Current pose.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Current position.
    pub fn position(&self) -> DVec3 {
        self.pose.position
    }

    /// Current Euler rotation in radians.
    pub fn rotation(&self) -> DVec3 {
        self.pose.rotation
    }

    /// Forward axis of the current rotation.
    pub fn look_direction(&self) -> DVec3 {
        look_direction(self.pose.rotation)
    }

    /// Move the camera. Returns true if the stored position changed.
    pub fn set_position(&mut self, position: DVec3) -> bool {
        let position = round4(position);
        if position == self.pose.position {
            return false;
        }
        self.pose.position = position;
        true
    }

    /// Turn the camera. Each angle is wrapped into (-2π, 2π).
    /// Returns true if the stored rotation changed.
    pub fn set_rotation(&mut self, rotation: DVec3) -> bool {
        let r = round4(rotation);
        let rotation = DVec3::new(r.x % TAU, r.y % TAU, r.z % TAU);
        if rotation == self.pose.rotation {
            return false;
        }
        self.pose.rotation = rotation;
        true
    }

    /// Set position and rotation together. Returns true if either changed.
    pub fn set_pose(&mut self, pose: CameraPose) -> bool {
        let moved = self.set_position(pose.position);
        let turned = self.set_rotation(pose.rotation);
        moved || turned
    }

    /// Apply one tick of held input. Returns true if the pose changed.
    pub fn update(&mut self, input: &MovementInput) -> bool {
        let mut force = DVec2::new(input.forward, input.strafe);
        if force.length_squared() > 1.0 {
            force = force.normalize();
        }

        let axes = rotation_matrix(self.pose.rotation);
        let position = self.pose.position
            + axes.x_axis * (force.y * self.move_speed)
            + axes.z_axis * (force.x * -self.move_speed);

        let mut rotation = self.pose.rotation
            + DVec3::new(
                input.look_delta.y * self.look_speed,
                input.look_delta.x * self.look_speed,
                input.roll * self.roll_speed,
            );
        // Looking further than straight up or down flips the view.
        rotation.x = rotation.x.clamp(-FRAC_PI_2, FRAC_PI_2);

        let moved = self.set_position(position);
        let turned = self.set_rotation(rotation);
        moved || turned
    }
}

fn round4(v: DVec3) -> DVec3 {
    (v * 1.0e4).round() / 1.0e4
}
