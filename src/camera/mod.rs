//! Camera system for flying through the fractal scene.
//!
//! Provides the pose type shared by the whole crate, the Euler-angle
//! conventions, and a first-person fly camera driven by held input.

pub mod controller;
pub mod core;

pub use self::controller::{FlyCamera, MovementInput};
pub use self::core::{
    euler_from_quat, look_direction, orientation, rotation_matrix, CameraPose,
};
