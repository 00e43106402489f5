//! Recorded camera waypoints.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

/// One recorded camera sample along the intended path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Camera position in scene units.
    pub position: DVec3,
    /// Euler angles (pitch, yaw, roll) in radians.
    pub rotation: DVec3,
}

impl From<CameraPose> for Waypoint {
    fn from(pose: CameraPose) -> Self {
        Self {
            position: pose.position,
            rotation: pose.rotation,
        }
    }
}

/// Ordered, append-only list of recorded waypoints.
///
/// Positions and rotations are kept in two parallel vectors so the splines
/// can borrow each channel as a slice. The store is locked by the playback
/// controller while a session runs; every mutation is rejected (returns
/// `false`) until the session ends.
#[derive(Debug, Clone, Default)]
pub struct WaypointStore {
    positions: Vec<DVec3>,
    rotations: Vec<DVec3>,
    locked: bool,
}

impl WaypointStore {
    /// Empty, unlocked store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a waypoint at the end of the path.
    pub fn append(&mut self, position: DVec3, rotation: DVec3) -> bool {
        if self.reject("append") {
            return false;
        }
        self.positions.push(position);
        self.rotations.push(rotation);
        true
    }

    /// Drop the most recent waypoint, if any.
    pub fn remove_last(&mut self) -> bool {
        if self.reject("remove") || self.positions.is_empty() {
            return false;
        }
        let _ = self.positions.pop();
        let _ = self.rotations.pop();
        true
    }

    /// Remove every waypoint.
    pub fn clear(&mut self) -> bool {
        if self.reject("clear") {
            return false;
        }
        self.positions.clear();
        self.rotations.clear();
        true
    }

    /// Number of recorded waypoints.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no waypoints are recorded.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether a playback session currently holds the store.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Recorded positions in insertion order.
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Recorded rotations, index-aligned with [`Self::positions`].
    pub fn rotations(&self) -> &[DVec3] {
        &self.rotations
    }

    /// Waypoint at `index`.
    pub fn get(&self, index: usize) -> Option<Waypoint> {
        Some(Waypoint {
            position: *self.positions.get(index)?,
            rotation: *self.rotations.get(index)?,
        })
    }

    /// Iterate over the recorded waypoints in order.
    pub fn iter(&self) -> impl Iterator<Item = Waypoint> + '_ {
        self.positions
            .iter()
            .zip(&self.rotations)
            .map(|(&position, &rotation)| Waypoint { position, rotation })
    }

    pub(crate) fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    fn reject(&self, op: &str) -> bool {
        if self.locked {
            log::warn!("waypoint {op} ignored while playback is running");
        }
        self.locked
    }
}
