//! Immutable camera path snapshot used by one playback session.

use super::arc_length::ArcLengthTable;
use super::position_spline::PositionSpline;
use super::rotation_spline::RotationSpline;
use super::waypoints::WaypointStore;
use crate::camera::CameraPose;

/// Position spline, rotation spline and arc-length table built together
/// from one waypoint snapshot.
///
/// Later edits to the [`WaypointStore`] never reach an existing path.
#[derive(Debug, Clone)]
pub struct CameraPath {
    position: PositionSpline,
    rotation: RotationSpline,
    table: ArcLengthTable,
}

impl CameraPath {
    /// Build the full path from the current waypoints. Returns `None` with
    /// fewer than two.
    pub fn new(store: &WaypointStore) -> Option<Self> {
        let position = PositionSpline::new(store.positions(), store.rotations())?;
        let rotation = RotationSpline::new(store.rotations())?;
        let table = ArcLengthTable::build(&position);
        Some(Self {
            position,
            rotation,
            table,
        })
    }

    /// Position spline.
    pub fn position(&self) -> &PositionSpline {
        &self.position
    }

    /// Rotation spline.
    pub fn rotation(&self) -> &RotationSpline {
        &self.rotation
    }

    /// Arc-length table of the position spline.
    pub fn table(&self) -> &ArcLengthTable {
        &self.table
    }

    /// Total path length used for pacing.
    pub fn length(&self) -> f64 {
        self.table.total_length()
    }

    /// Pose at spline parameter `u`.
    pub fn sample(&self, u: f64) -> CameraPose {
        CameraPose::new(self.position.position(u), self.rotation.evaluate(u))
    }

    /// Pose after travelling distance `s` along the path.
    pub fn sample_at_arc_length(&self, s: f64) -> CameraPose {
        self.sample(self.table.solve(s))
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use proptest::prelude::*;

    use super::*;

    fn store(points: &[(DVec3, DVec3)]) -> WaypointStore {
        let mut store = WaypointStore::new();
        for &(p, r) in points {
            assert!(store.append(p, r));
        }
        store
    }

    #[test]
    fn needs_two_waypoints() {
        assert!(CameraPath::new(&WaypointStore::new()).is_none());
        assert!(CameraPath::new(&store(&[(DVec3::ZERO, DVec3::ZERO)])).is_none());
    }

    #[test]
    fn starts_at_first_waypoint() {
        let first = (DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.1, 0.2, 0.0));
        let path = CameraPath::new(&store(&[
            first,
            (DVec3::new(2.0, 2.0, 1.0), DVec3::new(0.0, 0.5, 0.0)),
            (DVec3::new(0.0, 1.0, 0.0), DVec3::new(-0.2, 1.0, 0.1)),
        ]))
        .unwrap();
        assert_eq!(path.sample_at_arc_length(0.0), CameraPose::new(first.0, first.1));
    }

    #[test]
    fn snapshot_ignores_later_edits() {
        let mut waypoints = store(&[
            (DVec3::ZERO, DVec3::ZERO),
            (DVec3::new(0.0, 0.0, 4.0), DVec3::ZERO),
        ]);
        let path = CameraPath::new(&waypoints).unwrap();
        let before = path.sample(0.5);
        assert!(waypoints.append(DVec3::splat(9.0), DVec3::ZERO));
        assert_eq!(path.sample(0.5), before);
        assert_eq!(path.position().len(), 2);
    }

    proptest! {
        #[test]
        fn constant_speed_on_straight_paths(
            len in 1.0..20.0_f64,
            n in 2_usize..6,
        ) {
            // Waypoints evenly spaced along +Z, looking down +Z.
            let step = len / (n - 1) as f64;
            let points: Vec<(DVec3, DVec3)> = (0..n)
                .map(|i| (DVec3::new(0.0, 0.0, i as f64 * step), DVec3::ZERO))
                .collect();
            let path = CameraPath::new(&store(&points)).unwrap();
            let total = path.length();
            let quarter = path.sample_at_arc_length(total * 0.25).position.z;
            let half = path.sample_at_arc_length(total * 0.5).position.z;
            prop_assert!((half - 2.0 * quarter).abs() < 1e-3 * len);
        }
    }
}
