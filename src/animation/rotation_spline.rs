//! SQUAD rotation spline through the recorded waypoint rotations.

use glam::{DQuat, DVec3};

use super::quaternion::{squad, squad_tangent};
use crate::camera::{euler_from_quat, orientation};

/// Smooth orientation curve over the same `u ∈ [0, n - 1]` domain as
/// [`PositionSpline`](super::PositionSpline), independent of position.
///
/// Knots are the waypoint rotations as unit quaternions, flipped where
/// needed so consecutive knots lie in the same hemisphere. Each knot also
/// gets an inner control quaternion for the SQUAD blend. The first two
/// knots and the last knot use themselves; every other knot uses the tangent
/// built from its two neighbours.
#[derive(Debug, Clone)]
pub struct RotationSpline {
    rotations: Vec<DVec3>,
    knots: Vec<DQuat>,
    tangents: Vec<DQuat>,
}

impl RotationSpline {
    /// Build the spline from Euler rotations. Returns `None` with fewer than
    /// two waypoints.
    pub fn new(rotations: &[DVec3]) -> Option<Self> {
        if rotations.len() < 2 {
            return None;
        }

        let mut knots: Vec<DQuat> = Vec::with_capacity(rotations.len());
        for &rotation in rotations {
            let q = orientation(rotation);
            let q = match knots.last() {
                Some(prev) if prev.dot(q) < 0.0 => -q,
                _ => q,
            };
            knots.push(q);
        }

        let n = knots.len();
        let tangents = (0..n)
            .map(|i| {
                if i <= 1 || i + 1 == n {
                    knots[i]
                } else {
                    squad_tangent(knots[i - 1], knots[i], knots[i + 1])
                }
            })
            .collect();

        Some(Self {
            rotations: rotations.to_vec(),
            knots,
            tangents,
        })
    }

    /// Largest parameter value, `n - 1`.
    pub fn max_parameter(&self) -> f64 {
        (self.knots.len() - 1) as f64
    }

    /// Euler rotation (pitch, yaw, roll) at `u`.
    ///
    /// Outside `(0, n - 1)` the recorded first or last rotation is returned
    /// unchanged.
    pub fn evaluate(&self, u: f64) -> DVec3 {
        if u <= 0.0 {
            return self.rotations[0];
        }
        if u >= self.max_parameter() {
            return self.rotations[self.rotations.len() - 1];
        }
        euler_from_quat(self.quaternion(u))
    }

    /// Interpolated unit quaternion at `u`, clamped to the parameter range.
    pub fn quaternion(&self, u: f64) -> DQuat {
        let u = u.clamp(0.0, self.max_parameter());
        let i = (u.floor() as usize).min(self.knots.len() - 2);
        let h = u - i as f64;
        squad(
            self.knots[i],
            self.knots[i + 1],
            self.tangents[i],
            self.tangents[i + 1],
            h,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn same_rotation(a: DVec3, b: DVec3) -> bool {
        let (qa, qb) = (orientation(a), orientation(b));
        qa.dot(qb).abs() > 1.0 - 1e-10
    }

    #[test]
    fn needs_two_rotations() {
        assert!(RotationSpline::new(&[]).is_none());
        assert!(RotationSpline::new(&[DVec3::ZERO]).is_none());
    }

    #[test]
    fn endpoints_are_exact() {
        let rotations = vec![
            DVec3::new(0.1, 0.2, 0.0),
            DVec3::new(-0.4, 1.0, 0.1),
            DVec3::new(0.3, 2.0, -0.2),
        ];
        let spline = RotationSpline::new(&rotations).unwrap();
        assert_eq!(spline.evaluate(0.0), rotations[0]);
        assert_eq!(spline.evaluate(-1.0), rotations[0]);
        assert_eq!(spline.evaluate(2.0), rotations[2]);
        assert_eq!(spline.evaluate(9.0), rotations[2]);
    }

    #[test]
    fn interior_knots_are_hit() {
        let rotations = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.2, 0.5, 0.0),
            DVec3::new(0.1, 1.1, 0.05),
            DVec3::new(-0.3, 1.4, 0.0),
            DVec3::new(-0.1, 2.0, 0.1),
        ];
        let spline = RotationSpline::new(&rotations).unwrap();
        for (i, r) in rotations.iter().enumerate() {
            let q = spline.quaternion(i as f64);
            assert!(q.dot(orientation(*r)).abs() > 1.0 - 1e-10, "knot {i}");
        }
    }

    #[test]
    fn last_segment_blends_next_to_last_tangent() {
        let rotations = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.3, 0.6, -0.1),
            DVec3::new(-0.2, 1.3, 0.2),
            DVec3::new(0.4, 1.9, -0.3),
            DVec3::new(-0.1, 2.8, 0.1),
        ];
        let spline = RotationSpline::new(&rotations).unwrap();

        let mut knots: Vec<DQuat> = Vec::new();
        for r in rotations {
            let q = orientation(r);
            let q = match knots.last() {
                Some(prev) if prev.dot(q) < 0.0 => -q,
                _ => q,
            };
            knots.push(q);
        }
        let s3 = squad_tangent(knots[2], knots[3], knots[4]);
        assert!(s3.dot(knots[3]).abs() < 1.0 - 1e-6);

        let expected = knots[3]
            .slerp(knots[4], 0.5)
            .slerp(s3.slerp(knots[4], 0.5), 0.5);
        assert!(spline.quaternion(3.5).dot(expected).abs() > 1.0 - 1e-12);
    }

    #[test]
    fn constant_rotation_stays_constant() {
        let r = DVec3::new(0.3, -1.2, 0.1);
        let spline = RotationSpline::new(&[r; 4]).unwrap();
        for k in 0..=30 {
            let u = f64::from(k) / 10.0;
            assert!(same_rotation(spline.evaluate(u), r), "u={u}");
        }
    }

    #[test]
    fn two_knots_reduce_to_slerp() {
        let a = DVec3::ZERO;
        let b = DVec3::new(0.0, FRAC_PI_2, 0.0);
        let spline = RotationSpline::new(&[a, b]).unwrap();
        let mid = spline.evaluate(0.5);
        assert!(mid.abs_diff_eq(DVec3::new(0.0, FRAC_PI_2 / 2.0, 0.0), 1e-9));
    }

    #[test]
    fn wrapped_angles_take_the_short_way() {
        // Yaw 3.0 and -3.0 are 0.28 rad apart through ±π.
        let spline = RotationSpline::new(&[
            DVec3::new(0.0, 3.0, 0.0),
            DVec3::new(0.0, -3.0, 0.0),
        ])
        .unwrap();
        let mid = spline.evaluate(0.5);
        assert!(same_rotation(mid, DVec3::new(0.0, std::f64::consts::PI, 0.0)));
    }
}
