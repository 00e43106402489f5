//! Catmull-Rom position spline through the recorded waypoints.
//!
//! Pure `DVec3` math with no knowledge of playback timing.

use glam::{DMat4, DVec3, DVec4};

use crate::camera::look_direction;

/// Catmull-Rom characteristic matrix, columns are basis-power coefficients
/// for the four control points.
const CATMULL_ROM: DMat4 = DMat4::from_cols_array(&[
    0.0, 2.0, 0.0, 0.0, //
    -1.0, 0.0, 1.0, 0.0, //
    2.0, -5.0, 4.0, -1.0, //
    -1.0, 3.0, -3.0, 1.0,
]);

/// Spline tension.
const TAU: f64 = 0.5;

/// Piecewise cubic curve through every waypoint position, parametrized by
/// `u ∈ [0, n - 1]` where integer `u` lands exactly on waypoint `u`.
///
/// Catmull-Rom needs a control point on each side of every segment. At the
/// two ends of the path the missing neighbour is synthesized one unit
/// against (start) or along (end) the recorded look direction, so the curve
/// leaves the first waypoint and arrives at the last one heading where the
/// camera was looking. A two-waypoint path therefore still produces a
/// well-defined curve.
#[derive(Debug, Clone)]
pub struct PositionSpline {
    points: Vec<DVec3>,
    lead_in: DVec3,
    lead_out: DVec3,
}

impl PositionSpline {
    /// Build the spline from index-aligned positions and rotations.
    ///
    /// Returns `None` with fewer than two waypoints.
    pub fn new(positions: &[DVec3], rotations: &[DVec3]) -> Option<Self> {
        let (&first, &last) = (positions.first()?, positions.last()?);
        if positions.len() < 2 || rotations.len() != positions.len() {
            return None;
        }
        let lead_in = first - look_direction(rotations[0]);
        let lead_out = last + look_direction(rotations[rotations.len() - 1]);
        Some(Self {
            points: positions.to_vec(),
            lead_in,
            lead_out,
        })
    }

    /// Number of waypoints the spline passes through.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a spline has at least two waypoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest parameter value, `n - 1`.
    pub fn max_parameter(&self) -> f64 {
        (self.points.len() - 1) as f64
    }

    /// Evaluate the curve (or its exact first derivative) at `u`.
    ///
    /// Outside `(0, n - 1)` the curve is flat: positions clamp to the first
    /// or last waypoint and the derivative is zero.
    pub fn evaluate(&self, u: f64, derivative: bool) -> DVec3 {
        let last = self.points.len() - 1;
        if u <= 0.0 || u >= self.max_parameter() {
            if derivative {
                return DVec3::ZERO;
            }
            return if u <= 0.0 {
                self.points[0]
            } else {
                self.points[last]
            };
        }

        let i = u.floor() as usize;
        let h = u - i as f64;
        let basis = if derivative {
            DVec4::new(0.0, 1.0, 2.0 * h, 3.0 * h * h)
        } else {
            DVec4::new(1.0, h, h * h, h * h * h)
        };

        let p0 = if i == 0 { self.lead_in } else { self.points[i - 1] };
        let p1 = self.points[i];
        let p2 = self.points[i + 1];
        let p3 = if i + 1 == last {
            self.lead_out
        } else {
            self.points[i + 2]
        };

        let w = CATMULL_ROM * basis * TAU;
        p0 * w.x + p1 * w.y + p2 * w.z + p3 * w.w
    }

    /// Position at `u`.
    pub fn position(&self, u: f64) -> DVec3 {
        self.evaluate(u, false)
    }

    /// Velocity `dP/du` at `u`.
    pub fn velocity(&self, u: f64) -> DVec3 {
        self.evaluate(u, true)
    }
}
