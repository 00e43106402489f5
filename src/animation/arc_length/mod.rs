//! Arc-length reparametrization of the position spline.
//!
//! The spline parameter `u` advances unevenly through space: segments
//! between distant waypoints are covered as quickly as short ones. The
//! table built here maps cumulative distance back to `u` so playback can
//! move at constant speed.

mod inverse;

use super::position_spline::PositionSpline;

/// Parameter step between consecutive table entries.
pub const STEP: f64 = 0.01;

/// 5-point Gauss-Legendre rule on `[-1, 1]` as `(node, weight)` pairs.
const GAUSS_LEGENDRE: [(f64, f64); 5] = [
    (0.0, 128.0 / 225.0),
    (-0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (-0.906_179_845_938_664, 0.236_926_885_056_189_1),
    (0.906_179_845_938_664, 0.236_926_885_056_189_1),
];

/// One table entry: distance travelled from the path start when the spline
/// parameter reaches `u`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLengthSample {
    /// Cumulative arc length up to `u`.
    pub s: f64,
    /// Spline parameter.
    pub u: f64,
}

/// Monotonic `(s, u)` table sampled every [`STEP`] of the spline parameter.
///
/// Built once per playback session and immutable afterwards. Each entry
/// records the distance accumulated *before* its own step, so the last
/// entry sits one step short of the path end and its `s` is the total
/// length used for pacing.
#[derive(Debug, Clone, Default)]
pub struct ArcLengthTable {
    samples: Vec<ArcLengthSample>,
}

impl ArcLengthTable {
    /// Integrate `‖dP/du‖` over the whole spline.
    pub fn build(spline: &PositionSpline) -> Self {
        let max_u = spline.max_parameter();
        let steps = (max_u / STEP).ceil() as usize;
        let mut samples = Vec::with_capacity(steps);

        let mut s = 0.0;
        let mut k = 0_usize;
        loop {
            let u = k as f64 * STEP;
            if u >= max_u {
                break;
            }
            samples.push(ArcLengthSample { s, u });
            s += segment_length(spline, u, u + STEP);
            k += 1;
        }

        log::debug!(
            "arc-length table: {} samples, length {:.4}",
            samples.len(),
            samples.last().map_or(0.0, |x| x.s)
        );
        Self { samples }
    }

    /// Table entries in ascending order.
    pub fn samples(&self) -> &[ArcLengthSample] {
        &self.samples
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total length used for pacing: the `s` of the last entry.
    pub fn total_length(&self) -> f64 {
        self.samples.last().map_or(0.0, |x| x.s)
    }
}

/// Length of the spline between `a` and `b` by Gauss-Legendre quadrature.
fn segment_length(spline: &PositionSpline, a: f64, b: f64) -> f64 {
    let half = (b - a) / 2.0;
    let mid = (a + b) / 2.0;
    GAUSS_LEGENDRE
        .iter()
        .map(|&(x, w)| w * spline.velocity(mid + half * x).length())
        .sum::<f64>()
        * half
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;

    fn straight(n: usize) -> PositionSpline {
        let positions: Vec<DVec3> =
            (0..n).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect();
        let rotations =
            vec![DVec3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0); n];
        PositionSpline::new(&positions, &rotations).unwrap()
    }

    #[test]
    fn samples_step_through_parameter_range() {
        let table = ArcLengthTable::build(&straight(3));
        assert_eq!(table.len(), 200);
        assert_eq!(table.samples()[0], ArcLengthSample { s: 0.0, u: 0.0 });
        let last = table.samples()[199];
        assert!((last.u - 1.99).abs() < 1e-12);
    }

    #[test]
    fn straight_line_length_is_exact() {
        // Unit-speed line: every entry's s equals its u.
        let table = ArcLengthTable::build(&straight(4));
        for sample in table.samples() {
            assert!((sample.s - sample.u).abs() < 1e-9, "{sample:?}");
        }
        assert!((table.total_length() - 2.99).abs() < 1e-9);
    }

    #[test]
    fn strictly_increasing() {
        let positions = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 2.0, 0.0),
            DVec3::new(3.0, 2.0, 1.0),
            DVec3::new(3.5, -1.0, 2.0),
        ];
        let rotations = vec![DVec3::new(0.2, 0.7, 0.0); 4];
        let spline = PositionSpline::new(&positions, &rotations).unwrap();
        let table = ArcLengthTable::build(&spline);
        for pair in table.samples().windows(2) {
            assert!(pair[1].s > pair[0].s);
            assert!(pair[1].u > pair[0].u);
        }
    }

    #[test]
    fn quadrature_weights_sum_to_two() {
        let total: f64 = GAUSS_LEGENDRE.iter().map(|(_, w)| w).sum();
        assert!((total - 2.0).abs() < 1e-12);
    }
}
