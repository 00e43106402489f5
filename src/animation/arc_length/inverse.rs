use super::ArcLengthTable;

impl ArcLengthTable {
    /// Spline parameter at which the path has covered distance `s`.
    ///
    /// Brackets `s` between the first entry whose arc length exceeds it
    /// and its predecessor, searching only entries before the last one,
    /// and interpolates linearly. Values past either end extrapolate from
    /// the nearest bracket; the playback controller never asks for them.
    pub fn solve(&self, s: f64) -> f64 {
        let samples = self.samples();
        if samples.len() < 2 {
            return samples.first().map_or(0.0, |x| x.u);
        }

        let upper = samples[..samples.len() - 1]
            .partition_point(|x| x.s <= s)
            .max(1);
        let (lo, hi) = (samples[upper - 1], samples[upper]);

        let span = hi.s - lo.s;
        if span <= 0.0 {
            return lo.u;
        }
        let a = (s - lo.s) / span;
        (1.0 - a) * lo.u + a * hi.u
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use proptest::prelude::*;

    use crate::animation::position_spline::PositionSpline;
    use crate::animation::ArcLengthTable;

    fn curvy() -> PositionSpline {
        let positions = vec![
            DVec3::new(2.8, 1.32, 3.46),
            DVec3::new(2.1, 1.0, 2.2),
            DVec3::new(0.4, 0.9, 1.9),
            DVec3::new(-0.6, 1.5, 0.2),
            DVec3::new(-0.2, 2.4, -1.1),
        ];
        let rotations = vec![
            DVec3::new(0.0, 0.6, 0.0),
            DVec3::new(0.1, 0.9, 0.0),
            DVec3::new(-0.1, 1.6, 0.1),
            DVec3::new(0.3, 2.2, 0.0),
            DVec3::new(0.2, 2.8, -0.1),
        ];
        PositionSpline::new(&positions, &rotations).unwrap()
    }

    #[test]
    fn table_entries_round_trip() {
        let table = ArcLengthTable::build(&curvy());
        for sample in table.samples() {
            let u = table.solve(sample.s);
            assert!((u - sample.u).abs() < 1e-9, "{sample:?} -> {u}");
        }
    }

    #[test]
    fn start_maps_to_zero() {
        let table = ArcLengthTable::build(&curvy());
        assert_eq!(table.solve(0.0), 0.0);
    }

    #[test]
    fn interpolates_between_entries() {
        let table = ArcLengthTable::build(&curvy());
        let (a, b) = (table.samples()[10], table.samples()[11]);
        let u = table.solve((a.s + b.s) / 2.0);
        assert!((u - (a.u + b.u) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_tables() {
        assert_eq!(ArcLengthTable::default().solve(1.0), 0.0);
    }

    proptest! {
        #[test]
        fn solve_is_monotonic(
            points in prop::collection::vec(
                (-5.0..5.0_f64, -5.0..5.0_f64, -5.0..5.0_f64), 2..6),
            a in 0.0..1.0_f64,
            b in 0.0..1.0_f64,
        ) {
            let positions: Vec<DVec3> =
                points.iter().map(|&(x, y, z)| DVec3::new(x, y, z)).collect();
            let rotations = vec![DVec3::new(0.1, 0.3, 0.0); positions.len()];
            let spline = PositionSpline::new(&positions, &rotations).unwrap();
            let table = ArcLengthTable::build(&spline);
            let total = table.total_length();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            let u_lo = table.solve(lo * total);
            let u_hi = table.solve(hi * total);
            prop_assert!(u_lo <= u_hi + 1e-12);
            prop_assert!(u_hi <= spline.max_parameter());
            prop_assert!(u_lo >= 0.0);
        }
    }
}
