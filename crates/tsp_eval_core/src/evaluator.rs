use crate::{Error, Instance, Point, Result, Tour};

/// Closed-tour length evaluation over an (instance, tour) pair.
pub struct TourEvaluator;

impl TourEvaluator {
    /// Length of the closed tour, including the edge from the last visited
    /// point back to the first.
    ///
    /// The tour must have exactly one entry per instance point and every entry
    /// must name an existing point. With `strict` the order must also be a
    /// permutation; without it repeated entries are accepted and simply
    /// evaluated.
    pub fn length(instance: &Instance, tour: &Tour, strict: bool) -> Result<f64> {
        let visited = Self::visit_order(instance, tour, strict)?;
        Ok(Self::closed_length(&visited))
    }

    /// Same validation as [`TourEvaluator::length`], reporting per-edge statistics.
    pub fn metrics(instance: &Instance, tour: &Tour, strict: bool) -> Result<TourMetrics> {
        let visited = Self::visit_order(instance, tour, strict)?;
        let n = visited.len();

        if n < 2 {
            log::info!("metrics: n < 2 so there's nothing to report");
            return Ok(TourMetrics::default());
        }

        let (total, longest) = Self::edges(&visited)
            .fold((0.0, 0.0_f64), |(total, longest), d| (total + d, longest.max(d)));
        let average = total / (n as f64);

        log::info!("metrics: n={n} total={total:.3} longest={longest:.3} avg={average:.3}");

        Ok(TourMetrics {
            total,
            longest,
            average,
        })
    }

    /// Fails unless `order` holds every index of `0..n` exactly once.
    pub fn check_permutation(order: &[i64], n: usize) -> Result<()> {
        if order.len() != n {
            return Err(Self::size_mismatch(order.len(), n));
        }

        let mut seen = vec![false; n];
        for (pos, &idx) in order.iter().enumerate() {
            let Some(slot) = usize::try_from(idx).ok().and_then(|i| seen.get_mut(i)) else {
                return Err(Self::out_of_range(pos, idx, n));
            };
            if *slot {
                return Err(Error::validation(format!(
                    "Tour position {pos}: index {idx} appears more than once"
                )));
            }
            *slot = true;
        }
        Ok(())
    }

    fn visit_order(instance: &Instance, tour: &Tour, strict: bool) -> Result<Vec<Point>> {
        let n = instance.n();
        if tour.len() != n {
            return Err(Self::size_mismatch(tour.len(), n));
        }
        if strict {
            Self::check_permutation(tour.order(), n)?;
        }

        tour.order()
            .iter()
            .enumerate()
            .map(|(pos, &idx)| {
                usize::try_from(idx)
                    .ok()
                    .and_then(|i| instance.get(i))
                    .ok_or_else(|| Self::out_of_range(pos, idx, n))
            })
            .collect()
    }

    fn closed_length(points: &[Point]) -> f64 {
        Self::edges(points).sum()
    }

    fn edges(points: &[Point]) -> impl Iterator<Item = f64> + '_ {
        let n = points.len();
        (0..n).map(move |i| points[i].dist(&points[(i + 1) % n]))
    }

    fn size_mismatch(len: usize, n: usize) -> Error {
        Error::validation(format!("Tour has {len} entries but the instance has {n} points"))
    }

    fn out_of_range(pos: usize, idx: i64, n: usize) -> Error {
        Error::validation(format!(
            "Tour position {pos}: index {idx} is outside 0..{n}"
        ))
    }
}

/// Edge statistics of a closed tour.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TourMetrics {
    pub total: f64,
    pub longest: f64,
    pub average: f64,
}

#[cfg(test)]
mod tests {
    use super::{TourEvaluator, TourMetrics};
    use crate::{Error, Instance, Point, Tour};

    fn triangle() -> Instance {
        Instance::new(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 4.0),
        ])
    }

    fn square() -> Instance {
        Instance::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 2.0),
        ])
    }

    #[test]
    fn length_closes_the_cycle() {
        let length =
            TourEvaluator::length(&triangle(), &Tour::from(vec![0, 1, 2]), false).expect("length");
        assert!((length - 12.0).abs() < 1e-12);
    }

    #[test]
    fn reversed_triangle_has_same_length() {
        let forward =
            TourEvaluator::length(&triangle(), &Tour::from(vec![0, 1, 2]), true).expect("length");
        let reversed =
            TourEvaluator::length(&triangle(), &Tour::from(vec![0, 2, 1]), true).expect("length");
        assert!((forward - reversed).abs() < 1e-12);
    }

    #[test]
    fn length_is_invariant_under_rotation_and_reversal() {
        let instance = square();
        let order = vec![0, 4, 2, 1, 3];
        let base = TourEvaluator::length(&instance, &Tour::from(order.clone()), true)
            .expect("length");

        for shift in 0..order.len() {
            let mut rotated = order.clone();
            rotated.rotate_left(shift);
            let length =
                TourEvaluator::length(&instance, &Tour::from(rotated.clone()), true).expect("length");
            assert!((length - base).abs() < 1e-9, "rotation {shift}");

            rotated.reverse();
            let length =
                TourEvaluator::length(&instance, &Tour::from(rotated), true).expect("length");
            assert!((length - base).abs() < 1e-9, "reversed rotation {shift}");
        }
    }

    #[test]
    fn degenerate_tours_have_zero_length() {
        for strict in [false, true] {
            let empty = TourEvaluator::length(&Instance::default(), &Tour::default(), strict)
                .expect("empty");
            assert_eq!(empty, 0.0);

            let single = Instance::new(vec![Point::new(7.0, -3.0)]);
            let length =
                TourEvaluator::length(&single, &Tour::from(vec![0]), strict).expect("single");
            assert_eq!(length, 0.0);
        }
    }

    #[test]
    fn length_rejects_size_mismatch() {
        let err = TourEvaluator::length(&triangle(), &Tour::from(vec![0, 1]), false)
            .expect_err("short tour");
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("Tour has 2 entries but the instance has 3 points"));
    }

    #[test]
    fn non_strict_length_accepts_repeated_indices() {
        let length = TourEvaluator::length(&triangle(), &Tour::from(vec![0, 0, 1]), false)
            .expect("repeated index is evaluated");
        assert!((length - 6.0).abs() < 1e-12);
    }

    #[test]
    fn strict_length_rejects_repeated_indices() {
        let err = TourEvaluator::length(&triangle(), &Tour::from(vec![0, 0, 1]), true)
            .expect_err("duplicate");
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("Tour position 1: index 0 appears more than once"));
    }

    #[test]
    fn out_of_range_indices_fail_in_both_modes() {
        for strict in [false, true] {
            for bad in [3, -1] {
                let err = TourEvaluator::length(&triangle(), &Tour::from(vec![0, bad, 1]), strict)
                    .expect_err("out of range");
                assert!(err.to_string().contains(&format!("index {bad} is outside 0..3")));
            }
        }
    }

    #[test]
    fn check_permutation_accepts_any_order_of_all_indices() {
        assert!(TourEvaluator::check_permutation(&[2, 0, 1], 3).is_ok());
        assert!(TourEvaluator::check_permutation(&[], 0).is_ok());
        assert!(TourEvaluator::check_permutation(&[0, 1], 3).is_err());
    }

    #[test]
    fn metrics_reports_total_longest_and_average() {
        let metrics = TourEvaluator::metrics(&triangle(), &Tour::from(vec![0, 1, 2]), true)
            .expect("metrics");
        assert!((metrics.total - 12.0).abs() < 1e-12);
        assert!((metrics.longest - 5.0).abs() < 1e-12);
        assert!((metrics.average - 4.0).abs() < 1e-12);

        let single = Instance::new(vec![Point::new(1.0, 1.0)]);
        let metrics =
            TourEvaluator::metrics(&single, &Tour::from(vec![0]), true).expect("metrics");
        assert_eq!(metrics, TourMetrics::default());
    }
}
