//! Synthetic dataset generation for tests, benchmarks, and examples.
//!
//! Observers draw datasets from a known ground-truth model: each point is an
//! inlier with the configured probability (model value plus Gaussian noise)
//! or an outlier (uniform over the observer's range). The indices of the
//! points generated as inliers are reported alongside the data, so recovery
//! tests can compare an estimate against the actual consensus set.

use rand::distributions::Uniform;
use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::models::{Line, Polynomial};
use crate::types::Point2;

/// A generated dataset and the indices of its true inliers.
#[derive(Debug, Clone)]
pub struct SyntheticData {
    pub points: Vec<Point2>,
    pub true_inliers: Vec<usize>,
}

/// Generates noisy observations of a [`Polynomial`].
#[derive(Debug, Clone, Copy)]
pub struct PolynomialObserver {
    /// Abscissa range points are drawn from.
    pub x_range: (f64, f64),
    /// Ordinate range outliers are drawn from.
    pub y_range: (f64, f64),
}

impl Default for PolynomialObserver {
    fn default() -> Self {
        Self {
            x_range: (0.0, 640.0),
            y_range: (0.0, 480.0),
        }
    }
}

impl PolynomialObserver {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self { x_range, y_range }
    }

    /// Generate `count` points from `model`. Each point is an inlier with
    /// probability `inlier_ratio`, perturbed by Gaussian noise of standard
    /// deviation `noise_sigma` in both coordinates; otherwise its ordinate is
    /// uniform over the observer's y-range.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        model: &Polynomial,
        count: usize,
        noise_sigma: f64,
        inlier_ratio: f64,
        rng: &mut R,
    ) -> SyntheticData {
        generate_curve(
            |x| model.eval(x),
            self.x_range,
            self.y_range,
            count,
            noise_sigma,
            inlier_ratio,
            rng,
        )
    }
}

/// Generates noisy observations of a non-vertical [`Line`].
#[derive(Debug, Clone, Copy)]
pub struct LineObserver {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl LineObserver {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self { x_range, y_range }
    }

    /// Generate `count` points from `model`, which must not be vertical.
    /// Inlier/outlier mechanics match [`PolynomialObserver::generate`].
    pub fn generate<R: Rng + ?Sized>(
        &self,
        model: &Line,
        count: usize,
        noise_sigma: f64,
        inlier_ratio: f64,
        rng: &mut R,
    ) -> SyntheticData {
        let slope = model.slope().unwrap_or(0.0);
        let intercept = model.intercept().unwrap_or(0.0);
        generate_curve(
            |x| slope * x + intercept,
            self.x_range,
            self.y_range,
            count,
            noise_sigma,
            inlier_ratio,
            rng,
        )
    }
}

fn generate_curve<F, R>(
    curve: F,
    x_range: (f64, f64),
    y_range: (f64, f64),
    count: usize,
    noise_sigma: f64,
    inlier_ratio: f64,
    rng: &mut R,
) -> SyntheticData
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    let x_dist = Uniform::new_inclusive(x_range.0, x_range.1);
    let y_dist = Uniform::new_inclusive(y_range.0, y_range.1);
    let vote_dist = Uniform::new(0.0, 1.0);

    let mut points = Vec::with_capacity(count);
    let mut true_inliers = Vec::new();

    for i in 0..count {
        let x = rng.sample(x_dist);
        if rng.sample(vote_dist) > inlier_ratio {
            points.push(Point2::new(x, rng.sample(y_dist)));
        } else {
            let nx: f64 = rng.sample(StandardNormal);
            let ny: f64 = rng.sample(StandardNormal);
            points.push(Point2::new(
                x + noise_sigma * nx,
                curve(x) + noise_sigma * ny,
            ));
            true_inliers.push(i);
        }
    }

    SyntheticData {
        points,
        true_inliers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn generates_requested_count_with_marked_inliers() {
        let mut rng = StdRng::seed_from_u64(3);
        let observer = LineObserver::new((0.0, 10.0), (-20.0, 20.0));
        let truth = Line::from_slope_intercept(2.0, 1.0);

        let data = observer.generate(&truth, 100, 0.1, 0.6, &mut rng);

        assert_eq!(data.points.len(), 100);
        // Binomial(100, 0.6) stays well inside this interval.
        assert!((35..=85).contains(&data.true_inliers.len()));
        assert!(data.true_inliers.windows(2).all(|w| w[0] < w[1]));
        assert!(data.true_inliers.iter().all(|&i| i < 100));
    }

    #[test]
    fn marked_inliers_lie_near_the_curve() {
        let mut rng = StdRng::seed_from_u64(11);
        let observer = PolynomialObserver::new((0.0, 5.0), (-50.0, 50.0));
        let truth = Polynomial::new(vec![1.0, 2.0, 1.0]);

        let data = observer.generate(&truth, 80, 0.05, 0.7, &mut rng);

        for &i in &data.true_inliers {
            let p = data.points[i];
            let vertical_error = (p.y - truth.eval(p.x)).abs();
            // Noise in x is amplified by the curve slope (at most ~12 on this
            // range), so allow a generous band.
            assert!(vertical_error < 5.0, "index {i} error {vertical_error}");
        }
    }

    #[test]
    fn zero_noise_inliers_sit_exactly_on_the_line() {
        let mut rng = StdRng::seed_from_u64(5);
        let observer = LineObserver::new((0.0, 10.0), (-20.0, 20.0));
        let truth = Line::from_slope_intercept(-1.0, 3.0);

        let data = observer.generate(&truth, 50, 0.0, 1.0, &mut rng);

        assert_eq!(data.true_inliers.len(), 50);
        for p in &data.points {
            assert!((p.y - (-p.x + 3.0)).abs() < 1e-12);
        }
    }
}
