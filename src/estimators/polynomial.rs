//! Polynomial curve estimator.

use nalgebra::{DMatrix, DVector};

use crate::core::Estimator;
use crate::models::Polynomial;
use crate::types::{Dataset, Point2};

/// Fits a degree-`d` polynomial `y = c0 + c1 x + ... + cd x^d` through a
/// minimal sample of `d + 1` points by solving the Vandermonde system with an
/// LU decomposition. The residual is the signed vertical error `y - p(x)`.
#[derive(Debug, Clone, Copy)]
pub struct PolynomialEstimator {
    degree: usize,
}

impl PolynomialEstimator {
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Minimal sample size: one point per coefficient.
    pub fn sample_size(&self) -> usize {
        self.degree + 1
    }
}

impl<D> Estimator<D> for PolynomialEstimator
where
    D: Dataset<Datum = Point2> + ?Sized,
{
    type Model = Polynomial;

    fn estimate_model(&self, data: &D, sample: &[usize]) -> Vec<Polynomial> {
        let m = self.sample_size();
        if sample.len() < m {
            return Vec::new();
        }

        let vandermonde = DMatrix::from_fn(m, m, |row, col| {
            data.datum(sample[row]).x.powi(col as i32)
        });
        let rhs = DVector::from_fn(m, |row, _| data.datum(sample[row]).y);

        // Duplicate abscissae make the system singular; the trial is then
        // degenerate.
        match vandermonde.lu().solve(&rhs) {
            Some(coeffs) => vec![Polynomial::new(coeffs.iter().copied().collect())],
            None => Vec::new(),
        }
    }

    fn residual(&self, model: &Polynomial, datum: &Point2) -> f64 {
        datum.y - model.eval(datum.x)
    }

    fn is_degenerate(&self, data: &D, sample: &[usize]) -> bool {
        if sample.len() < self.sample_size() {
            return true;
        }
        // Two sample points sharing an abscissa cannot be interpolated by a
        // function of x.
        for i in 0..sample.len() {
            for j in (i + 1)..sample.len() {
                let dx = data.datum(sample[i]).x - data.datum(sample[j]).x;
                if dx.abs() < 1e-12 {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn interpolates_minimal_sample_exactly() {
        // y = 1 + 2x + x^2 sampled at x = -1, 0, 2.
        let data = vec![
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(2.0, 9.0),
        ];
        let estimator = PolynomialEstimator::new(2);
        assert_eq!(estimator.sample_size(), 3);

        let models = estimator.estimate_model(&data, &[0, 1, 2]);
        assert_eq!(models.len(), 1);

        let poly = &models[0];
        assert_relative_eq!(poly.coeffs[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(poly.coeffs[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(poly.coeffs[2], 1.0, epsilon = 1e-9);

        for p in &data {
            assert_relative_eq!(
                Estimator::<[Point2]>::residual(&estimator, poly, p),
                0.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn duplicate_abscissae_are_degenerate() {
        let data = vec![
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 5.0),
            Point2::new(2.0, 9.0),
        ];
        let estimator = PolynomialEstimator::new(2);

        assert!(estimator.is_degenerate(&data, &[0, 1, 2]));
        assert!(estimator.estimate_model(&data, &[0, 1, 2]).is_empty());
    }

    #[test]
    fn residual_is_signed_vertical_error() {
        let poly = Polynomial::new(vec![1.0, 2.0]);
        let estimator = PolynomialEstimator::new(1);

        assert_relative_eq!(
            Estimator::<[Point2]>::residual(&estimator, &poly, &Point2::new(1.0, 5.0)),
            2.0
        );
        assert_relative_eq!(
            Estimator::<[Point2]>::residual(&estimator, &poly, &Point2::new(1.0, 1.0)),
            -2.0
        );
    }
}
