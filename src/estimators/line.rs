//! 2-D line estimator.

use crate::core::Estimator;
use crate::models::Line;
use crate::types::{Dataset, Point2};

/// Fits lines of the form `ax + by + c = 0` (normalized so `a^2 + b^2 = 1`)
/// through minimal samples of two points. The residual is the signed
/// perpendicular point-to-line distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineEstimator;

impl LineEstimator {
    /// Two points determine a line.
    pub const SAMPLE_SIZE: usize = 2;

    pub fn new() -> Self {
        Self
    }
}

impl<D> Estimator<D> for LineEstimator
where
    D: Dataset<Datum = Point2> + ?Sized,
{
    type Model = Line;

    fn estimate_model(&self, data: &D, sample: &[usize]) -> Vec<Line> {
        if sample.len() < Self::SAMPLE_SIZE {
            return Vec::new();
        }
        let p1 = data.datum(sample[0]);
        let p2 = data.datum(sample[1]);

        // Line through two points as the cross product of their homogeneous
        // coordinates; coincident points normalize to nothing.
        let a = p1.y - p2.y;
        let b = p2.x - p1.x;
        let c = p1.x * p2.y - p2.x * p1.y;

        Line::new(a, b, c).into_iter().collect()
    }

    fn residual(&self, model: &Line, datum: &Point2) -> f64 {
        model.signed_distance(datum.x, datum.y)
    }

    fn is_degenerate(&self, data: &D, sample: &[usize]) -> bool {
        if sample.len() < Self::SAMPLE_SIZE {
            return true;
        }
        let p1 = data.datum(sample[0]);
        let p2 = data.datum(sample[1]);
        let dx = p1.x - p2.x;
        let dy = p1.y - p2.y;
        dx * dx + dy * dy < 1e-10
    }
}
