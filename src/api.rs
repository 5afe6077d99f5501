//! High-level convenience API.
//!
//! These functions wire an estimator, a scoring strategy, and the engine
//! together for the common fitting tasks shipped with the crate. Anything
//! beyond them (LMedS scoring, custom budgets, seed models) is available by
//! driving [`Consensus`](crate::core::Consensus) directly.

use crate::core::Consensus;
use crate::error::EstimationError;
use crate::estimators::{LineEstimator, PolynomialEstimator};
use crate::models::{Line, Polynomial};
use crate::scoring::RansacScoring;
use crate::settings::EngineSettings;
use crate::types::Point2;

/// Result of a high-level estimation run.
#[derive(Debug, Clone)]
pub struct EstimationResult<M, S> {
    /// The estimated model.
    pub model: M,
    /// Indices of inlier points under the run's threshold.
    pub inliers: Vec<usize>,
    /// Trial score of the winning model.
    pub score: S,
    /// Number of trials performed.
    pub trials: usize,
}

/// Robustly fit a 2-D line to `points` with RANSAC.
///
/// `threshold` is the inlier distance bound (perpendicular point-to-line
/// distance, in data units).
pub fn fit_line(
    points: &[Point2],
    threshold: f64,
    settings: Option<EngineSettings>,
) -> Result<EstimationResult<Line, usize>, EstimationError> {
    let mut engine = Consensus::new(
        LineEstimator::new(),
        RansacScoring::new(threshold),
        settings.unwrap_or_default(),
    );

    let estimate = engine.find_best(None, points, LineEstimator::SAMPLE_SIZE)?;
    let inliers = engine.find_inliers(&estimate.model, points)?;
    Ok(EstimationResult {
        model: estimate.model,
        inliers,
        score: estimate.score,
        trials: estimate.trials,
    })
}

/// Robustly fit a degree-`degree` polynomial to `points` with RANSAC.
///
/// `threshold` is the inlier bound on the vertical error `|y - p(x)|`.
pub fn fit_polynomial(
    points: &[Point2],
    degree: usize,
    threshold: f64,
    settings: Option<EngineSettings>,
) -> Result<EstimationResult<Polynomial, usize>, EstimationError> {
    let estimator = PolynomialEstimator::new(degree);
    let sample_size = estimator.sample_size();
    let mut engine = Consensus::new(
        estimator,
        RansacScoring::new(threshold),
        settings.unwrap_or_default(),
    );

    let estimate = engine.find_best(None, points, sample_size)?;
    let inliers = engine.find_inliers(&estimate.model, points)?;
    Ok(EstimationResult {
        model: estimate.model,
        inliers,
        score: estimate.score,
        trials: estimate.trials,
    })
}
