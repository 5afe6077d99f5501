//! Scoring strategies for candidate models.
//!
//! A [`Scoring`] strategy turns the residuals of a candidate model over the
//! whole dataset into a single trial score, and owns the comparison direction
//! for "better than". [`RansacScoring`] counts inliers (larger is better);
//! [`LmedsScoring`] takes the median squared residual (smaller is better).

/// Quality measure for one candidate model over the whole dataset.
///
/// `better` is a *strict* comparison: a candidate that merely ties the
/// incumbent never replaces it, so the earliest-found model wins ties.
pub trait Scoring {
    /// Trial score type.
    type Score: Clone + std::fmt::Debug;

    /// Compute the score from one residual per dataset sample, in dataset
    /// order.
    fn score<I>(&self, residuals: I) -> Self::Score
    where
        I: Iterator<Item = f64>;

    /// Whether `candidate` strictly improves on `incumbent`.
    fn better(&self, candidate: &Self::Score, incumbent: &Self::Score) -> bool;

    /// Best inlier-ratio estimate this score implies, if the strategy has a
    /// natural one. Feeds the adaptive trial budget.
    fn inlier_ratio(&self, _score: &Self::Score, _dataset_size: usize) -> Option<f64> {
        None
    }

    /// Threshold usable for inlier extraction, if the strategy carries one.
    fn inlier_threshold(&self) -> Option<f64> {
        None
    }
}

/// RANSAC consensus scoring: the score of a model is the number of samples
/// whose absolute residual falls below the threshold. Larger is better.
#[derive(Debug, Clone, Copy)]
pub struct RansacScoring {
    threshold: f64,
}

impl RansacScoring {
    /// Build a RANSAC scorer with the mandatory inlier threshold, in the
    /// residual's domain units. Must be positive.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Scoring for RansacScoring {
    type Score = usize;

    fn score<I>(&self, residuals: I) -> usize
    where
        I: Iterator<Item = f64>,
    {
        residuals.filter(|r| r.abs() < self.threshold).count()
    }

    fn better(&self, candidate: &usize, incumbent: &usize) -> bool {
        candidate > incumbent
    }

    fn inlier_ratio(&self, score: &usize, dataset_size: usize) -> Option<f64> {
        if dataset_size == 0 {
            return None;
        }
        Some(*score as f64 / dataset_size as f64)
    }

    fn inlier_threshold(&self) -> Option<f64> {
        Some(self.threshold)
    }
}

/// Least-Median-of-Squares scoring: the score of a model is the median of the
/// squared residuals over the whole dataset. Smaller is better.
///
/// For even dataset sizes the upper median (element `n / 2` of the sorted
/// squares) is used. No threshold is involved in model selection; extraction
/// after an LMedS run needs a caller-configured threshold, typically derived
/// via [`LmedsScoring::robust_scale`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LmedsScoring;

impl LmedsScoring {
    pub fn new() -> Self {
        Self
    }

    /// Robust standard-deviation estimate from a winning median squared
    /// residual: `1.4826 * (1 + 5 / (n - m)) * sqrt(median_sq)`, with `n` the
    /// dataset size and `m` the minimal-sample size.
    ///
    /// A common extraction threshold is `2.5 *` this value.
    pub fn robust_scale(median_sq: f64, dataset_size: usize, sample_size: usize) -> f64 {
        let dof = dataset_size.saturating_sub(sample_size).max(1) as f64;
        1.4826 * (1.0 + 5.0 / dof) * median_sq.sqrt()
    }
}

impl Scoring for LmedsScoring {
    type Score = f64;

    fn score<I>(&self, residuals: I) -> f64
    where
        I: Iterator<Item = f64>,
    {
        let mut squares: Vec<f64> = residuals.map(|r| r * r).collect();
        if squares.is_empty() {
            return f64::INFINITY;
        }
        let mid = squares.len() / 2;
        let (_, median, _) = squares.select_nth_unstable_by(mid, f64::total_cmp);
        *median
    }

    fn better(&self, candidate: &f64, incumbent: &f64) -> bool {
        candidate < incumbent
    }
}
