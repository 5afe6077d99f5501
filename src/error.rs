//! Error types for robust estimation.

use thiserror::Error;

/// Errors surfaced by [`Consensus`](crate::core::Consensus) operations.
///
/// Configuration errors are reported before any trial executes. A trial whose
/// minimal sample turns out degenerate is recovered internally and never
/// surfaces here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimationError {
    /// The dataset contains no samples.
    #[error("dataset is empty")]
    EmptyDataset,

    /// The requested minimal-sample size cannot be drawn from the dataset.
    #[error("sample size {sample_size} is invalid for a dataset of {dataset_size} samples")]
    InvalidSampleSize {
        /// Requested minimal-sample size.
        sample_size: usize,
        /// Number of samples in the dataset.
        dataset_size: usize,
    },

    /// Inlier extraction was requested but no threshold is configured.
    ///
    /// LMedS selects its best model without a threshold, so extraction after
    /// an LMedS run needs an explicitly configured one.
    #[error("no inlier threshold configured for extraction")]
    MissingThreshold,

    /// The trial budget was exhausted without a single usable candidate.
    #[error("no model found after {trials} trials")]
    NoModelFound {
        /// Number of trials executed before giving up.
        trials: usize,
    },
}
