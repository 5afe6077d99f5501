//! # Consensus - Robust Estimation with RANSAC and LMedS
//!
//! `consensus` is a generic robust-estimation engine: given a noisy dataset
//! mixing inliers (consistent with some unknown parametric model) and
//! outliers (arbitrary samples), it finds the model parameters that best
//! explain the inlier subset. The engine is domain-agnostic: it is generic
//! over the model, the sample type, and the data container, and delegates all
//! domain logic to an [`Estimator`](core::Estimator) implementation.
//!
//! ## Quick Start
//!
//! ```rust
//! use consensus::{fit_line, EngineSettings, Point2};
//!
//! // Points on y = 2x + 1, plus gross outliers.
//! let mut points: Vec<Point2> = (0..10)
//!     .map(|i| Point2::new(i as f64, 2.0 * i as f64 + 1.0))
//!     .collect();
//! points.push(Point2::new(3.0, -40.0));
//! points.push(Point2::new(7.0, 55.0));
//!
//! let settings = EngineSettings::default().with_seed(42);
//! let result = fit_line(&points, 0.5, Some(settings)).unwrap();
//!
//! assert_eq!(result.inliers.len(), 10);
//! assert!((result.model.slope().unwrap() - 2.0).abs() < 1e-9);
//! ```
//!
//! ## Plugging in a model
//!
//! Implement [`Estimator`](core::Estimator) for your domain (how to fit
//! candidate models from a minimal sample, and how to measure one datum
//! against a model), then drive [`Consensus`](core::Consensus) with either
//! scoring strategy:
//!
//! - [`RansacScoring`](scoring::RansacScoring) counts samples whose absolute
//!   residual falls below a threshold; larger counts win.
//! - [`LmedsScoring`](scoring::LmedsScoring) takes the median squared
//!   residual over the whole dataset; smaller medians win. No threshold is
//!   needed to pick the best model, but inlier extraction afterwards requires
//!   one (see [`LmedsScoring::robust_scale`](scoring::LmedsScoring::robust_scale)).
//!
//! Both strategies keep the earliest-found model on ties, and the best score
//! never regresses across trials.
//!
//! ## Modules
//!
//! - [`core`]: the [`Estimator`](core::Estimator) contract, the
//!   [`Consensus`](core::Consensus) engine, and inlier extraction
//! - [`scoring`]: RANSAC and LMedS scoring strategies
//! - [`budget`]: fixed and adaptive trial budgets
//! - [`sampler`]: uniform index sampling without replacement
//! - [`settings`]: engine configuration
//! - [`estimators`]: built-in line and polynomial estimators
//! - [`models`]: model types for the built-in estimators
//! - [`synthetic`]: ground-truth-driven dataset generation
//! - [`api`]: one-call fitting helpers

pub mod api;
pub mod budget;
pub mod core;
pub mod error;
pub mod estimators;
pub mod models;
pub mod sampler;
pub mod scoring;
pub mod settings;
pub mod synthetic;
pub mod types;

pub use api::{fit_line, fit_polynomial, EstimationResult};
pub use budget::TrialBudget;
pub use self::core::{extract_inliers, Consensus, Estimate, Estimator};
pub use error::EstimationError;
pub use models::{Line, Polynomial};
pub use sampler::IndexSampler;
pub use scoring::{LmedsScoring, RansacScoring, Scoring};
pub use settings::{DegeneratePolicy, EngineSettings};
pub use types::{Dataset, Point2};
