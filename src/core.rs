//! Estimator contract and the consensus trial loop.
//!
//! [`Consensus`] orchestrates the robust-estimation loop: draw a minimal
//! sample, fit candidate models through the caller's [`Estimator`], score each
//! candidate with the active [`Scoring`] strategy, fold the winner into the
//! running best, and shrink the trial budget as the best inlier ratio
//! improves. Inlier extraction is a separate, pure operation over a finished
//! model.

use log::{debug, trace};

use crate::error::EstimationError;
use crate::sampler::IndexSampler;
use crate::scoring::Scoring;
use crate::settings::{DegeneratePolicy, EngineSettings};
use crate::types::Dataset;

/// Free resampling attempts per trial under [`DegeneratePolicy::Retry`],
/// after which the trial is charged against the budget anyway.
const DEGENERATE_RETRY_LIMIT: usize = 100;

/// Domain logic the engine calls into: fit candidate models from a minimal
/// sample, and measure one datum against a candidate.
///
/// Implementations are resolved at compile time; the engine carries no trait
/// objects.
pub trait Estimator<D: Dataset + ?Sized> {
    /// Model type produced by this estimator.
    type Model: Clone;

    /// Fit candidate models from a minimal sample of `data`, given by
    /// pairwise-distinct indices.
    ///
    /// Returns an empty vector when the sample is degenerate (e.g. coincident
    /// points for a line fit). Minimal problems with several algebraic
    /// solutions may return more than one candidate; each is scored within
    /// the same trial.
    fn estimate_model(&self, data: &D, sample: &[usize]) -> Vec<Self::Model>;

    /// Scalar residual of one datum against a model. Pure and deterministic;
    /// may be signed; scoring strategies take the absolute value or square.
    fn residual(&self, model: &Self::Model, datum: &D::Datum) -> f64;

    /// Cheap degeneracy pre-check on a sample, consulted before
    /// [`estimate_model`](Estimator::estimate_model).
    fn is_degenerate(&self, _data: &D, _sample: &[usize]) -> bool {
        false
    }
}

/// Outcome of a [`Consensus::find_best`] run.
#[derive(Debug, Clone)]
pub struct Estimate<M, S> {
    /// Best model found (possibly the surviving seed model).
    pub model: M,
    /// Trial score of the best model, under the active scoring convention.
    pub score: S,
    /// Number of trials executed. Seed-model evaluation is not a trial.
    pub trials: usize,
}

/// Ordered indices of samples whose absolute residual against `model` is
/// below `threshold`.
///
/// Pure function of its inputs; independent of any engine state, so it may be
/// called with a different threshold than the one used during scoring.
pub fn extract_inliers<D, E>(estimator: &E, model: &E::Model, data: &D, threshold: f64) -> Vec<usize>
where
    D: Dataset + ?Sized,
    E: Estimator<D>,
{
    (0..data.len())
        .filter(|&i| estimator.residual(model, data.datum(i)).abs() < threshold)
        .collect()
}

/// Generic robust-estimation engine over an [`Estimator`] and a [`Scoring`]
/// strategy.
///
/// The engine is stateless across calls apart from its configuration and the
/// advancing sampler state; datasets are borrowed per call and never held.
#[derive(Debug)]
pub struct Consensus<E, S> {
    settings: EngineSettings,
    estimator: E,
    scoring: S,
    sampler: IndexSampler,
}

impl<E, S> Consensus<E, S> {
    /// Build an engine; the index sampler is seeded from
    /// [`EngineSettings::seed`], or from entropy when unset.
    pub fn new(estimator: E, scoring: S, settings: EngineSettings) -> Self {
        let sampler = match settings.seed {
            Some(seed) => IndexSampler::from_seed(seed),
            None => IndexSampler::from_entropy(),
        };
        Self::with_sampler(estimator, scoring, settings, sampler)
    }

    /// Build an engine around a caller-owned sampler.
    pub fn with_sampler(
        estimator: E,
        scoring: S,
        settings: EngineSettings,
        sampler: IndexSampler,
    ) -> Self {
        Self {
            settings,
            estimator,
            scoring,
            sampler,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }
}

impl<E, S> Consensus<E, S>
where
    S: Scoring,
{
    /// Run the trial loop and return the best model found.
    ///
    /// `seed_model`, when supplied, is scored once before trial 1 and
    /// survives as the answer unless some trial strictly beats it. Fails
    /// before any trial on an empty dataset or a sample size outside
    /// `(0, dataset size]`, and with [`EstimationError::NoModelFound`] when
    /// the budget is exhausted without a single scored candidate.
    pub fn find_best<D>(
        &mut self,
        seed_model: Option<E::Model>,
        data: &D,
        sample_size: usize,
    ) -> Result<Estimate<E::Model, S::Score>, EstimationError>
    where
        D: Dataset + ?Sized,
        E: Estimator<D>,
    {
        let dataset_size = data.len();
        if dataset_size == 0 {
            return Err(EstimationError::EmptyDataset);
        }
        if sample_size == 0 || sample_size > dataset_size {
            return Err(EstimationError::InvalidSampleSize {
                sample_size,
                dataset_size,
            });
        }

        let mut best: Option<(E::Model, S::Score)> = None;
        let mut bound = self.settings.budget.initial_bound();

        if let Some(model) = seed_model {
            let score = self.score_model(&model, data);
            trace!("seed model scored at {:?}", score);
            bound = self.shrink_bound(bound, &score, dataset_size, sample_size);
            best = Some((model, score));
        }

        let mut sample = vec![0usize; sample_size];
        let mut trials = 0usize;

        while trials < bound {
            trials += 1;

            let candidates = self.trial_candidates(data, &mut sample);
            if candidates.is_empty() {
                continue;
            }

            let mut improved = false;
            for model in candidates {
                let score = self.score_model(&model, data);
                let accept = match &best {
                    None => true,
                    Some((_, incumbent)) => self.scoring.better(&score, incumbent),
                };
                if accept {
                    trace!("trial {}: new best score {:?}", trials, score);
                    best = Some((model, score));
                    improved = true;
                }
            }

            if improved {
                if let Some((_, score)) = &best {
                    bound = self.shrink_bound(bound, score, dataset_size, sample_size);
                }
            }
        }

        debug!("stopped after {} trials (bound {})", trials, bound);
        match best {
            Some((model, score)) => Ok(Estimate {
                model,
                score,
                trials,
            }),
            None => Err(EstimationError::NoModelFound { trials }),
        }
    }

    /// Inliers of `model` under the run's configured threshold: the
    /// settings-level override when present, else the scoring strategy's own
    /// threshold.
    ///
    /// Fails with [`EstimationError::MissingThreshold`] when neither is
    /// configured (LMedS runs without an explicit extraction threshold).
    pub fn find_inliers<D>(&self, model: &E::Model, data: &D) -> Result<Vec<usize>, EstimationError>
    where
        D: Dataset + ?Sized,
        E: Estimator<D>,
    {
        let threshold = self
            .settings
            .inlier_threshold
            .or_else(|| self.scoring.inlier_threshold())
            .ok_or(EstimationError::MissingThreshold)?;
        Ok(extract_inliers(&self.estimator, model, data, threshold))
    }

    fn score_model<D>(&self, model: &E::Model, data: &D) -> S::Score
    where
        D: Dataset + ?Sized,
        E: Estimator<D>,
    {
        self.scoring
            .score((0..data.len()).map(|i| self.estimator.residual(model, data.datum(i))))
    }

    /// Draw a sample and fit candidates for one trial, honoring the
    /// degenerate-trial policy. An empty vector means the whole trial was
    /// degenerate.
    fn trial_candidates<D>(&mut self, data: &D, sample: &mut [usize]) -> Vec<E::Model>
    where
        D: Dataset + ?Sized,
        E: Estimator<D>,
    {
        let attempts = match self.settings.degenerate_policy {
            DegeneratePolicy::ConsumeBudget => 1,
            DegeneratePolicy::Retry => DEGENERATE_RETRY_LIMIT,
        };

        for _ in 0..attempts {
            self.sampler.draw(data.len(), sample);
            if self.estimator.is_degenerate(data, sample) {
                continue;
            }
            let candidates = self.estimator.estimate_model(data, sample);
            if !candidates.is_empty() {
                return candidates;
            }
        }
        Vec::new()
    }

    fn shrink_bound(
        &self,
        bound: usize,
        score: &S::Score,
        dataset_size: usize,
        sample_size: usize,
    ) -> usize {
        let ratio = self
            .scoring
            .inlier_ratio(score, dataset_size)
            .or(self.settings.inlier_ratio_hint);
        bound.min(self.settings.budget.bound_for(ratio, sample_size))
    }
}
