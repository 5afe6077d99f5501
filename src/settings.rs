//! Configuration for the consensus engine.

use crate::budget::TrialBudget;

/// Whether a trial whose minimal sample turns out degenerate still consumes
/// iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// The trial is charged against the budget and the loop moves on. Bounds
    /// worst-case runtime on pathological inputs.
    #[default]
    ConsumeBudget,
    /// The trial resamples for free until a usable sample is found, up to an
    /// internal attempt cap, after which it is charged anyway.
    Retry,
}

/// Engine configuration.
///
/// Everything here is caller-supplied at construction time; the engine holds
/// no other state across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Trial-budget policy.
    pub budget: TrialBudget,
    /// Seed for the index sampler; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Budget treatment of degenerate trials.
    pub degenerate_policy: DegeneratePolicy,
    /// Extraction threshold override. When set, `find_inliers` uses this
    /// value in preference to the scoring strategy's own threshold; required
    /// for extraction after LMedS runs.
    pub inlier_threshold: Option<f64>,
    /// External inlier-ratio estimate for adaptive budgets under scoring
    /// strategies that have no natural ratio (LMedS).
    pub inlier_ratio_hint: Option<f64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            budget: TrialBudget::default(),
            seed: None,
            degenerate_policy: DegeneratePolicy::default(),
            inlier_threshold: None,
            inlier_ratio_hint: None,
        }
    }
}

impl EngineSettings {
    pub fn with_budget(mut self, budget: TrialBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    pub fn with_inlier_threshold(mut self, threshold: f64) -> Self {
        self.inlier_threshold = Some(threshold);
        self
    }

    pub fn with_inlier_ratio_hint(mut self, ratio: f64) -> Self {
        self.inlier_ratio_hint = Some(ratio);
        self
    }
}
