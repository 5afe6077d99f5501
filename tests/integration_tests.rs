//! Integration tests over the public API.
//!
//! These exercise the full sampling/scoring/consensus loop on synthetic
//! datasets with known ground truth, including the statistical recovery
//! behavior that motivates RANSAC and LMedS in the first place.

use consensus::synthetic::{LineObserver, PolynomialObserver, SyntheticData};
use consensus::estimators::LineEstimator;
use consensus::{
    extract_inliers, fit_line, fit_polynomial, Consensus, EngineSettings, EstimationError,
    LmedsScoring, Point2, Polynomial, RansacScoring, TrialBudget,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn line_observer() -> LineObserver {
    LineObserver::new((-5.0, 5.0), (-25.0, 25.0))
}

fn noisy_line_data(seed: u64) -> SyntheticData {
    let truth = consensus::Line::from_slope_intercept(2.0, 1.0);
    let mut rng = StdRng::seed_from_u64(seed);
    // 100 points, 40% outliers, Gaussian inlier noise sigma 0.6.
    line_observer().generate(&truth, 100, 0.6, 0.6, &mut rng)
}

#[test]
fn ransac_recovers_line_statistically() {
    // y = 2x + 1 must be recovered within +/-0.3 in at least 95% of 50
    // seeded runs.
    let mut successes = 0;
    for seed in 0..50u64 {
        let data = noisy_line_data(seed);
        let settings = EngineSettings::default()
            .with_budget(TrialBudget::Fixed(1000))
            .with_seed(1000 + seed);

        let result = fit_line(&data.points, 1.5, Some(settings)).unwrap();
        let slope = result.model.slope().unwrap_or(f64::INFINITY);
        let intercept = result.model.intercept().unwrap_or(f64::INFINITY);

        if (slope - 2.0).abs() < 0.3 && (intercept - 1.0).abs() < 0.3 {
            successes += 1;
        }
    }
    assert!(successes >= 48, "only {successes}/50 runs recovered the line");
}

#[test]
fn true_model_inlier_count_matches_generation() {
    let truth = consensus::Line::from_slope_intercept(2.0, 1.0);
    let data = noisy_line_data(7);

    let estimator = LineEstimator::new();
    let inliers = extract_inliers(&estimator, &truth, &data.points, 1.5);

    // The 2.5-sigma band captures nearly all generated inliers plus the odd
    // outlier that happens to fall inside it.
    let generated = data.true_inliers.len() as i64;
    let found = inliers.len() as i64;
    assert!(
        (found - generated).abs() <= 12,
        "generated {generated}, found {found}"
    );
}

#[test]
fn find_inliers_is_idempotent_over_repeated_calls() {
    let data = noisy_line_data(3);
    let settings = EngineSettings::default()
        .with_budget(TrialBudget::Fixed(500))
        .with_seed(21);
    let mut engine = Consensus::new(LineEstimator::new(), RansacScoring::new(1.5), settings);

    let estimate = engine
        .find_best(None, data.points.as_slice(), LineEstimator::SAMPLE_SIZE)
        .unwrap();

    let first = engine.find_inliers(&estimate.model, data.points.as_slice()).unwrap();
    let second = engine.find_inliers(&estimate.model, data.points.as_slice()).unwrap();
    assert_eq!(first, second);
    assert_eq!(estimate.score, first.len());
}

#[test]
fn lmeds_recovers_line_and_extracts_with_robust_scale() {
    let data = noisy_line_data(13);
    let settings = EngineSettings::default()
        .with_budget(TrialBudget::Fixed(1000))
        .with_seed(31);
    let mut engine = Consensus::new(LineEstimator::new(), LmedsScoring::new(), settings);

    let estimate = engine
        .find_best(None, data.points.as_slice(), LineEstimator::SAMPLE_SIZE)
        .unwrap();

    let slope = estimate.model.slope().unwrap();
    let intercept = estimate.model.intercept().unwrap();
    assert!((slope - 2.0).abs() < 0.3, "slope {slope}");
    assert!((intercept - 1.0).abs() < 0.3, "intercept {intercept}");

    // Extraction without a threshold is a configuration error under LMedS.
    assert_eq!(
        engine
            .find_inliers(&estimate.model, data.points.as_slice())
            .unwrap_err(),
        EstimationError::MissingThreshold
    );

    // Derive one from the winning median and extract.
    let sigma = LmedsScoring::robust_scale(
        estimate.score,
        data.points.len(),
        LineEstimator::SAMPLE_SIZE,
    );
    let inliers = extract_inliers(
        engine.estimator(),
        &estimate.model,
        data.points.as_slice(),
        2.5 * sigma,
    );
    assert!(
        inliers.len() >= data.true_inliers.len() / 2,
        "extracted only {} inliers",
        inliers.len()
    );
}

#[test]
fn ransac_recovers_polynomial() {
    // y = 1 + 2x + x^2, the classic curve-fitting setup.
    let truth = Polynomial::new(vec![1.0, 2.0, 1.0]);
    let observer = PolynomialObserver::new((-3.0, 3.0), (-30.0, 30.0));
    let mut rng = StdRng::seed_from_u64(17);
    let data = observer.generate(&truth, 120, 0.03, 0.6, &mut rng);

    let settings = EngineSettings::default()
        .with_budget(TrialBudget::Fixed(2000))
        .with_seed(23);
    let result = fit_polynomial(&data.points, 2, 0.3, Some(settings)).unwrap();

    for (found, expected) in result.model.coeffs.iter().zip(truth.coeffs.iter()) {
        assert!(
            (found - expected).abs() < 0.3,
            "coefficients {:?} vs {:?}",
            result.model.coeffs,
            truth.coeffs
        );
    }
    assert!(result.inliers.len() >= data.true_inliers.len() / 2);
}

#[test]
fn adaptive_budget_stops_early_on_clean_data() {
    // Exact collinear data: the first fitted line covers everything, so the
    // adaptive bound collapses to a single trial's worth of evidence.
    let points: Vec<Point2> = (0..40)
        .map(|i| Point2::new(i as f64 * 0.25, 3.0 * i as f64 * 0.25 - 2.0))
        .collect();

    let settings = EngineSettings::default()
        .with_budget(TrialBudget::Adaptive {
            confidence: 0.99,
            max_trials: 10_000,
        })
        .with_seed(5);
    let mut engine = Consensus::new(LineEstimator::new(), RansacScoring::new(0.1), settings);

    let estimate = engine
        .find_best(None, points.as_slice(), LineEstimator::SAMPLE_SIZE)
        .unwrap();

    assert_eq!(estimate.score, 40);
    assert!(
        estimate.trials < 10,
        "expected early termination, ran {} trials",
        estimate.trials
    );
}

#[test]
fn lmeds_adaptive_budget_uses_ratio_hint() {
    let data = noisy_line_data(29);
    let settings = EngineSettings::default()
        .with_budget(TrialBudget::Adaptive {
            confidence: 0.99,
            max_trials: 1000,
        })
        .with_seed(37)
        .with_inlier_ratio_hint(0.6);
    let mut engine = Consensus::new(LineEstimator::new(), LmedsScoring::new(), settings);

    let estimate = engine
        .find_best(None, data.points.as_slice(), LineEstimator::SAMPLE_SIZE)
        .unwrap();

    // ln(0.01) / ln(1 - 0.36) caps the run at 11 trials.
    assert!(estimate.trials <= 11, "ran {} trials", estimate.trials);
}

#[test]
fn api_runs_are_reproducible_with_a_fixed_seed() {
    let data = noisy_line_data(41);
    let settings = || {
        EngineSettings::default()
            .with_budget(TrialBudget::Fixed(300))
            .with_seed(77)
    };

    let a = fit_line(&data.points, 1.5, Some(settings())).unwrap();
    let b = fit_line(&data.points, 1.5, Some(settings())).unwrap();

    assert_eq!(a.model, b.model);
    assert_eq!(a.inliers, b.inliers);
    assert_eq!(a.score, b.score);
    assert_eq!(a.trials, b.trials);
}

#[test]
fn degenerate_heavy_dataset_still_fits() {
    // Most of the dataset is one repeated point; pairs drawn inside the
    // clump are degenerate, yet the budget-consuming default still finds the
    // line through the remaining spread-out inliers.
    let mut points = vec![Point2::new(1.0, 3.0); 30];
    for i in 0..30 {
        let x = -5.0 + i as f64 / 3.0;
        points.push(Point2::new(x, 2.0 * x + 1.0));
    }

    let settings = EngineSettings::default()
        .with_budget(TrialBudget::Fixed(500))
        .with_seed(19);
    let result = fit_line(&points, 0.2, Some(settings)).unwrap();

    assert!((result.model.slope().unwrap() - 2.0).abs() < 1e-6);
    assert!((result.model.intercept().unwrap() - 1.0).abs() < 1e-6);
}
