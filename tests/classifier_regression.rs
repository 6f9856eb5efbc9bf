//! End-to-end classification fixtures through the public API.
//!
//! Each case pins an observable behavior of the assessment contract:
//! boundary exactness of the threshold rules, determinism, and the
//! division guard in the advanced mode.

use sandrisk::{
    assess, AdvancedInputs, AssessmentMode, BasicInputs, ClassifierError, ColorHint, RiskConfig,
    RiskLevel, ScoreInputs, WellInputs,
};

fn basic(strength: f64, depth: f64, flow: f64) -> WellInputs {
    WellInputs::Basic(BasicInputs::new(strength, depth, flow).expect("valid fixture"))
}

fn advanced(strength: f64, flow: f64, reservoir: f64, bottomhole: f64) -> WellInputs {
    WellInputs::Advanced(
        AdvancedInputs::new(strength, flow, reservoir, bottomhole).expect("valid fixture"),
    )
}

fn score(flow: f64, sand: f64) -> WellInputs {
    WellInputs::Score(ScoreInputs::new(flow, sand).expect("valid fixture"))
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn identical_inputs_yield_identical_assessments() {
    let config = RiskConfig::default();
    let fixtures = [
        basic(2999.0, 8001.0, 501.0),
        advanced(1000.0, 20.0, 1000.0, 700.0),
        score(900.0, 300.0),
    ];

    for inputs in &fixtures {
        let first = assess(inputs, &config).expect("fixture classifies");
        for _ in 0..10 {
            let again = assess(inputs, &config).expect("fixture classifies");
            assert_eq!(again, first, "repeated call diverged for {inputs:?}");
        }
    }
}

// ============================================================================
// Basic Mode Boundaries
// ============================================================================

#[test]
fn basic_all_conditions_met_is_high() {
    let result = assess(&basic(2999.0, 8001.0, 501.0), &RiskConfig::default()).unwrap();
    assert_eq!(result.level, RiskLevel::High);
    assert_eq!(result.label(), "High (Basic)");
    assert_eq!(
        result.explanation,
        "High risk: low formation strength, deep well, high flow rate."
    );
}

#[test]
fn basic_strength_exactly_on_cutoff_is_medium() {
    // Fails rule 1 strictly on `<`, falls to rule 2 (3000 < 5000, 8001 > 5000)
    let result = assess(&basic(3000.0, 8001.0, 501.0), &RiskConfig::default()).unwrap();
    assert_eq!(result.level, RiskLevel::Medium);
    assert_eq!(result.label(), "Medium (Basic)");
}

#[test]
fn basic_competent_shallow_well_is_low() {
    let result = assess(&basic(6000.0, 4000.0, 10.0), &RiskConfig::default()).unwrap();
    assert_eq!(result.level, RiskLevel::Low);
    assert_eq!(result.label(), "Low (Basic)");
    assert_eq!(
        result.explanation,
        "Low risk: stable conditions given the formation strength."
    );
}

#[test]
fn basic_plot_is_flow_against_strength() {
    let result = assess(&basic(6000.0, 4000.0, 10.0), &RiskConfig::default()).unwrap();
    assert_eq!(result.plot.x, 10.0);
    assert_eq!(result.plot.y, 6000.0);
}

// ============================================================================
// Advanced Mode
// ============================================================================

#[test]
fn advanced_drawdown_beyond_cdp_is_high() {
    // strength 1000 → CDP 200; differential 1000 − 700 = 300 exceeds it
    let result = assess(&advanced(1000.0, 20.0, 1000.0, 700.0), &RiskConfig::default()).unwrap();
    assert_eq!(result.level, RiskLevel::High);
    assert_eq!(result.label(), "High (Advanced)");
}

#[test]
fn advanced_risk_factor_above_one_is_medium() {
    // differential 100 < CDP 200; risk factor = 100 × 20 / 1000 = 2 > 1
    let result = assess(&advanced(1000.0, 20.0, 600.0, 500.0), &RiskConfig::default()).unwrap();
    assert_eq!(result.level, RiskLevel::Medium);
    assert_eq!(result.label(), "Medium (Advanced)");
}

#[test]
fn advanced_stable_conditions_are_low() {
    // differential 100 < CDP 200; risk factor = 100 × 5 / 1000 = 0.5
    let result = assess(&advanced(1000.0, 5.0, 600.0, 500.0), &RiskConfig::default()).unwrap();
    assert_eq!(result.level, RiskLevel::Low);
    assert_eq!(result.label(), "Low (Advanced)");
}

#[test]
fn advanced_zero_strength_is_rejected_not_classified() {
    let result = assess(&advanced(0.0, 20.0, 1000.0, 700.0), &RiskConfig::default());
    assert_eq!(result.unwrap_err(), ClassifierError::DivisionUndefined);
}

// ============================================================================
// Score Mode
// ============================================================================

#[test]
fn score_clearly_above_high_cutoff() {
    // 2500 × 0.4 + 500 × 0.3 = 1150
    let result = assess(&score(2500.0, 500.0), &RiskConfig::default()).unwrap();
    assert_eq!(result.level, RiskLevel::High);
    assert_eq!(result.label(), "High");
    assert_eq!(result.color_hint, Some(ColorHint::Red));
    assert_eq!(result.recommendation.as_deref(), Some("Immediate action recommended."));
}

#[test]
fn score_defaulted_inputs_are_low() {
    // The documented substitution values: 750 × 0.4 + 250 × 0.3 = 375
    let result = assess(&score(750.0, 250.0), &RiskConfig::default()).unwrap();
    assert_eq!(result.level, RiskLevel::Low);
    assert_eq!(result.color_hint, Some(ColorHint::Green));
    let value = result.risk_score.expect("score mode carries its score");
    assert!((value - 375.0).abs() < 1e-9);
}

#[test]
fn score_mode_assessment_is_untagged() {
    let result = assess(&score(1500.0, 500.0), &RiskConfig::default()).unwrap();
    assert_eq!(result.mode, AssessmentMode::Score);
    assert_eq!(result.label(), "Medium");
    assert_eq!(result.color_hint, Some(ColorHint::Orange));
}

// ============================================================================
// Config-Driven Behavior
// ============================================================================

#[test]
fn tightened_basic_thresholds_change_the_outcome() {
    let mut config = RiskConfig::default();
    config.basic.depth_deep_ft = 7000.0;
    config.basic.depth_moderate_ft = 4000.0;

    // Deep enough under the tightened cutoffs, not under the defaults
    let inputs = basic(2999.0, 7500.0, 501.0);
    let default_level = assess(&inputs, &RiskConfig::default()).unwrap().level;
    let tightened_level = assess(&inputs, &config).unwrap().level;
    assert_eq!(default_level, RiskLevel::Medium);
    assert_eq!(tightened_level, RiskLevel::High);
}

#[test]
fn custom_score_weights_feed_the_same_cutoffs() {
    let mut config = RiskConfig::default();
    config.score.flow_rate_weight = 1.0;
    config.score.sand_concentration_weight = 1.0;

    // 700 + 200 = 900 > 800 under the custom weights
    let result = assess(&score(700.0, 200.0), &config).unwrap();
    assert_eq!(result.level, RiskLevel::High);
}
