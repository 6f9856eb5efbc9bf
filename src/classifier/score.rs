//! Weighted linear score classification from flow rate and sand concentration

use crate::config::ScoreThresholds;
use crate::types::{AssessmentMode, ColorHint, PlotPoint, RiskAssessment, RiskLevel, ScoreInputs};

/// Weighted linear risk score.
///
/// score = flow_rate × flow_rate_weight + sand_concentration × sand_concentration_weight
pub fn risk_score(inputs: &ScoreInputs, thresholds: &ScoreThresholds) -> f64 {
    inputs.flow_rate_bbl_day * thresholds.flow_rate_weight
        + inputs.sand_concentration_ppm * thresholds.sand_concentration_weight
}

/// Map an already-computed score to a risk level.
///
/// Both cutoffs use strict `>`: a score sitting exactly on the high cutoff
/// classifies as Medium, and one exactly on the moderate cutoff as Low.
pub fn level_for_score(score: f64, thresholds: &ScoreThresholds) -> RiskLevel {
    if score > thresholds.high_score {
        RiskLevel::High
    } else if score > thresholds.moderate_score {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Classify sand production risk from the weighted linear score and attach
/// the operator recommendation and display tier for the level.
pub fn classify_score(inputs: &ScoreInputs, thresholds: &ScoreThresholds) -> RiskAssessment {
    let score = risk_score(inputs, thresholds);
    let level = level_for_score(score, thresholds);

    let (explanation, recommendation) = match level {
        RiskLevel::High => ("Conditions exceed safe limits.", "Immediate action recommended."),
        RiskLevel::Medium => (
            "Approaching critical limits.",
            "Monitor closely and adjust as needed.",
        ),
        RiskLevel::Low => (
            "Within safe limits.",
            "Stable conditions; continue monitoring.",
        ),
    };

    RiskAssessment {
        mode: AssessmentMode::Score,
        level,
        explanation: explanation.to_string(),
        recommendation: Some(recommendation.to_string()),
        color_hint: Some(ColorHint::for_level(level)),
        risk_score: Some(score),
        plot: PlotPoint {
            x: inputs.flow_rate_bbl_day,
            y: inputs.sand_concentration_ppm,
        },
    }
}
