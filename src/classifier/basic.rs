//! Basic threshold classification from formation strength, depth, and flow rate

use crate::config::BasicThresholds;
use crate::types::{AssessmentMode, BasicInputs, PlotPoint, RiskAssessment, RiskLevel};

/// Classify sand production risk from the three basic well parameters.
///
/// The rules form a first-match-wins cascade:
/// 1. Weak rock AND deep well AND high flow → High
/// 2. Moderately competent rock AND moderately deep well → Medium
/// 3. Otherwise → Low
///
/// All comparisons are strict, so a value sitting exactly on a cutoff does
/// not satisfy the rule.
pub fn classify_basic(inputs: &BasicInputs, thresholds: &BasicThresholds) -> RiskAssessment {
    let strength = inputs.formation_strength_psi;
    let depth = inputs.well_depth_ft;
    let flow = inputs.flow_rate_bbl_day;

    let (level, explanation) = if strength < thresholds.strength_weak_psi
        && depth > thresholds.depth_deep_ft
        && flow > thresholds.flow_high_bbl_day
    {
        (
            RiskLevel::High,
            "High risk: low formation strength, deep well, high flow rate.",
        )
    } else if strength < thresholds.strength_moderate_psi && depth > thresholds.depth_moderate_ft {
        (
            RiskLevel::Medium,
            "Moderate risk: formation strength and depth conditions.",
        )
    } else {
        (
            RiskLevel::Low,
            "Low risk: stable conditions given the formation strength.",
        )
    };

    RiskAssessment {
        mode: AssessmentMode::Basic,
        level,
        explanation: explanation.to_string(),
        recommendation: None,
        color_hint: None,
        risk_score: None,
        plot: PlotPoint { x: flow, y: strength },
    }
}
