//! Pressure-differential classification with a simplified Mohr-Coulomb shear check
//!
//! Key quantities for the drawdown stability assessment:
//! - Critical drawdown pressure (CDP)
//! - Mohr-Coulomb shear stress (one-term approximation)
//! - Risk factor from pressure differential and flow rate

use super::ClassifierError;
use crate::config::{AdvancedThresholds, GeomechanicsConfig};
use crate::types::{AdvancedInputs, AssessmentMode, PlotPoint, RiskAssessment, RiskLevel};

/// Critical Drawdown Pressure (CDP)
///
/// The drawdown beyond which formation failure and sand production risk
/// rise sharply.
///
/// Formula: CDP = S − σ_eff, with σ_eff = ratio × S
///
/// Where:
/// - S = formation strength (psi)
/// - ratio = effective stress fraction (dimensionless, default 0.8)
///
/// Returns CDP in psi
pub fn critical_drawdown_pressure(formation_strength: f64, effective_stress_ratio: f64) -> f64 {
    let effective_stress = effective_stress_ratio * formation_strength;
    formation_strength - effective_stress
}

/// Mohr-Coulomb shear stress (one-term approximation)
///
/// Formula: τ = c + S × tan(φ)
///
/// Where:
/// - c = cohesion (psi)
/// - S = formation strength (psi), standing in for normal stress
/// - φ = internal friction angle (degrees)
///
/// Returns shear stress in psi. Used for the chart's y-axis, not for the
/// classification decision itself.
pub fn mohr_coulomb_shear_stress(
    formation_strength: f64,
    cohesion: f64,
    friction_angle_deg: f64,
) -> f64 {
    cohesion + formation_strength * friction_angle_deg.to_radians().tan()
}

/// Classify sand production risk from pressures, flow rate, and strength.
///
/// Decision order (first match wins):
/// 1. CDP below the reservoir/bottomhole pressure differential → High
/// 2. Risk factor (differential × flow / strength) above the configured
///    cutoff → Medium
/// 3. Otherwise → Low
///
/// Fails with `ClassifierError::DivisionUndefined` when formation strength
/// is zero — the risk factor divides by it, and a silent ±inf result would
/// feed an arbitrary classification.
pub fn classify_advanced(
    inputs: &AdvancedInputs,
    thresholds: &AdvancedThresholds,
    geomechanics: &GeomechanicsConfig,
) -> Result<RiskAssessment, ClassifierError> {
    let strength = inputs.formation_strength_psi;
    if strength == 0.0 {
        return Err(ClassifierError::DivisionUndefined);
    }

    let cdp = critical_drawdown_pressure(strength, geomechanics.effective_stress_ratio);
    let shear_stress = mohr_coulomb_shear_stress(
        strength,
        geomechanics.cohesion_psi,
        geomechanics.friction_angle_deg,
    );

    let pressure_differential = inputs.reservoir_pressure_psi - inputs.bottomhole_pressure_psi;
    let risk_factor = (pressure_differential * inputs.flow_rate_bbl_day) / strength;

    let (level, explanation) = if cdp < pressure_differential {
        (
            RiskLevel::High,
            "High risk: CDP < pressure differential, indicating potential formation instability.",
        )
    } else if risk_factor > thresholds.risk_factor_moderate {
        (
            RiskLevel::Medium,
            "Moderate risk due to flow rate and pressure conditions.",
        )
    } else {
        (
            RiskLevel::Low,
            "Low risk: formation strength and current conditions suggest stability.",
        )
    };

    Ok(RiskAssessment {
        mode: AssessmentMode::Advanced,
        level,
        explanation: explanation.to_string(),
        recommendation: None,
        color_hint: None,
        risk_score: None,
        plot: PlotPoint {
            x: risk_factor,
            y: shear_stress,
        },
    })
}
