//! Mode-tagged well measurement inputs with validating constructors
//!
//! Every field is a non-negative physical magnitude. The constructors
//! reject non-finite and negative values so the classifier never sees a
//! NaN — silent NaN propagation through threshold comparisons would
//! misclassify everything as low risk.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection reasons for raw well measurement input
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("field '{field}' is not numeric: '{raw}'")]
    NotNumeric { field: &'static str, raw: String },

    #[error("field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("field '{field}' must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("field '{field}' is a physical magnitude and cannot be negative, got {value}")]
    NegativeMagnitude { field: &'static str, value: f64 },

    #[error("reservoir and bottomhole pressure must be supplied together")]
    IncompletePressurePair,
}

/// Validate one physical magnitude: finite and non-negative.
fn check_magnitude(field: &'static str, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(InputError::NegativeMagnitude { field, value });
    }
    Ok(value)
}

// ============================================================================
// Per-Mode Input Records
// ============================================================================

/// Inputs for the basic threshold classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BasicInputs {
    /// Formation strength (psi)
    pub formation_strength_psi: f64,
    /// Well depth (ft)
    pub well_depth_ft: f64,
    /// Flow rate (bbl/day)
    pub flow_rate_bbl_day: f64,
}

impl BasicInputs {
    pub fn new(
        formation_strength_psi: f64,
        well_depth_ft: f64,
        flow_rate_bbl_day: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            formation_strength_psi: check_magnitude("formation_strength", formation_strength_psi)?,
            well_depth_ft: check_magnitude("well_depth", well_depth_ft)?,
            flow_rate_bbl_day: check_magnitude("flow_rate", flow_rate_bbl_day)?,
        })
    }
}

/// Inputs for the pressure-based (advanced) classification.
///
/// A zero formation strength passes construction — it is a legal
/// magnitude — but the advanced classifier rejects it at evaluation time
/// because the risk factor divides by it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AdvancedInputs {
    /// Formation strength (psi)
    pub formation_strength_psi: f64,
    /// Flow rate (bbl/day)
    pub flow_rate_bbl_day: f64,
    /// Reservoir pressure (psi)
    pub reservoir_pressure_psi: f64,
    /// Flowing bottomhole pressure (psi)
    pub bottomhole_pressure_psi: f64,
}

impl AdvancedInputs {
    pub fn new(
        formation_strength_psi: f64,
        flow_rate_bbl_day: f64,
        reservoir_pressure_psi: f64,
        bottomhole_pressure_psi: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            formation_strength_psi: check_magnitude("formation_strength", formation_strength_psi)?,
            flow_rate_bbl_day: check_magnitude("flow_rate", flow_rate_bbl_day)?,
            reservoir_pressure_psi: check_magnitude("reservoir_pressure", reservoir_pressure_psi)?,
            bottomhole_pressure_psi: check_magnitude(
                "bottomhole_pressure",
                bottomhole_pressure_psi,
            )?,
        })
    }
}

/// Inputs for the weighted linear score classification.
///
/// Callers that accept optional raw fields substitute the documented
/// defaults before construction — see `input::score_inputs_from_form`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreInputs {
    /// Flow rate (bbl/day)
    pub flow_rate_bbl_day: f64,
    /// Sand concentration (ppm)
    pub sand_concentration_ppm: f64,
}

impl ScoreInputs {
    pub fn new(flow_rate_bbl_day: f64, sand_concentration_ppm: f64) -> Result<Self, InputError> {
        Ok(Self {
            flow_rate_bbl_day: check_magnitude("flow_rate", flow_rate_bbl_day)?,
            sand_concentration_ppm: check_magnitude(
                "sand_concentration",
                sand_concentration_ppm,
            )?,
        })
    }
}

// ============================================================================
// Mode-Tagged Record
// ============================================================================

/// A validated, mode-tagged evaluation request.
///
/// The variant decides which scoring operation runs — there is no runtime
/// field-presence sniffing anywhere downstream of this type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WellInputs {
    Basic(BasicInputs),
    Advanced(AdvancedInputs),
    Score(ScoreInputs),
}
