//! Sand production risk classification
//!
//! Three independent, pure scoring operations. Each maps a validated input
//! record plus the configured thresholds to a `RiskAssessment` — no I/O, no
//! shared state, no retries. Identical inputs and config always produce an
//! identical assessment.

mod advanced;
mod basic;
mod score;

pub use advanced::{classify_advanced, critical_drawdown_pressure, mohr_coulomb_shear_stress};
pub use basic::classify_basic;
pub use score::{classify_score, level_for_score, risk_score};

use thiserror::Error;

use crate::config::RiskConfig;
use crate::types::{RiskAssessment, WellInputs};

/// Classification errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassifierError {
    /// The advanced risk factor divides by formation strength, so a zero
    /// strength has no defined result.
    #[error("risk factor is undefined for zero formation strength")]
    DivisionUndefined,
}

/// Evaluate a mode-tagged input record against the configured thresholds.
///
/// The variant of `inputs` decides which scoring operation runs.
pub fn assess(inputs: &WellInputs, config: &RiskConfig) -> Result<RiskAssessment, ClassifierError> {
    match inputs {
        WellInputs::Basic(basic) => Ok(classify_basic(basic, &config.basic)),
        WellInputs::Advanced(advanced) => {
            classify_advanced(advanced, &config.advanced, &config.geomechanics)
        }
        WellInputs::Score(score) => Ok(classify_score(score, &config.score)),
    }
}
