//! Core data model: input records and assessment results

mod assessment;
mod inputs;

pub use assessment::{
    AssessmentMode, ColorHint, PlotPoint, RiskAssessment, RiskLevel, RISK_THRESHOLD_POLYLINE,
};
pub use inputs::{AdvancedInputs, BasicInputs, InputError, ScoreInputs, WellInputs};
