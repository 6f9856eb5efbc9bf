//! sandrisk: Sand Production Risk Assessment
//!
//! Deterministic risk classification for oil and gas wells from a handful
//! of numeric measurements.
//!
//! ## Architecture
//!
//! - **Classifier**: three pure scoring operations (basic thresholds,
//!   pressure-differential with a Mohr-Coulomb shear check, weighted
//!   linear score)
//! - **Input parsing**: raw text fields to validated, mode-tagged records
//! - **Config**: operator-tunable thresholds and geomechanical constants
//!   loaded from TOML
//! - **Session**: in-memory log of produced assessments for presentation
//!   layers

pub mod classifier;
pub mod config;
pub mod input;
pub mod session;
pub mod types;

// Re-export the risk configuration
pub use config::{ConfigError, RiskConfig};

// Re-export commonly used types
pub use types::{
    AdvancedInputs, AssessmentMode, BasicInputs, ColorHint, InputError, PlotPoint,
    RiskAssessment, RiskLevel, ScoreInputs, WellInputs,
};

// Re-export the classifier entry points
pub use classifier::{assess, ClassifierError};

// Re-export the session log
pub use session::{AssessmentLog, SavedAssessment};
