//! Risk Configuration - All classification thresholds as operator-tunable TOML values
//!
//! Every threshold and geomechanical constant in the classifier is a field
//! here. Each struct implements `Default` with values matching the original
//! assessment rules, so behavior is unchanged when no config file is present.
//!
//! ## Loading Order
//!
//! 1. `SANDRISK_CONFIG` environment variable (path to TOML file)
//! 2. `sandrisk.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The loaded config is passed explicitly into the classifier — there is no
//! global config state, so two callers with different configs can evaluate
//! concurrently without coordination.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the risk classifier.
///
/// Load with `RiskConfig::load()` which searches:
/// 1. `$SANDRISK_CONFIG` env var
/// 2. `./sandrisk.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Basic-mode threshold rules
    #[serde(default)]
    pub basic: BasicThresholds,

    /// Advanced-mode decision thresholds
    #[serde(default)]
    pub advanced: AdvancedThresholds,

    /// Geomechanical constants for the advanced mode
    #[serde(default)]
    pub geomechanics: GeomechanicsConfig,

    /// Linear-score weights and cutoffs
    #[serde(default)]
    pub score: ScoreThresholds,

    /// Default substitution values for absent score-mode fields
    #[serde(default)]
    pub defaults: InputDefaults,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            basic: BasicThresholds::default(),
            advanced: AdvancedThresholds::default(),
            geomechanics: GeomechanicsConfig::default(),
            score: ScoreThresholds::default(),
            defaults: InputDefaults::default(),
        }
    }
}

impl RiskConfig {
    /// Load configuration using the standard search order:
    /// 1. `$SANDRISK_CONFIG` environment variable
    /// 2. `./sandrisk.toml` in the current working directory
    /// 3. Built-in defaults (original assessment rules)
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("SANDRISK_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded risk config from SANDRISK_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from SANDRISK_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "SANDRISK_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("sandrisk.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded risk config from ./sandrisk.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./sandrisk.toml, using defaults");
                }
            }
        }

        info!("No sandrisk.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate all thresholds for internal consistency.
    ///
    /// Rules:
    /// - Escalation ordering: the weak-strength cutoff must not exceed the
    ///   moderate one, the moderate-depth cutoff must not exceed the deep one,
    ///   and the moderate score cutoff must sit below the high one
    /// - Geomechanics: cohesion non-negative, friction angle strictly inside
    ///   (0°, 90°), effective stress ratio inside (0, 1]
    /// - Score weights must be positive
    /// - Every value must be a finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        // Basic mode: rule 1 is the stricter rule, its cutoffs must not sit
        // on the wrong side of rule 2's
        let b = &self.basic;
        if b.strength_weak_psi > b.strength_moderate_psi {
            errors.push(format!(
                "basic.strength_weak_psi ({:.0}) must be <= strength_moderate_psi ({:.0})",
                b.strength_weak_psi, b.strength_moderate_psi
            ));
        }
        if b.depth_moderate_ft > b.depth_deep_ft {
            errors.push(format!(
                "basic.depth_moderate_ft ({:.0}) must be <= depth_deep_ft ({:.0})",
                b.depth_moderate_ft, b.depth_deep_ft
            ));
        }
        if b.flow_high_bbl_day < 0.0 {
            errors.push(format!(
                "basic.flow_high_bbl_day ({:.0}) cannot be negative",
                b.flow_high_bbl_day
            ));
        }

        // Advanced mode
        if self.advanced.risk_factor_moderate <= 0.0 {
            errors.push(format!(
                "advanced.risk_factor_moderate ({:.2}) must be > 0",
                self.advanced.risk_factor_moderate
            ));
        }

        // Geomechanics
        let g = &self.geomechanics;
        if g.cohesion_psi < 0.0 {
            errors.push(format!(
                "geomechanics.cohesion_psi ({:.0}) cannot be negative",
                g.cohesion_psi
            ));
        }
        if !(g.friction_angle_deg > 0.0 && g.friction_angle_deg < 90.0) {
            errors.push(format!(
                "geomechanics.friction_angle_deg ({:.1}) must be strictly between 0 and 90",
                g.friction_angle_deg
            ));
        }
        if !(g.effective_stress_ratio > 0.0 && g.effective_stress_ratio <= 1.0) {
            errors.push(format!(
                "geomechanics.effective_stress_ratio ({:.2}) must be in (0, 1]",
                g.effective_stress_ratio
            ));
        }

        // Score mode
        let s = &self.score;
        if s.moderate_score >= s.high_score {
            errors.push(format!(
                "score.moderate_score ({:.0}) must be < high_score ({:.0})",
                s.moderate_score, s.high_score
            ));
        }
        if s.flow_rate_weight <= 0.0 {
            errors.push(format!(
                "score.flow_rate_weight ({:.2}) must be > 0",
                s.flow_rate_weight
            ));
        }
        if s.sand_concentration_weight <= 0.0 {
            errors.push(format!(
                "score.sand_concentration_weight ({:.2}) must be > 0",
                s.sand_concentration_weight
            ));
        }

        // Input defaults are physical magnitudes
        if self.defaults.flow_rate_bbl_day < 0.0 {
            errors.push(format!(
                "defaults.flow_rate_bbl_day ({:.0}) cannot be negative",
                self.defaults.flow_rate_bbl_day
            ));
        }
        if self.defaults.sand_concentration_ppm < 0.0 {
            errors.push(format!(
                "defaults.sand_concentration_ppm ({:.0}) cannot be negative",
                self.defaults.sand_concentration_ppm
            ));
        }

        // Reject NaN/Inf in any config value (sweep all f64 fields via serialization)
        if let Ok(ref serialized) = toml::to_string(self) {
            if serialized.contains("nan") || serialized.contains("inf") {
                errors.push(
                    "Config contains NaN or Inf values — all thresholds must be finite numbers"
                        .to_string(),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Basic Mode Thresholds
// ============================================================================

/// Cutoffs for the basic threshold cascade.
///
/// Rule 1 (High): strength below `strength_weak_psi` AND depth above
/// `depth_deep_ft` AND flow above `flow_high_bbl_day`.
/// Rule 2 (Medium): strength below `strength_moderate_psi` AND depth above
/// `depth_moderate_ft`. First match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicThresholds {
    /// Formation strength below this is weak rock (psi).
    #[serde(default = "default_strength_weak")]
    pub strength_weak_psi: f64,

    /// Formation strength below this is only moderately competent (psi).
    #[serde(default = "default_strength_moderate")]
    pub strength_moderate_psi: f64,

    /// Well depth above this is a deep well (ft).
    #[serde(default = "default_depth_deep")]
    pub depth_deep_ft: f64,

    /// Well depth above this contributes to moderate risk (ft).
    #[serde(default = "default_depth_moderate")]
    pub depth_moderate_ft: f64,

    /// Flow rate above this is high drawdown-inducing flow (bbl/day).
    #[serde(default = "default_flow_high")]
    pub flow_high_bbl_day: f64,
}

fn default_strength_weak() -> f64 { 3000.0 }
fn default_strength_moderate() -> f64 { 5000.0 }
fn default_depth_deep() -> f64 { 8000.0 }
fn default_depth_moderate() -> f64 { 5000.0 }
fn default_flow_high() -> f64 { 500.0 }

impl Default for BasicThresholds {
    fn default() -> Self {
        Self {
            strength_weak_psi: default_strength_weak(),
            strength_moderate_psi: default_strength_moderate(),
            depth_deep_ft: default_depth_deep(),
            depth_moderate_ft: default_depth_moderate(),
            flow_high_bbl_day: default_flow_high(),
        }
    }
}

// ============================================================================
// Advanced Mode Thresholds
// ============================================================================

/// Decision thresholds for the pressure-based classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedThresholds {
    /// Risk factor above this is moderate risk (dimensionless).
    #[serde(default = "default_risk_factor_moderate")]
    pub risk_factor_moderate: f64,
}

fn default_risk_factor_moderate() -> f64 { 1.0 }

impl Default for AdvancedThresholds {
    fn default() -> Self {
        Self {
            risk_factor_moderate: default_risk_factor_moderate(),
        }
    }
}

// ============================================================================
// Geomechanics Config
// ============================================================================

/// Geomechanical constants for the advanced mode.
///
/// The defaults are placeholder values carried from the original assessment
/// rules, not calibrated rock properties. Tune per field once lab data for
/// the formation is available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeomechanicsConfig {
    /// Rock cohesion for the Mohr-Coulomb shear check (psi).
    #[serde(default = "default_cohesion")]
    pub cohesion_psi: f64,

    /// Internal friction angle for the Mohr-Coulomb shear check (degrees).
    #[serde(default = "default_friction_angle")]
    pub friction_angle_deg: f64,

    /// Effective stress as a fraction of formation strength.
    /// Critical drawdown = strength × (1 − ratio).
    #[serde(default = "default_effective_stress_ratio")]
    pub effective_stress_ratio: f64,
}

fn default_cohesion() -> f64 { 1000.0 }
fn default_friction_angle() -> f64 { 30.0 }
fn default_effective_stress_ratio() -> f64 { 0.8 }

impl Default for GeomechanicsConfig {
    fn default() -> Self {
        Self {
            cohesion_psi: default_cohesion(),
            friction_angle_deg: default_friction_angle(),
            effective_stress_ratio: default_effective_stress_ratio(),
        }
    }
}

// ============================================================================
// Score Mode Thresholds
// ============================================================================

/// Weights and cutoffs for the linear risk score.
///
/// score = flow_rate × flow_rate_weight + sand_concentration × sand_concentration_weight.
/// Both cutoffs compare with strict `>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreThresholds {
    /// Flow rate contribution weight.
    #[serde(default = "default_flow_rate_weight")]
    pub flow_rate_weight: f64,

    /// Sand concentration contribution weight.
    #[serde(default = "default_sand_weight")]
    pub sand_concentration_weight: f64,

    /// Score above this is high risk.
    #[serde(default = "default_high_score")]
    pub high_score: f64,

    /// Score above this (but not above `high_score`) is moderate risk.
    #[serde(default = "default_moderate_score")]
    pub moderate_score: f64,
}

fn default_flow_rate_weight() -> f64 { 0.4 }
fn default_sand_weight() -> f64 { 0.3 }
fn default_high_score() -> f64 { 800.0 }
fn default_moderate_score() -> f64 { 600.0 }

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            flow_rate_weight: default_flow_rate_weight(),
            sand_concentration_weight: default_sand_weight(),
            high_score: default_high_score(),
            moderate_score: default_moderate_score(),
        }
    }
}

// ============================================================================
// Input Defaults
// ============================================================================

/// Default substitution values applied by the input-parsing collaborator
/// when an optional score-mode field is absent. Substitution happens before
/// the classifier is called, never inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDefaults {
    /// Flow rate substituted for an absent field (bbl/day).
    #[serde(default = "default_input_flow_rate")]
    pub flow_rate_bbl_day: f64,

    /// Sand concentration substituted for an absent field (ppm).
    #[serde(default = "default_input_sand_concentration")]
    pub sand_concentration_ppm: f64,
}

fn default_input_flow_rate() -> f64 {
    crate::input::DEFAULT_FLOW_RATE_BBL_DAY
}
fn default_input_sand_concentration() -> f64 {
    crate::input::DEFAULT_SAND_CONCENTRATION_PPM
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            flow_rate_bbl_day: default_input_flow_rate(),
            sand_concentration_ppm: default_input_sand_concentration(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
