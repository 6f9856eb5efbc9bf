//! Assessment output types: RiskLevel, AssessmentMode, ColorHint, PlotPoint,
//! RiskAssessment

use serde::{Deserialize, Serialize};

/// Discrete sand production risk category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Low
    }
}

/// Which scoring operation produced an assessment.
///
/// Mode selection is a type-level decision made when the input record is
/// built — see `WellInputs`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentMode {
    Basic,
    Advanced,
    Score,
}

impl std::fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentMode::Basic => write!(f, "Basic"),
            AssessmentMode::Advanced => write!(f, "Advanced"),
            AssessmentMode::Score => write!(f, "Score"),
        }
    }
}

/// Display-tier tag emitted by the score mode, correlated 1:1 with the
/// risk level. Consumed by presentation collaborators for styling only —
/// never an input to any decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorHint {
    Red,
    Orange,
    Green,
}

impl ColorHint {
    /// The display tier for a given risk level.
    pub fn for_level(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => ColorHint::Red,
            RiskLevel::Medium => ColorHint::Orange,
            RiskLevel::Low => ColorHint::Green,
        }
    }
}

impl std::fmt::Display for ColorHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorHint::Red => write!(f, "red"),
            ColorHint::Orange => write!(f, "orange"),
            ColorHint::Green => write!(f, "green"),
        }
    }
}

/// Chart coordinates produced alongside a classification.
///
/// What the axes mean depends on the mode: basic plots
/// (flow rate, formation strength), advanced plots
/// (risk factor, shear stress), score plots
/// (flow rate, sand concentration).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Fixed reference series drawn next to the current point on the risk
/// scatter chart. Exposed as plain data for a charting collaborator;
/// rendering is not this crate's concern.
pub const RISK_THRESHOLD_POLYLINE: [PlotPoint; 3] = [
    PlotPoint { x: 1.0, y: 3000.0 },
    PlotPoint { x: 500.0, y: 1000.0 },
    PlotPoint { x: 1000.0, y: 5000.0 },
];

/// Result of one classification.
///
/// Immutable once produced. `recommendation`, `color_hint`, and
/// `risk_score` are populated by the score mode only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Scoring operation that produced this assessment
    pub mode: AssessmentMode,
    /// Assigned risk category
    pub level: RiskLevel,
    /// Human-readable sentence describing why this level was assigned
    pub explanation: String,
    /// Suggested operator action (score mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// Display tier (score mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_hint: Option<ColorHint>,
    /// Computed weighted score (score mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    /// Coordinates for the risk chart
    pub plot: PlotPoint,
}

impl RiskAssessment {
    /// Mode-tagged display label: `"High (Basic)"`, `"Low (Advanced)"`,
    /// or the plain level name for score-mode assessments.
    pub fn label(&self) -> String {
        match self.mode {
            AssessmentMode::Basic => format!("{} (Basic)", self.level),
            AssessmentMode::Advanced => format!("{} (Advanced)", self.level),
            AssessmentMode::Score => self.level.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_color_hint_maps_one_to_one() {
        assert_eq!(ColorHint::for_level(RiskLevel::High), ColorHint::Red);
        assert_eq!(ColorHint::for_level(RiskLevel::Medium), ColorHint::Orange);
        assert_eq!(ColorHint::for_level(RiskLevel::Low), ColorHint::Green);
    }

    #[test]
    fn test_mode_tagged_labels() {
        let mut assessment = RiskAssessment {
            mode: AssessmentMode::Basic,
            level: RiskLevel::High,
            explanation: String::new(),
            recommendation: None,
            color_hint: None,
            risk_score: None,
            plot: PlotPoint { x: 0.0, y: 0.0 },
        };
        assert_eq!(assessment.label(), "High (Basic)");

        assessment.mode = AssessmentMode::Advanced;
        assert_eq!(assessment.label(), "High (Advanced)");

        assessment.mode = AssessmentMode::Score;
        assert_eq!(assessment.label(), "High");
    }

    #[test]
    fn test_threshold_polyline_spans_the_chart() {
        // The reference series the chart collaborator draws: three points,
        // ascending x
        assert_eq!(RISK_THRESHOLD_POLYLINE.len(), 3);
        assert!(RISK_THRESHOLD_POLYLINE[0].x < RISK_THRESHOLD_POLYLINE[1].x);
        assert!(RISK_THRESHOLD_POLYLINE[1].x < RISK_THRESHOLD_POLYLINE[2].x);
    }

    #[test]
    fn test_color_hint_serializes_lowercase() {
        let json = serde_json::to_string(&ColorHint::Orange).unwrap();
        assert_eq!(json, "\"orange\"");
    }

    #[test]
    fn test_score_only_fields_omitted_from_json() {
        let assessment = RiskAssessment {
            mode: AssessmentMode::Basic,
            level: RiskLevel::Low,
            explanation: "stable".to_string(),
            recommendation: None,
            color_hint: None,
            risk_score: None,
            plot: PlotPoint { x: 10.0, y: 6000.0 },
        };
        let json = serde_json::to_string(&assessment).unwrap();
        assert!(!json.contains("recommendation"), "None fields should be omitted: {json}");
        assert!(!json.contains("color_hint"), "None fields should be omitted: {json}");
    }
}
