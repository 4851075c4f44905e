use serde::{Deserialize, Serialize};

/// Structured fitness-for-duty judgement returned by the vision model.
///
/// Field names follow the model's JSON contract (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAnalysis {
    pub overall_status: OverallStatus,
    /// 0-100, clamped after parsing.
    pub confidence: f64,
    pub criteria: SafetyCriteria,
    pub detected_issues: Vec<String>,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

/// The model only ever judges passed or flagged; `rejected` is a reviewer
/// decision and never comes from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Passed,
    Flagged,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Flagged => "flagged",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Per-indicator scores the model reports for a selfie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyCriteria {
    pub eye_movement: IndicatorScore,
    pub facial_expression: IndicatorScore,
    pub head_position: IndicatorScore,
    pub skin_color: IndicatorScore,
}

/// Score plus a status label (`normal`/`abnormal`, or `stable`/`unstable`
/// for head position).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorScore {
    pub score: f64,
    pub status: String,
}
