use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate statistics over a set of assessments, typically today's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub total: usize,
    pub passed: usize,
    pub flagged: usize,
    pub rejected: usize,
    /// Mean confidence, 0 when there are no records.
    pub avg_confidence: f64,
    /// Percentage of passed records, 0 when there are no records.
    pub success_rate: f64,
}
