use crate::dto::stats::DailyStats;
use crate::models::Assessment;

/// Aggregate a set of assessments into dashboard statistics.
///
/// Pure function over its input; callers typically feed it `list_today()`.
pub fn daily_stats(assessments: &[Assessment]) -> DailyStats {
    let total = assessments.len();
    let passed = assessments.iter().filter(|a| a.status == "passed").count();
    let flagged = assessments.iter().filter(|a| a.status == "flagged").count();
    let rejected = assessments.iter().filter(|a| a.status == "rejected").count();

    let avg_confidence = if total > 0 {
        assessments.iter().map(|a| a.confidence).sum::<f64>() / total as f64
    } else {
        0.0
    };

    let success_rate = if total > 0 {
        passed as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    DailyStats {
        total,
        passed,
        flagged,
        rejected,
        avg_confidence,
        success_rate,
    }
}
