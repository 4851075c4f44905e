use storage::{AssessmentStore, dto::stats::DailyStats, services::stats::daily_stats};

/// Aggregate statistics over today's assessments.
pub fn today_stats(store: &AssessmentStore) -> DailyStats {
    daily_stats(&store.list_today())
}
