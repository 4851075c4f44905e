use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single fitness-for-duty assessment tied to one worker and one captured image.
///
/// `status` is a free string by design: the reviewer flow writes `passed`,
/// `flagged` or `rejected`, but the store never rejects other values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: Uuid,
    pub worker_id: String,
    pub worker_name: String,
    /// Shift label, `morning`/`afternoon`/`night` by convention.
    pub shift: String,
    /// Base64-encoded image, opaque to the store.
    pub image_data: String,
    pub status: String,
    /// Intended range 0-100, set from the vision judgement at creation.
    pub confidence: f64,
    /// Raw judgement payload from the vision collaborator.
    #[schema(value_type = Option<Object>)]
    pub ai_analysis: Option<serde_json::Value>,
    /// Per-indicator scores, mirror of the judgement's criteria block.
    #[schema(value_type = Option<Object>)]
    pub criteria: Option<serde_json::Value>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}
