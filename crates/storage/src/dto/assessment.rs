use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Insert data for a new assessment. The store fills in `id`, `created_at`
/// and the reviewer fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    pub worker_id: String,
    pub worker_name: String,
    pub shift: String,
    pub image_data: String,
    pub status: String,
    pub confidence: f64,
    pub ai_analysis: Option<serde_json::Value>,
    pub criteria: Option<serde_json::Value>,
}

/// Request payload for updating an existing assessment (reviewer action).
///
/// Shallow merge semantics: present fields overwrite, absent fields are left
/// untouched. `status` is deliberately not restricted to the known values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessmentRequest {
    #[validate(length(min = 1, max = 255))]
    pub worker_id: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub worker_name: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub shift: Option<String>,

    pub image_data: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub status: Option<String>,

    pub confidence: Option<f64>,

    #[schema(value_type = Option<Object>)]
    pub ai_analysis: Option<serde_json::Value>,

    #[schema(value_type = Option<Object>)]
    pub criteria: Option<serde_json::Value>,

    #[validate(length(min = 1, max = 255))]
    pub reviewed_by: Option<String>,

    pub reviewed_at: Option<NaiveDateTime>,
}

/// Response containing a full assessment record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub id: Uuid,
    pub worker_id: String,
    pub worker_name: String,
    pub shift: String,
    pub image_data: String,
    pub status: String,
    pub confidence: f64,
    #[schema(value_type = Option<Object>)]
    pub ai_analysis: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub criteria: Option<serde_json::Value>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Assessment> for AssessmentResponse {
    fn from(assessment: crate::models::Assessment) -> Self {
        Self {
            id: assessment.id,
            worker_id: assessment.worker_id,
            worker_name: assessment.worker_name,
            shift: assessment.shift,
            image_data: assessment.image_data,
            status: assessment.status,
            confidence: assessment.confidence,
            ai_analysis: assessment.ai_analysis,
            criteria: assessment.criteria,
            reviewed_by: assessment.reviewed_by,
            reviewed_at: assessment.reviewed_at,
            created_at: assessment.created_at,
        }
    }
}
