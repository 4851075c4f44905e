use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use storage::{
    AssessmentStore,
    dto::assessment::{NewAssessment, UpdateAssessmentRequest},
    models::Assessment,
};
use uuid::Uuid;
use vision::{SafetyAnalyzer, image::detect_image_format};

use crate::error::{WebError, WebResult};

/// Run the vision judgement over the uploaded image and persist the result.
///
/// Analysis failure aborts the flow; no record is created and the caller must
/// resubmit.
pub async fn create_assessment(
    store: &AssessmentStore,
    analyzer: &dyn SafetyAnalyzer,
    worker_id: String,
    worker_name: String,
    shift: String,
    image: &[u8],
) -> WebResult<Assessment> {
    detect_image_format(image)?;

    let analysis = analyzer.analyze(image).await?;

    let criteria = serde_json::to_value(&analysis.criteria)
        .map_err(|e| WebError::Internal(format!("Failed to serialize criteria: {e}")))?;
    let ai_analysis = serde_json::to_value(&analysis)
        .map_err(|e| WebError::Internal(format!("Failed to serialize judgement: {e}")))?;

    let assessment = store.create(NewAssessment {
        worker_id,
        worker_name,
        shift,
        image_data: STANDARD.encode(image),
        status: analysis.overall_status.as_str().to_string(),
        confidence: analysis.confidence,
        ai_analysis: Some(ai_analysis),
        criteria: Some(criteria),
    });

    tracing::info!(
        "Assessment {} created for worker {} (status: {}, confidence: {:.1})",
        assessment.id,
        assessment.worker_id,
        assessment.status,
        assessment.confidence
    );

    Ok(assessment)
}

/// List all assessments, newest first.
pub fn list_assessments(store: &AssessmentStore) -> Vec<Assessment> {
    store.list()
}

/// Get an assessment by id.
pub fn get_assessment(store: &AssessmentStore, id: Uuid) -> WebResult<Assessment> {
    Ok(store.get(id)?)
}

/// Apply a reviewer update to an assessment.
pub fn update_assessment(
    store: &AssessmentStore,
    id: Uuid,
    request: &UpdateAssessmentRequest,
) -> WebResult<Assessment> {
    let updated = store.update(id, request)?;

    tracing::info!(
        "Assessment {} updated (status: {}, reviewed_by: {:?})",
        updated.id,
        updated.status,
        updated.reviewed_by
    );

    Ok(updated)
}

/// List assessments pending review, newest first.
pub fn list_flagged(store: &AssessmentStore) -> Vec<Assessment> {
    store.list_flagged()
}

/// List assessments with an arbitrary status, newest first.
pub fn list_by_status(store: &AssessmentStore, status: &str) -> Vec<Assessment> {
    store.list_by_status(status)
}
