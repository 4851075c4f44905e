use axum::{
    Json,
    extract::{Multipart, Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::assessment::{AssessmentResponse, UpdateAssessmentRequest};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

/// Multipart form for creating an assessment (documentation only; the
/// handler reads the parts itself).
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CreateAssessmentForm {
    pub worker_id: String,
    pub worker_name: String,
    /// `morning`, `afternoon` or `night`.
    pub shift: String,
    /// Worker selfie, JPEG/PNG/WebP up to 10 MiB.
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/assessments",
    request_body(content = CreateAssessmentForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Assessment created from the vision judgement", body = AssessmentResponse),
        (status = 400, description = "Missing field or unsupported image"),
        (status = 500, description = "AI analysis failed; no record created")
    ),
    tag = "assessments"
)]
pub async fn create_assessment(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, WebError> {
    let mut worker_id = None;
    let mut worker_name = None;
    let mut shift = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::BadRequest(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("workerId") => worker_id = Some(read_text(field).await?),
            Some("workerName") => worker_name = Some(read_text(field).await?),
            Some("shift") => shift = Some(read_text(field).await?),
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| WebError::BadRequest(format!("Failed to read image: {e}")))?;
                image = Some(bytes);
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| WebError::BadRequest("Image file is required".to_string()))?;

    let (worker_id, worker_name, shift) = match (worker_id, worker_name, shift) {
        (Some(worker_id), Some(worker_name), Some(shift)) => (worker_id, worker_name, shift),
        _ => {
            return Err(WebError::BadRequest(
                "Worker ID, name, and shift are required".to_string(),
            ));
        }
    };

    let assessment = services::create_assessment(
        &state.store,
        state.analyzer.as_ref(),
        worker_id,
        worker_name,
        shift,
        &image,
    )
    .await?;

    Ok(Json(AssessmentResponse::from(assessment)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/assessments",
    responses(
        (status = 200, description = "All assessments, newest first", body = Vec<AssessmentResponse>)
    ),
    tag = "assessments"
)]
pub async fn list_assessments(State(state): State<AppState>) -> Result<Response, WebError> {
    let response: Vec<AssessmentResponse> = services::list_assessments(&state.store)
        .into_iter()
        .map(AssessmentResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/assessments/{id}",
    params(
        ("id" = Uuid, Path, description = "Assessment id")
    ),
    responses(
        (status = 200, description = "Assessment found", body = AssessmentResponse),
        (status = 404, description = "Assessment not found")
    ),
    tag = "assessments"
)]
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let assessment = services::get_assessment(&state.store, id)?;

    Ok(Json(AssessmentResponse::from(assessment)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/assessments/{id}",
    params(
        ("id" = Uuid, Path, description = "Assessment id")
    ),
    request_body = UpdateAssessmentRequest,
    responses(
        (status = 200, description = "Assessment updated", body = AssessmentResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Assessment not found")
    ),
    tag = "assessments"
)]
pub async fn update_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateAssessmentRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_assessment(&state.store, id, &update_req)?;

    Ok(Json(AssessmentResponse::from(updated)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/assessments/status/flagged",
    responses(
        (status = 200, description = "Assessments pending review, newest first", body = Vec<AssessmentResponse>)
    ),
    tag = "assessments"
)]
pub async fn list_flagged(State(state): State<AppState>) -> Result<Response, WebError> {
    let response: Vec<AssessmentResponse> = services::list_flagged(&state.store)
        .into_iter()
        .map(AssessmentResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/assessments/status/{status}",
    params(
        ("status" = String, Path, description = "Status to filter on, exact match")
    ),
    responses(
        (status = 200, description = "Assessments with the given status, newest first", body = Vec<AssessmentResponse>)
    ),
    tag = "assessments"
)]
pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Response, WebError> {
    let response: Vec<AssessmentResponse> = services::list_by_status(&state.store, &status)
        .into_iter()
        .map(AssessmentResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, WebError> {
    field
        .text()
        .await
        .map_err(|e| WebError::BadRequest(format!("Invalid form field: {e}")))
}
