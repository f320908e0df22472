//! Grievance API endpoints.
//!
//! Handlers validate the request body, then delegate to [`GrievanceService`].
//! Unknown `request_type` labels never reach them: JSON extraction rejects
//! the body with 422 first.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AppState;
use crate::error::AppError;
use crate::models::{
    AIResponse, BulkClassifyRequest, BulkClassifyResponse, ClassificationResult,
    GrievanceAnalytics, GrievanceRequest, ProcessedGrievance, RequestType,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateListResponse {
    pub available_types: Vec<RequestType>,
    pub templates: Vec<RequestType>,
}

/// POST /api/classify
pub async fn classify(
    State(state): State<AppState>,
    Json(request): Json<GrievanceRequest>,
) -> Result<Json<ClassificationResult>, AppError> {
    request.validate()?;
    Ok(Json(state.service.classify(&request)))
}

/// POST /api/respond
pub async fn respond(
    State(state): State<AppState>,
    Json(request): Json<GrievanceRequest>,
) -> Result<Json<AIResponse>, AppError> {
    request.validate()?;
    Ok(Json(state.service.respond(&request)))
}

/// POST /api/process
pub async fn process(
    State(state): State<AppState>,
    Json(request): Json<GrievanceRequest>,
) -> Result<Json<ProcessedGrievance>, AppError> {
    request.validate()?;
    Ok(Json(state.service.process(&request)))
}

/// GET /api/analytics
pub async fn analytics(State(state): State<AppState>) -> Json<GrievanceAnalytics> {
    Json(state.service.analytics())
}

/// GET /api/templates
pub async fn templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    let types = state.service.available_templates();
    Json(TemplateListResponse {
        available_types: types.clone(),
        templates: types,
    })
}

/// POST /api/bulk-classify
pub async fn bulk_classify(
    State(state): State<AppState>,
    Json(request): Json<BulkClassifyRequest>,
) -> Json<BulkClassifyResponse> {
    Json(BulkClassifyResponse {
        classifications: state.service.bulk_classify(&request.items),
    })
}
