use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use screening_core::models::result::ScoreResult;
use screening_instruments::summarize_verified;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct SummaryRequest {
    results: Vec<ScoreResult>,
    #[serde(default = "super::default_with_labels")]
    with_labels: bool,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    summary: String,
}

pub async fn summarize_results(
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(SummaryResponse {
        summary: summarize_verified(&request.results, request.with_labels)?,
    }))
}
