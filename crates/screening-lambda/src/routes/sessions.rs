use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use screening_core::models::instrument::InstrumentId;
use screening_core::models::session::Session;
use screening_instruments::session::{evaluate, record_response, Evaluation};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct RespondRequest {
    session: Session,
    instrument: InstrumentId,
    position: u32,
    option: u32,
}

#[derive(Deserialize)]
pub struct EvaluateRequest {
    session: Session,
    instruments: Vec<InstrumentId>,
    #[serde(default = "super::default_with_labels")]
    with_labels: bool,
}

pub async fn create_session() -> Json<Session> {
    let session = Session::new();
    tracing::info!(session_id = %session.id, "session started");
    Json(session)
}

/// Apply one answer and hand the updated session back to the caller.
pub async fn respond(
    payload: Result<Json<RespondRequest>, JsonRejection>,
) -> Result<Json<Session>, ApiError> {
    let Json(mut request) = payload?;
    record_response(
        &mut request.session,
        request.instrument,
        request.position,
        request.option,
    )?;
    Ok(Json(request.session))
}

pub async fn evaluate_session(
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<Evaluation>, ApiError> {
    let Json(request) = payload?;
    if request.instruments.is_empty() {
        return Err(ApiError::BadRequest(
            "at least one instrument is required".to_string(),
        ));
    }
    Ok(Json(evaluate(
        &request.session,
        &request.instruments,
        request.with_labels,
    )?))
}
