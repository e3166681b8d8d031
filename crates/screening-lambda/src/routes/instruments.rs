use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};

use screening_core::models::response::ResponseSet;
use screening_core::models::result::ScoreResult;
use screening_instruments::scoring::{ItemListing, ResponseOption, SeverityBand, Subscale};
use screening_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: &'static str,
    name: &'static str,
    item_count: usize,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: &'static str,
    name: &'static str,
    max_score: u32,
    items: Vec<ItemListing>,
    severity_bands: &'static [SeverityBand],
    subscales: &'static [Subscale],
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    responses: ResponseSet,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().as_str(),
            name: i.name(),
            item_count: i.items().len(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().as_str(),
        name: instrument.name(),
        max_score: instrument.max_score(),
        items: instrument.list_items(),
        severity_bands: instrument.severity_bands(),
        subscales: instrument.subscales(),
    }))
}

pub async fn list_items(Path(id): Path<String>) -> Result<Json<Vec<ItemListing>>, ApiError> {
    Ok(Json(get_instrument(&id)?.list_items()))
}

pub async fn list_option_values(
    Path((id, position)): Path<(String, u32)>,
) -> Result<Json<&'static [ResponseOption]>, ApiError> {
    let options = get_instrument(&id)?
        .list_option_values(position)
        .map_err(|e| ApiError::NotFound(e.to_string()))?;
    Ok(Json(options))
}

pub async fn score(
    Path(id): Path<String>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, ApiError> {
    let instrument = get_instrument(&id)?;
    let Json(request) = payload?;
    Ok(Json(instrument.score(&request.responses)?))
}
