use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{extract::State, http::StatusCode, Json};
use bingo_series_gen::{
    from_record, generate, series_to_rows, validate, CardRecord, EngineError, Series,
    SeriesRequest,
};
use serde::Deserialize;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Shared state: series issued by this process, keyed by series number
// ---------------------------------------------------------------------------

pub type SeriesCache = Arc<Mutex<HashMap<u32, Series>>>;

pub fn new_cache() -> SeriesCache {
    Arc::new(Mutex::new(HashMap::new()))
}

// ---------------------------------------------------------------------------
// Body types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct CreateSeriesRequest {
    pub series_number: u32,
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "success": false, "message": message.into() })))
}

fn engine_error(e: EngineError) -> ApiError {
    match e {
        EngineError::InvalidArgument { .. } => api_error(StatusCode::BAD_REQUEST, e.to_string()),
        _ => api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// POST /api/admin/series   body: { series_number }
// ---------------------------------------------------------------------------

pub async fn create_series(
    State(cache): State<SeriesCache>,
    Json(body): Json<CreateSeriesRequest>,
) -> Result<Json<Value>, ApiError> {
    // Series numbers are unique per issuing service; the engine does not track them.
    if lock(&cache)?.contains_key(&body.series_number) {
        return Err(already_issued(body.series_number));
    }

    // Generation runs without the lock held.
    let series = generate(SeriesRequest::new(body.series_number)).map_err(engine_error)?;
    let rows = series_to_rows(&series).map_err(engine_error)?;

    let mut map = lock(&cache)?;
    if map.contains_key(&series.series_number) {
        return Err(already_issued(series.series_number));
    }
    map.insert(series.series_number, series);

    Ok(Json(json!({ "success": true, "data": { "cards": rows } })))
}

fn lock(cache: &SeriesCache) -> Result<MutexGuard<'_, HashMap<u32, Series>>, ApiError> {
    cache
        .lock()
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "series cache poisoned"))
}

fn already_issued(series_number: u32) -> ApiError {
    api_error(StatusCode::CONFLICT, format!("Series {} already issued", series_number))
}

// ---------------------------------------------------------------------------
// POST /api/cards/validate   body: CardRecord
// ---------------------------------------------------------------------------

pub async fn validate_card(Json(record): Json<CardRecord>) -> Result<Json<Value>, ApiError> {
    let card = from_record(&record).map_err(engine_error)?;
    let result = validate(&card);

    Ok(Json(json!({
        "success": true,
        "data": {
            "valid":      result.is_ok(),
            "violations": result.violations(),
        }
    })))
}
