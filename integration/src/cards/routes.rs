use axum::{routing::post, Router};
use super::handler::{create_series, validate_card, SeriesCache};

pub fn router(cache: SeriesCache) -> Router {
    Router::new()
        .route("/api/admin/series",   post(create_series))
        .route("/api/cards/validate", post(validate_card))
        .with_state(cache)
}
