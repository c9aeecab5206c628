//! Router: the weather API under `/api` and the static site everywhere else.

use std::path::Path;

use axum::{
    Json, Router,
    extract::{Query, State},
    handler::HandlerWithoutStateExt,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    routing::get,
};
use chrono::Local;
use skycast_core::{City, WeatherReport};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

use crate::{error::ApiError, state::AppState};

pub fn create_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let api = Router::new()
        .route("/weather", get(get_weather).options(preflight))
        .layer(cors);

    let public_dir = public_dir.as_ref();
    info!(dir = %public_dir.display(), "serving static site");
    let site = ServeDir::new(public_dir).not_found_service(not_found.into_service());

    Router::new()
        .nest("/api", api)
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = City::parse(first_value(&params, "city"))?;
    let report = state.provider.report(&city, Local::now());

    info!(city = city.trimmed(), provider = %state.provider.id(), "forecast generated");
    Ok(Json(report))
}

/// First value for `key`; later repeats are ignored.
fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
