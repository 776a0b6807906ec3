use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        map::{AlertDto, MapRegionDto},
    },
    server::{error::Error, model::app::AppState, service::overview::OverviewService},
};

pub static MAP_TAG: &str = "map";

/// Get every region with its latest resolved analysis and its alerts
#[utoipa::path(
    get,
    path = "/api/map",
    tag = MAP_TAG,
    responses(
        (status = 200, description = "Map overview", body = Vec<MapRegionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_map(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let map = OverviewService::new(&state.db).get_map().await?;

    Ok((StatusCode::OK, Json(map)).into_response())
}

/// Get all deforestation alerts, most recent first
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = MAP_TAG,
    responses(
        (status = 200, description = "All alerts", body = Vec<AlertDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alerts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let alerts = OverviewService::new(&state.db).get_alerts().await?;

    Ok((StatusCode::OK, Json(alerts)).into_response())
}
