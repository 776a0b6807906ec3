use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        map::AlertDto,
        region::{CreateRegionDto, RegionDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{overview::OverviewService, region::RegionService},
    },
};

pub static REGION_TAG: &str = "region";

/// List all monitored regions
#[utoipa::path(
    get,
    path = "/api/regions",
    tag = REGION_TAG,
    responses(
        (status = 200, description = "Monitored regions", body = Vec<RegionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_regions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let regions: Vec<RegionDto> = RegionService::new(&state.db)
        .get_regions()
        .await?
        .into_iter()
        .map(RegionDto::from)
        .collect();

    Ok((StatusCode::OK, Json(regions)).into_response())
}

/// Register a new region to monitor
#[utoipa::path(
    post,
    path = "/api/regions",
    tag = REGION_TAG,
    request_body = CreateRegionDto,
    responses(
        (status = 201, description = "Region registered", body = RegionDto),
        (status = 400, description = "Invalid region definition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_region(
    State(state): State<AppState>,
    Json(request): Json<CreateRegionDto>,
) -> Result<impl IntoResponse, Error> {
    let region = RegionService::new(&state.db).create_region(request).await?;

    Ok((StatusCode::CREATED, Json(RegionDto::from(region))).into_response())
}

/// List the alerts of a single region, most recent first
#[utoipa::path(
    get,
    path = "/api/regions/{region_id}/alerts",
    tag = REGION_TAG,
    params(("region_id" = i32, Path, description = "Region ID")),
    responses(
        (status = 200, description = "Alerts of the region", body = Vec<AlertDto>),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_region_alerts(
    State(state): State<AppState>,
    Path(region_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let alerts = OverviewService::new(&state.db)
        .get_region_alerts(region_id)
        .await?;

    Ok((StatusCode::OK, Json(alerts)).into_response())
}
