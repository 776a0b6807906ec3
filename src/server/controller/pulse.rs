use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        pulse::{PulseRequestDto, PulseSummaryDto},
    },
    server::{error::Error, model::app::AppState, service::pulse::PulseService},
};

pub static PULSE_TAG: &str = "pulse";

/// Run a monitoring pulse over all regions and wait for it to finish
///
/// The request body is optional, a missing body or missing fields use the configured defaults.
#[utoipa::path(
    post,
    path = "/api/pulse",
    tag = PULSE_TAG,
    request_body(content = Option<PulseRequestDto>, content_type = "application/json"),
    responses(
        (status = 200, description = "Pulse completed", body = PulseSummaryDto),
        (status = 400, description = "Invalid time window or cloud coverage", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn run_pulse(
    State(state): State<AppState>,
    request: Option<Json<PulseRequestDto>>,
) -> Result<impl IntoResponse, Error> {
    let request = request.map(|Json(request)| request).unwrap_or_default();
    let time_window_days = request
        .time_window_days
        .unwrap_or(state.settings.default_window_days);
    let max_cloud_coverage = request
        .max_cloud_coverage
        .unwrap_or(state.settings.default_max_cloud_coverage);

    let summary = PulseService::new(&state.db, &state.analysis_client, state.settings)
        .run_pulse(time_window_days, max_cloud_coverage)
        .await?;

    Ok((StatusCode::OK, Json(PulseSummaryDto::from(summary))).into_response())
}
