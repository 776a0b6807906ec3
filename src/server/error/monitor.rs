use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Pulse time window must be greater than zero days, got {0}")]
    InvalidTimeWindow(i64),
    #[error("Maximum cloud coverage must be a percentage between 0 and 100, got {0}")]
    InvalidCloudCoverage(f64),
    #[error("Invalid region definition: {0}")]
    InvalidRegion(String),
    #[error("Region ID {0:?} not found")]
    RegionNotFound(i32),
}

impl IntoResponse for MonitorError {
    fn into_response(self) -> Response {
        match self {
            Self::RegionNotFound(region_id) => {
                tracing::debug!(region_id = %region_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Region not found".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::debug!("{}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
