//! Error types for the SilvaGuard server application.
//!
//! Domain-specific errors (configuration, monitoring requests) are aggregated with external
//! library errors into the single [`Error`] type. All errors implement `IntoResponse` so HTTP
//! handlers can propagate them with `?`, and [`retry`] classifies them for the retry policy.

pub mod config;
pub mod monitor;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, monitor::MonitorError},
};

/// Main error type for the SilvaGuard server application.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying error types convert automatically
/// via the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Invalid monitoring request or missing monitoring resource.
    #[error(transparent)]
    MonitorError(#[from] MonitorError),
    /// Analysis service client error (HTTP transport, status codes, malformed payloads).
    #[error(transparent)]
    AnalysisError(#[from] analysis_client::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// IO error (binding the listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For invalid pulse parameters or region definitions
/// - 404 Not Found - For unknown regions
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::MonitorError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so implementation
/// details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
