use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (timeouts, connection failures, server errors)
    Retry,
    /// Failed permanently (bad request, malformed response)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Error::AnalysisError(analysis_client::Error::ReqwestError(reqwest_error)) => {
                if reqwest_error.is_timeout() {
                    return ErrorRetryStrategy::Retry;
                }

                if let Some(status) = reqwest_error.status() {
                    match status {
                        // The analysis service is temporarily unavailable or overloaded
                        s if s.is_server_error() => ErrorRetryStrategy::Retry,
                        s if s.as_u16() == 429 => ErrorRetryStrategy::Retry,

                        // We're sending requests the service rejects, retrying won't help
                        s if s.is_client_error() => ErrorRetryStrategy::Fail,

                        _ => ErrorRetryStrategy::Fail,
                    }
                } else if reqwest_error.is_decode() {
                    ErrorRetryStrategy::Fail
                } else {
                    // Network error or connection issue
                    ErrorRetryStrategy::Retry
                }
            }

            // Out of range values or missing fields in an otherwise successful response
            Self::AnalysisError(_) => ErrorRetryStrategy::Fail,

            Self::DbErr(db_err) => match db_err {
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                _ => ErrorRetryStrategy::Fail,
            },

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::MonitorError(_) => ErrorRetryStrategy::Fail,
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
