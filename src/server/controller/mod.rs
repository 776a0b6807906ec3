//! HTTP controller endpoints for the SilvaGuard web API.
//!
//! Axum handlers for triggering pulses, managing regions and reading the monitoring state.
//! Handlers delegate to the service layer and are documented with utoipa.

pub mod map;
pub mod pulse;
pub mod region;
