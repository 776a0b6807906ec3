//! Data transfer objects exposed by the HTTP API.

pub mod api;
pub mod map;
pub mod pulse;
pub mod region;
