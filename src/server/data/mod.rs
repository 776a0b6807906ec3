//! Data access layer repositories.
//!
//! Repositories wrap the SeaORM entities of the monitoring domain. Each one is generic over
//! `ConnectionTrait` so callers can pass either a pooled connection or a transaction.

pub mod alert;
pub mod analysis;
pub mod capture;
pub mod region;
