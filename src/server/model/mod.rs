//! Server application models and type definitions.
//!
//! Contains the application state shared by HTTP handlers and the scheduler, database model
//! type aliases and the outcome types produced by the monitoring pulse.

pub mod app;
pub mod db;
pub mod pulse;
