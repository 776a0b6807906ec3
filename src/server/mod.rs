//! Server application core modules.
//!
//! Contains all server-side functionality for SilvaGuard: configuration, HTTP routing,
//! database repositories, the Analysis Service integration, the monitoring pulse and its
//! cron scheduler.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
