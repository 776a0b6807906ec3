//! SilvaGuard forest loss monitoring.
//!
//! Periodically pulls satellite-derived vegetation statistics for monitored areas of interest,
//! keeps a chronologically ordered analysis history per area and records deforestation alerts
//! when consecutive analyses show significant forest loss.

pub mod cli;
pub mod model;
pub mod server;
