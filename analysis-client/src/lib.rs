//! Typed client for the external Analysis Service.
//!
//! The Analysis Service discovers satellite captures over a region, reduces a capture to
//! vegetation statistics (mean tree probability, forest cover percentage, tile layer) and
//! computes forest loss between two captures. This crate only speaks the wire protocol;
//! deciding what to do when a call fails is left to the caller.
//!
//! ```ignore
//! let client = analysis_client::Client::builder()
//!     .base_url("https://analysis.example.com")
//!     .api_key("secret")
//!     .timeout(std::time::Duration::from_secs(30))
//!     .build()?;
//!
//! let captures = client.captures().search(&query).await?;
//! let stats = client.statistics().vegetation("COPERNICUS/S2/20240101", Some(region)).await?;
//! ```

pub mod captures;
pub mod client;
pub mod error;
pub mod model;
pub mod statistics;

pub use client::{Client, ClientBuilder};
pub use error::{ConfigError, Error};
