//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and the Analysis Service client. The monitoring pulse is
//! composed of three per-region stages (catalog synchronization, analysis resolution and
//! forest loss detection) driven by [`pulse::PulseService`].

pub mod analysis;
pub mod catalog;
pub mod detection;
pub mod overview;
pub mod pulse;
pub mod region;
pub mod resolution;
pub mod retry;
