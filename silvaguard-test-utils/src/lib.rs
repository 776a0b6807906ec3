//! Test harness for SilvaGuard.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables, database fixtures and
//! mocked Analysis Service endpoints, then `build()` returns a [`TestContext`] holding an
//! in-memory SQLite database, the mock server and an `analysis_client::Client` pointed at it.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::monitor::factory, TestBuilder, TestContext, TestError};
}
