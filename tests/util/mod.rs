//! Shared helpers for integration tests.

use std::time::Duration;

use silvaguard::server::{
    model::{app::AppState, pulse::MonitorSettings},
    service::retry::RetryPolicy,
};
use silvaguard_test_utils::TestContext;

/// Settings with a single attempt per Analysis Service call so failures degrade immediately
pub fn test_settings() -> MonitorSettings {
    MonitorSettings {
        analysis_max_attempts: 1,
        analysis_initial_backoff: Duration::ZERO,
        ..MonitorSettings::default()
    }
}

/// Retry policy matching [`test_settings`]
pub fn test_retry() -> RetryPolicy {
    RetryPolicy::from_settings(&test_settings())
}

/// Extension trait for TestContext to create AppState with test settings
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let mut state: AppState = self.to_app_state();
        state.settings = test_settings();

        state
    }
}
