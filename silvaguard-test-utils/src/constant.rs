//! Placeholder values used to configure the test Analysis Service client.

/// User agent sent by the test client.
pub static TEST_USER_AGENT: &str = "SilvaGuard-Test/1.0 (monitoring@example.com)";

/// Bearer credential expected by the mocked Analysis Service endpoints.
pub static TEST_API_KEY: &str = "test-analysis-api-key";
