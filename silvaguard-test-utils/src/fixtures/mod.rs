//! Fixtures for database records and mocked Analysis Service endpoints.

pub mod monitor;
