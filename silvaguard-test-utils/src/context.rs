//! Test context returned by `TestBuilder`.

use std::time::Duration;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::{TEST_API_KEY, TEST_USER_AGENT},
    error::TestError,
};

/// Test environment produced by [`TestBuilder::build`](crate::TestBuilder::build)
///
/// ```ignore
/// let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
///
/// let region = test.monitor().insert_mock_region("Rondonia").await?;
/// let client = &test.analysis_client;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Analysis Service client pointed at the mock server
    pub analysis_client: analysis_client::Client,

    /// Mock HTTP server standing in for the Analysis Service
    pub(crate) server: ServerGuard,
    /// Mocks created by the builder, kept alive for the duration of the test
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert database and client into any type that can be constructed from them
    ///
    /// Lets integration tests build the application state without the test utilities depending
    /// on the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, analysis_client::Client)>,
    {
        T::from((self.db.clone(), self.analysis_client.clone()))
    }

    /// URL of the mock Analysis Service
    pub fn server_url(&self) -> String {
        self.server.url()
    }
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let analysis_client = analysis_client::Client::builder()
            .base_url(&mock_server.url())
            .api_key(TEST_API_KEY)
            .user_agent(TEST_USER_AGENT)
            .timeout(Duration::from_secs(5))
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server: mock_server,
            db,
            analysis_client,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create the unique index guarding against duplicate alerts for the same analysis pair
    pub(crate) async fn with_alert_pair_index(&self) -> Result<(), TestError> {
        self.db.execute(&migration::alert_pair_index()).await?;

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
