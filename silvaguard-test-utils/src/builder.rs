//! Declarative test builder.
//!
//! Configuration methods only queue work; tables, fixtures and mock endpoints are created when
//! `build()` is called.

use analysis_client::model::{
    CaptureDescriptor, LossStatistics, RegionGeometry, VegetationStatistics,
};
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_monitoring_tables: bool,

    regions: Vec<(String, f64, f64)>, // (name, latitude, longitude)

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    discovery_endpoints: Vec<(RegionGeometry, Vec<CaptureDescriptor>, usize)>,
    discovery_failures: Vec<(RegionGeometry, usize, usize)>, // (region, status, expected_requests)
    vegetation_endpoints: Vec<(String, VegetationStatistics, usize)>,
    vegetation_failures: Vec<(String, usize, usize)>,
    loss_endpoints: Vec<(String, String, LossStatistics, usize)>,
    loss_failures: Vec<(String, String, usize, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_monitoring_tables: false,
            regions: Vec::new(),
            mock_builders: Vec::new(),
            discovery_endpoints: Vec::new(),
            discovery_failures: Vec::new(),
            vegetation_endpoints: Vec::new(),
            vegetation_failures: Vec::new(),
            loss_endpoints: Vec::new(),
            loss_failures: Vec::new(),
        }
    }

    /// Add every monitoring table along with the unique alert pair index.
    ///
    /// Creates AreaOfInterest, SatelliteCapture, ProcessedCapture, VegetationAnalysis and
    /// DeforestationAlert in dependency order.
    pub fn with_monitoring_tables(mut self) -> Self {
        self.include_monitoring_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// ```no_run
    /// use silvaguard_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), silvaguard_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AreaOfInterest)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a region into the database during `build()`.
    ///
    /// Regions receive ids in the order they are queued, starting at 1.
    pub fn with_mock_region(mut self, name: &str, latitude: f64, longitude: f64) -> Self {
        self.regions.push((name.to_string(), latitude, longitude));
        self
    }

    /// Mock capture discovery for a region.
    pub fn with_discovery_endpoint(
        mut self,
        region: RegionGeometry,
        captures: Vec<CaptureDescriptor>,
        expected_requests: usize,
    ) -> Self {
        self.discovery_endpoints
            .push((region, captures, expected_requests));
        self
    }

    /// Mock capture discovery for a region failing with the given HTTP status.
    pub fn with_discovery_failure(
        mut self,
        region: RegionGeometry,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.discovery_failures
            .push((region, status, expected_requests));
        self
    }

    /// Mock vegetation statistics for an asset.
    pub fn with_vegetation_endpoint(
        mut self,
        asset_id: &str,
        statistics: VegetationStatistics,
        expected_requests: usize,
    ) -> Self {
        self.vegetation_endpoints
            .push((asset_id.to_string(), statistics, expected_requests));
        self
    }

    /// Mock vegetation statistics for an asset failing with the given HTTP status.
    pub fn with_vegetation_failure(
        mut self,
        asset_id: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.vegetation_failures
            .push((asset_id.to_string(), status, expected_requests));
        self
    }

    /// Mock forest loss between two assets.
    pub fn with_loss_endpoint(
        mut self,
        before_asset_id: &str,
        after_asset_id: &str,
        loss: LossStatistics,
        expected_requests: usize,
    ) -> Self {
        self.loss_endpoints.push((
            before_asset_id.to_string(),
            after_asset_id.to_string(),
            loss,
            expected_requests,
        ));
        self
    }

    /// Mock forest loss between two assets failing with the given HTTP status.
    pub fn with_loss_failure(
        mut self,
        before_asset_id: &str,
        after_asset_id: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.loss_failures.push((
            before_asset_id.to_string(),
            after_asset_id.to_string(),
            status,
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Create the configured tables, fixtures and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::AnalysisError)` - Test client could not be constructed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_monitoring_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AreaOfInterest),
                schema.create_table_from_entity(entity::prelude::SatelliteCapture),
                schema.create_table_from_entity(entity::prelude::ProcessedCapture),
                schema.create_table_from_entity(entity::prelude::VegetationAnalysis),
                schema.create_table_from_entity(entity::prelude::DeforestationAlert),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_monitoring_tables {
            setup.with_alert_pair_index().await?;
        }

        for (name, latitude, longitude) in self.regions {
            setup
                .monitor()
                .insert_mock_region_at(&name, latitude, longitude)
                .await?;
        }

        // Custom endpoints and failures are created before successes so a test can queue a
        // failure followed by a success for the same request
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (region, status, expected) in self.discovery_failures {
            mocks.push(
                setup
                    .monitor()
                    .create_discovery_failure_endpoint(region, status, expected),
            );
        }

        for (region, captures, expected) in self.discovery_endpoints {
            mocks.push(
                setup
                    .monitor()
                    .create_discovery_endpoint(region, captures, expected),
            );
        }

        for (asset_id, status, expected) in self.vegetation_failures {
            mocks.push(
                setup
                    .monitor()
                    .create_vegetation_failure_endpoint(&asset_id, status, expected),
            );
        }

        for (asset_id, statistics, expected) in self.vegetation_endpoints {
            mocks.push(
                setup
                    .monitor()
                    .create_vegetation_endpoint(&asset_id, statistics, expected),
            );
        }

        for (before, after, status, expected) in self.loss_failures {
            mocks.push(
                setup
                    .monitor()
                    .create_loss_failure_endpoint(&before, &after, status, expected),
            );
        }

        for (before, after, loss, expected) in self.loss_endpoints {
            mocks.push(
                setup
                    .monitor()
                    .create_loss_endpoint(&before, &after, loss, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
