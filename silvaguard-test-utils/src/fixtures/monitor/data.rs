//! Monitoring database insertion utilities.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::AnalysisStatus;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::{
    error::TestError,
    fixtures::monitor::{factory::MOCK_RADIUS_KM, MonitorFixtures},
};

impl<'a> MonitorFixtures<'a> {
    /// Insert a region centered at 0,0.
    pub async fn insert_mock_region(
        &self,
        name: &str,
    ) -> Result<entity::area_of_interest::Model, TestError> {
        self.insert_mock_region_at(name, 0.0, 0.0).await
    }

    /// Insert a region centered at the given coordinates with the mock radius.
    pub async fn insert_mock_region_at(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<entity::area_of_interest::Model, TestError> {
        Ok(
            entity::prelude::AreaOfInterest::insert(entity::area_of_interest::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                latitude: ActiveValue::Set(latitude),
                longitude: ActiveValue::Set(longitude),
                radius_km: ActiveValue::Set(MOCK_RADIUS_KM),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a capture for a region without registering it for analysis.
    pub async fn insert_mock_capture(
        &self,
        area_of_interest_id: i32,
        capture_id: &str,
        acquired_at: DateTime<Utc>,
        asset_id: Option<&str>,
    ) -> Result<entity::satellite_capture::Model, TestError> {
        Ok(
            entity::prelude::SatelliteCapture::insert(entity::satellite_capture::ActiveModel {
                area_of_interest_id: ActiveValue::Set(area_of_interest_id),
                capture_id: ActiveValue::Set(capture_id.to_string()),
                acquired_at: ActiveValue::Set(acquired_at.naive_utc()),
                cloud_coverage: ActiveValue::Set(5.0),
                platform: ActiveValue::Set("Sentinel-2".to_string()),
                asset_id: ActiveValue::Set(asset_id.map(str::to_string)),
                metadata: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a processing marker and a pending analysis for a capture.
    pub async fn insert_pending_analysis(
        &self,
        satellite_capture_id: i32,
    ) -> Result<entity::vegetation_analysis::Model, TestError> {
        let marker = self.insert_processing_marker(satellite_capture_id).await?;
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::VegetationAnalysis::insert(
            entity::vegetation_analysis::ActiveModel {
                processed_capture_id: ActiveValue::Set(marker.id),
                status: ActiveValue::Set(AnalysisStatus::Pending),
                mean_tree_probability: ActiveValue::Set(0.0),
                forest_cover_percentage: ActiveValue::Set(0.0),
                tile_url: ActiveValue::Set(None),
                resolution_attempts: ActiveValue::Set(0),
                analyzed_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a processing marker and a resolved analysis with the given forest cover.
    pub async fn insert_resolved_analysis(
        &self,
        satellite_capture_id: i32,
        forest_cover_percentage: f64,
    ) -> Result<entity::vegetation_analysis::Model, TestError> {
        let marker = self.insert_processing_marker(satellite_capture_id).await?;
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::VegetationAnalysis::insert(
            entity::vegetation_analysis::ActiveModel {
                processed_capture_id: ActiveValue::Set(marker.id),
                status: ActiveValue::Set(AnalysisStatus::Resolved),
                mean_tree_probability: ActiveValue::Set(forest_cover_percentage / 100.0),
                forest_cover_percentage: ActiveValue::Set(forest_cover_percentage),
                tile_url: ActiveValue::Set(None),
                resolution_attempts: ActiveValue::Set(1),
                analyzed_at: ActiveValue::Set(Some(now)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an alert between two analyses of a region.
    pub async fn insert_mock_alert(
        &self,
        area_of_interest_id: i32,
        analysis_before_id: i32,
        analysis_after_id: i32,
        forest_loss_hectares: f64,
    ) -> Result<entity::deforestation_alert::Model, TestError> {
        Ok(entity::prelude::DeforestationAlert::insert(
            entity::deforestation_alert::ActiveModel {
                area_of_interest_id: ActiveValue::Set(area_of_interest_id),
                analysis_before_id: ActiveValue::Set(analysis_before_id),
                analysis_after_id: ActiveValue::Set(analysis_after_id),
                forest_loss_hectares: ActiveValue::Set(forest_loss_hectares),
                loss_percentage: ActiveValue::Set(10.0),
                loss_tile_url: ActiveValue::Set(None),
                detected_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Make every capture insert for a region fail with a database error.
    ///
    /// Installs a SQLite trigger aborting the statement, so the region's catalog
    /// synchronization returns an error while other regions are unaffected.
    pub async fn reject_capture_inserts(&self, area_of_interest_id: i32) -> Result<(), TestError> {
        self.setup
            .db
            .execute_unprepared(&format!(
                "CREATE TRIGGER reject_captures_{id} BEFORE INSERT ON satellite_capture \
                 WHEN NEW.area_of_interest_id = {id} \
                 BEGIN SELECT RAISE(ABORT, 'capture inserts rejected for region {id}'); END;",
                id = area_of_interest_id
            ))
            .await?;

        Ok(())
    }

    async fn insert_processing_marker(
        &self,
        satellite_capture_id: i32,
    ) -> Result<entity::processed_capture::Model, TestError> {
        Ok(
            entity::prelude::ProcessedCapture::insert(entity::processed_capture::ActiveModel {
                satellite_capture_id: ActiveValue::Set(satellite_capture_id),
                method: ActiveValue::Set("analysis-service".to_string()),
                metadata: ActiveValue::Set(serde_json::json!({ "method": "analysis-service" })),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
