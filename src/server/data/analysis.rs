use analysis_client::model::VegetationStatistics;
use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::AnalysisStatus;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

/// Method tag stored on processing markers created by this service
pub const PROCESSING_METHOD: &str = "analysis-service";

/// A resolved analysis joined with the capture it was computed from
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct TimelineEntry {
    pub analysis_id: i32,
    pub satellite_capture_id: i32,
    pub capture_id: String,
    pub asset_id: Option<String>,
    pub acquired_at: NaiveDateTime,
    pub mean_tree_probability: f64,
    pub forest_cover_percentage: f64,
    pub tile_url: Option<String>,
}

/// A pending analysis along with the asset it has to be resolved from
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct PendingAnalysis {
    pub analysis_id: i32,
    pub capture_id: String,
    pub asset_id: String,
}

pub struct AnalysisRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnalysisRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a processing marker and a pending analysis for each capture
    ///
    /// Captures that already have a marker or an analysis are skipped, making the call safe to
    /// repeat. Pass a transaction to register atomically with the capture insert.
    ///
    /// # Returns
    /// Only the analyses created by this call
    pub async fn register_pending(
        &self,
        satellite_capture_ids: &[i32],
    ) -> Result<Vec<entity::vegetation_analysis::Model>, DbErr> {
        if satellite_capture_ids.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();

        let markers = satellite_capture_ids
            .iter()
            .map(|&satellite_capture_id| entity::processed_capture::ActiveModel {
                satellite_capture_id: ActiveValue::Set(satellite_capture_id),
                method: ActiveValue::Set(PROCESSING_METHOD.to_string()),
                metadata: ActiveValue::Set(serde_json::json!({ "method": PROCESSING_METHOD })),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::ProcessedCapture::insert_many(markers)
            .on_conflict(
                OnConflict::column(entity::processed_capture::Column::SatelliteCaptureId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
            .map(|_| ())
            .or_else(|e| match e {
                DbErr::RecordNotInserted => Ok(()),
                e => Err(e),
            })?;

        let marker_ids: Vec<i32> = entity::prelude::ProcessedCapture::find()
            .select_only()
            .column(entity::processed_capture::Column::Id)
            .filter(
                entity::processed_capture::Column::SatelliteCaptureId
                    .is_in(satellite_capture_ids.iter().copied()),
            )
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        if marker_ids.is_empty() {
            return Ok(Vec::new());
        }

        let analyses = marker_ids
            .into_iter()
            .map(|processed_capture_id| entity::vegetation_analysis::ActiveModel {
                processed_capture_id: ActiveValue::Set(processed_capture_id),
                status: ActiveValue::Set(AnalysisStatus::Pending),
                mean_tree_probability: ActiveValue::Set(0.0),
                forest_cover_percentage: ActiveValue::Set(0.0),
                tile_url: ActiveValue::Set(None),
                resolution_attempts: ActiveValue::Set(0),
                analyzed_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        let result = entity::prelude::VegetationAnalysis::insert_many(analyses)
            .on_conflict(
                OnConflict::column(entity::vegetation_analysis::Column::ProcessedCaptureId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await;

        match result {
            Ok(created) => Ok(created),
            Err(DbErr::RecordNotInserted) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Pending analyses of a region whose capture has an asset, oldest capture first
    pub async fn get_pending(
        &self,
        area_of_interest_id: i32,
    ) -> Result<Vec<PendingAnalysis>, DbErr> {
        entity::prelude::VegetationAnalysis::find()
            .select_only()
            .column_as(entity::vegetation_analysis::Column::Id, "analysis_id")
            .column_as(entity::satellite_capture::Column::CaptureId, "capture_id")
            .column_as(entity::satellite_capture::Column::AssetId, "asset_id")
            .join(
                JoinType::InnerJoin,
                entity::vegetation_analysis::Relation::ProcessedCapture.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::processed_capture::Relation::SatelliteCapture.def(),
            )
            .filter(entity::satellite_capture::Column::AreaOfInterestId.eq(area_of_interest_id))
            .filter(entity::satellite_capture::Column::AssetId.is_not_null())
            .filter(entity::vegetation_analysis::Column::Status.eq(AnalysisStatus::Pending))
            .order_by_asc(entity::satellite_capture::Column::AcquiredAt)
            .order_by_asc(entity::satellite_capture::Column::Id)
            .into_model::<PendingAnalysis>()
            .all(self.db)
            .await
    }

    /// Resolved analyses of a region ordered by capture acquisition time
    ///
    /// Captures acquired at the same instant are ordered by their insertion id.
    pub async fn get_timeline(
        &self,
        area_of_interest_id: i32,
    ) -> Result<Vec<TimelineEntry>, DbErr> {
        entity::prelude::VegetationAnalysis::find()
            .select_only()
            .column_as(entity::vegetation_analysis::Column::Id, "analysis_id")
            .column_as(entity::satellite_capture::Column::Id, "satellite_capture_id")
            .column_as(entity::satellite_capture::Column::CaptureId, "capture_id")
            .column_as(entity::satellite_capture::Column::AssetId, "asset_id")
            .column_as(entity::satellite_capture::Column::AcquiredAt, "acquired_at")
            .column_as(
                entity::vegetation_analysis::Column::MeanTreeProbability,
                "mean_tree_probability",
            )
            .column_as(
                entity::vegetation_analysis::Column::ForestCoverPercentage,
                "forest_cover_percentage",
            )
            .column_as(entity::vegetation_analysis::Column::TileUrl, "tile_url")
            .join(
                JoinType::InnerJoin,
                entity::vegetation_analysis::Relation::ProcessedCapture.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::processed_capture::Relation::SatelliteCapture.def(),
            )
            .filter(entity::satellite_capture::Column::AreaOfInterestId.eq(area_of_interest_id))
            .filter(entity::vegetation_analysis::Column::Status.eq(AnalysisStatus::Resolved))
            .order_by_asc(entity::satellite_capture::Column::AcquiredAt)
            .order_by_asc(entity::satellite_capture::Column::Id)
            .into_model::<TimelineEntry>()
            .all(self.db)
            .await
    }

    /// Overwrites an analysis with fetched statistics and marks it resolved
    ///
    /// Resolving an already resolved analysis replaces its statistics in place.
    ///
    /// # Returns
    /// - `Some(Model)` - The updated analysis
    /// - `None` - No analysis exists with the given ID
    pub async fn resolve(
        &self,
        analysis_id: i32,
        statistics: VegetationStatistics,
    ) -> Result<Option<entity::vegetation_analysis::Model>, DbErr> {
        let analysis = match entity::prelude::VegetationAnalysis::find_by_id(analysis_id)
            .one(self.db)
            .await?
        {
            Some(analysis) => analysis,
            None => return Ok(None),
        };

        let now = Utc::now().naive_utc();
        let attempts = analysis.resolution_attempts;

        let mut analysis_am = analysis.into_active_model();
        analysis_am.status = ActiveValue::Set(AnalysisStatus::Resolved);
        analysis_am.mean_tree_probability = ActiveValue::Set(statistics.mean_tree_probability);
        analysis_am.forest_cover_percentage =
            ActiveValue::Set(statistics.forest_cover_percentage);
        analysis_am.tile_url = ActiveValue::Set(statistics.tile_url);
        analysis_am.resolution_attempts = ActiveValue::Set(attempts + 1);
        analysis_am.analyzed_at = ActiveValue::Set(Some(now));
        analysis_am.updated_at = ActiveValue::Set(now);

        let analysis = analysis_am.update(self.db).await?;

        Ok(Some(analysis))
    }

    /// Counts a resolution attempt that produced no statistics, leaving the status unchanged
    pub async fn record_failed_attempt(
        &self,
        analysis_id: i32,
    ) -> Result<Option<entity::vegetation_analysis::Model>, DbErr> {
        let analysis = match entity::prelude::VegetationAnalysis::find_by_id(analysis_id)
            .one(self.db)
            .await?
        {
            Some(analysis) => analysis,
            None => return Ok(None),
        };

        let attempts = analysis.resolution_attempts;

        let mut analysis_am = analysis.into_active_model();
        analysis_am.resolution_attempts = ActiveValue::Set(attempts + 1);
        analysis_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let analysis = analysis_am.update(self.db).await?;

        Ok(Some(analysis))
    }
}
