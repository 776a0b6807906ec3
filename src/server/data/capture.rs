use analysis_client::model::CaptureDescriptor;
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct CaptureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CaptureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts captures for a region, skipping any `capture_id` already stored
    ///
    /// # Returns
    /// Only the captures that were newly inserted by this call. A capture already owned by any
    /// region, including another one, is left untouched.
    pub async fn insert_missing(
        &self,
        area_of_interest_id: i32,
        captures: Vec<CaptureDescriptor>,
    ) -> Result<Vec<entity::satellite_capture::Model>, DbErr> {
        if captures.is_empty() {
            return Ok(Vec::new());
        }

        let captures = captures
            .into_iter()
            .map(|capture| entity::satellite_capture::ActiveModel {
                area_of_interest_id: ActiveValue::Set(area_of_interest_id),
                capture_id: ActiveValue::Set(capture.capture_id),
                acquired_at: ActiveValue::Set(capture.acquired_at.naive_utc()),
                cloud_coverage: ActiveValue::Set(capture.cloud_coverage),
                platform: ActiveValue::Set(capture.platform),
                asset_id: ActiveValue::Set(capture.asset_id),
                metadata: ActiveValue::Set(capture.metadata),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            });

        let result = entity::prelude::SatelliteCapture::insert_many(captures)
            .on_conflict(
                OnConflict::column(entity::satellite_capture::Column::CaptureId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await;

        match result {
            Ok(inserted) => Ok(inserted),
            // Every row conflicted
            Err(DbErr::RecordNotInserted) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Sets the asset of a region's capture when none or a blank one is stored
    ///
    /// # Returns
    /// `true` if the capture existed in this region without an asset and now has one
    pub async fn attach_asset(
        &self,
        area_of_interest_id: i32,
        capture_id: &str,
        asset_id: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::SatelliteCapture::update_many()
            .col_expr(
                entity::satellite_capture::Column::AssetId,
                migration::Expr::value(asset_id),
            )
            .filter(entity::satellite_capture::Column::AreaOfInterestId.eq(area_of_interest_id))
            .filter(entity::satellite_capture::Column::CaptureId.eq(capture_id))
            .filter(
                Condition::any()
                    .add(entity::satellite_capture::Column::AssetId.is_null())
                    .add(entity::satellite_capture::Column::AssetId.eq("")),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Captures of a region that have a non-blank asset but no processing marker yet
    pub async fn get_unregistered(
        &self,
        area_of_interest_id: i32,
    ) -> Result<Vec<entity::satellite_capture::Model>, DbErr> {
        entity::prelude::SatelliteCapture::find()
            .left_join(entity::prelude::ProcessedCapture)
            .filter(entity::satellite_capture::Column::AreaOfInterestId.eq(area_of_interest_id))
            .filter(entity::satellite_capture::Column::AssetId.is_not_null())
            .filter(entity::satellite_capture::Column::AssetId.ne(""))
            .filter(entity::processed_capture::Column::Id.is_null())
            .order_by_asc(entity::satellite_capture::Column::Id)
            .all(self.db)
            .await
    }

    /// Captures of a region ordered by acquisition time
    pub async fn get_by_region(
        &self,
        area_of_interest_id: i32,
    ) -> Result<Vec<entity::satellite_capture::Model>, DbErr> {
        entity::prelude::SatelliteCapture::find()
            .filter(entity::satellite_capture::Column::AreaOfInterestId.eq(area_of_interest_id))
            .order_by_asc(entity::satellite_capture::Column::AcquiredAt)
            .order_by_asc(entity::satellite_capture::Column::Id)
            .all(self.db)
            .await
    }
}
