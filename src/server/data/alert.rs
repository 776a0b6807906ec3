use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Values of an alert about to be recorded
#[derive(Clone, Debug, PartialEq)]
pub struct NewAlert {
    pub area_of_interest_id: i32,
    pub analysis_before_id: i32,
    pub analysis_after_id: i32,
    pub forest_loss_hectares: f64,
    pub loss_percentage: f64,
    pub loss_tile_url: Option<String>,
}

pub struct AlertRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlertRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether an alert was already recorded for this exact (before, after) pair
    pub async fn exists_for_pair(
        &self,
        analysis_before_id: i32,
        analysis_after_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::DeforestationAlert::find()
            .filter(entity::deforestation_alert::Column::AnalysisBeforeId.eq(analysis_before_id))
            .filter(entity::deforestation_alert::Column::AnalysisAfterId.eq(analysis_after_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records an alert unless one already exists for the same analysis pair
    ///
    /// # Returns
    /// - `Some(Model)` - The alert created by this call
    /// - `None` - An alert for the pair already existed
    pub async fn create_if_absent(
        &self,
        alert: NewAlert,
    ) -> Result<Option<entity::deforestation_alert::Model>, DbErr> {
        let alert = entity::deforestation_alert::ActiveModel {
            area_of_interest_id: ActiveValue::Set(alert.area_of_interest_id),
            analysis_before_id: ActiveValue::Set(alert.analysis_before_id),
            analysis_after_id: ActiveValue::Set(alert.analysis_after_id),
            forest_loss_hectares: ActiveValue::Set(alert.forest_loss_hectares),
            loss_percentage: ActiveValue::Set(alert.loss_percentage),
            loss_tile_url: ActiveValue::Set(alert.loss_tile_url),
            detected_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let result = entity::prelude::DeforestationAlert::insert_many([alert])
            .on_conflict(
                OnConflict::columns([
                    entity::deforestation_alert::Column::AnalysisBeforeId,
                    entity::deforestation_alert::Column::AnalysisAfterId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await;

        match result {
            Ok(created) => Ok(created.into_iter().next()),
            Err(DbErr::RecordNotInserted) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Alerts of a region, most recent first
    pub async fn get_by_region(
        &self,
        area_of_interest_id: i32,
    ) -> Result<Vec<entity::deforestation_alert::Model>, DbErr> {
        entity::prelude::DeforestationAlert::find()
            .filter(entity::deforestation_alert::Column::AreaOfInterestId.eq(area_of_interest_id))
            .order_by_desc(entity::deforestation_alert::Column::DetectedAt)
            .order_by_desc(entity::deforestation_alert::Column::Id)
            .all(self.db)
            .await
    }

    /// All alerts with their region, most recent first
    pub async fn get_all_with_region(
        &self,
    ) -> Result<
        Vec<(
            entity::deforestation_alert::Model,
            Option<entity::area_of_interest::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::DeforestationAlert::find()
            .find_also_related(entity::prelude::AreaOfInterest)
            .order_by_desc(entity::deforestation_alert::Column::DetectedAt)
            .order_by_desc(entity::deforestation_alert::Column::Id)
            .all(self.db)
            .await
    }
}
