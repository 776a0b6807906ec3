use chrono::Utc;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct RegionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<entity::area_of_interest::Model, DbErr> {
        entity::prelude::AreaOfInterest::insert(entity::area_of_interest::ActiveModel {
            name: ActiveValue::Set(name),
            latitude: ActiveValue::Set(latitude),
            longitude: ActiveValue::Set(longitude),
            radius_km: ActiveValue::Set(radius_km),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// All regions in registration order
    pub async fn get_all(&self) -> Result<Vec<entity::area_of_interest::Model>, DbErr> {
        entity::prelude::AreaOfInterest::find()
            .order_by_asc(entity::area_of_interest::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::area_of_interest::Model>, DbErr> {
        entity::prelude::AreaOfInterest::find_by_id(id)
            .one(self.db)
            .await
    }
}
