use sea_orm::DatabaseConnection;

use crate::{
    model::region::CreateRegionDto,
    server::{
        data::region::RegionRepository,
        error::{monitor::MonitorError, Error},
        model::db::AreaOfInterestModel,
    },
};

/// Rejects region definitions that cannot describe a circle on the globe
pub fn validate_region(region: &CreateRegionDto) -> Result<(), MonitorError> {
    if region.name.trim().is_empty() {
        return Err(MonitorError::InvalidRegion("name must not be empty".to_string()));
    }

    if !(-90.0..=90.0).contains(&region.latitude) {
        return Err(MonitorError::InvalidRegion(format!(
            "latitude {} is outside -90 to 90",
            region.latitude
        )));
    }

    if !(-180.0..=180.0).contains(&region.longitude) {
        return Err(MonitorError::InvalidRegion(format!(
            "longitude {} is outside -180 to 180",
            region.longitude
        )));
    }

    if !(region.radius_km.is_finite() && region.radius_km > 0.0) {
        return Err(MonitorError::InvalidRegion(format!(
            "radius {} km must be greater than zero",
            region.radius_km
        )));
    }

    Ok(())
}

pub struct RegionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionService<'a> {
    /// Creates a new instance of [`RegionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new area of interest to be monitored from the next pulse on
    pub async fn create_region(
        &self,
        region: CreateRegionDto,
    ) -> Result<AreaOfInterestModel, Error> {
        validate_region(&region)?;

        let region = RegionRepository::new(self.db)
            .create(
                region.name.trim().to_string(),
                region.latitude,
                region.longitude,
                region.radius_km,
            )
            .await?;

        tracing::info!(region_id = %region.id, region_name = %region.name, "Region registered");

        Ok(region)
    }

    pub async fn get_regions(&self) -> Result<Vec<AreaOfInterestModel>, Error> {
        Ok(RegionRepository::new(self.db).get_all().await?)
    }
}
