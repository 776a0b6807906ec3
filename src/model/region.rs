use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A monitored area of interest
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegionDto {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    pub created_at: NaiveDateTime,
}

/// Request body for registering a new area of interest
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateRegionDto {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Radius of the monitored circle in kilometers, must be greater than zero
    pub radius_km: f64,
}

impl From<entity::area_of_interest::Model> for RegionDto {
    fn from(region: entity::area_of_interest::Model) -> Self {
        Self {
            id: region.id,
            name: region.name,
            latitude: region.latitude,
            longitude: region.longitude,
            radius_km: region.radius_km,
            created_at: region.created_at,
        }
    }
}
