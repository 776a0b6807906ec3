use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::region::RegionDto;

/// Latest resolved vegetation analysis of a region
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AnalysisSnapshotDto {
    pub analysis_id: i32,
    pub capture_id: String,
    pub acquired_at: NaiveDateTime,
    pub mean_tree_probability: f64,
    pub forest_cover_percentage: f64,
    pub tile_url: Option<String>,
}

/// A recorded deforestation alert
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AlertDto {
    pub id: i32,
    pub region_id: i32,
    pub region_name: Option<String>,
    pub analysis_before_id: i32,
    pub analysis_after_id: i32,
    pub forest_loss_hectares: f64,
    pub loss_percentage: f64,
    pub loss_tile_url: Option<String>,
    pub detected_at: NaiveDateTime,
}

/// A region with its latest resolved analysis and all-time alerts
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MapRegionDto {
    pub region: RegionDto,
    pub latest_analysis: Option<AnalysisSnapshotDto>,
    pub alerts: Vec<AlertDto>,
}
