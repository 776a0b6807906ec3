use sea_orm::DatabaseConnection;

use crate::{
    model::{
        map::{AlertDto, AnalysisSnapshotDto, MapRegionDto},
        region::RegionDto,
    },
    server::{
        data::{alert::AlertRepository, analysis::AnalysisRepository, region::RegionRepository},
        error::{monitor::MonitorError, Error},
        model::db::{AreaOfInterestModel, DeforestationAlertModel},
    },
};

fn alert_dto(alert: DeforestationAlertModel, region_name: Option<String>) -> AlertDto {
    AlertDto {
        id: alert.id,
        region_id: alert.area_of_interest_id,
        region_name,
        analysis_before_id: alert.analysis_before_id,
        analysis_after_id: alert.analysis_after_id,
        forest_loss_hectares: alert.forest_loss_hectares,
        loss_percentage: alert.loss_percentage,
        loss_tile_url: alert.loss_tile_url,
        detected_at: alert.detected_at,
    }
}

/// Read-only projections of the monitoring state for the map and alert feed
pub struct OverviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OverviewService<'a> {
    /// Creates a new instance of [`OverviewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every region with its latest resolved analysis and all of its alerts
    pub async fn get_map(&self) -> Result<Vec<MapRegionDto>, Error> {
        let analysis_repo = AnalysisRepository::new(self.db);
        let alert_repo = AlertRepository::new(self.db);

        let regions = RegionRepository::new(self.db).get_all().await?;
        let mut map = Vec::with_capacity(regions.len());

        for region in regions {
            let latest_analysis = analysis_repo
                .get_timeline(region.id)
                .await?
                .pop()
                .map(|entry| AnalysisSnapshotDto {
                    analysis_id: entry.analysis_id,
                    capture_id: entry.capture_id,
                    acquired_at: entry.acquired_at,
                    mean_tree_probability: entry.mean_tree_probability,
                    forest_cover_percentage: entry.forest_cover_percentage,
                    tile_url: entry.tile_url,
                });

            let alerts = alert_repo
                .get_by_region(region.id)
                .await?
                .into_iter()
                .map(|alert| alert_dto(alert, Some(region.name.clone())))
                .collect();

            map.push(MapRegionDto {
                region: RegionDto::from(region),
                latest_analysis,
                alerts,
            });
        }

        Ok(map)
    }

    /// All alerts, most recent first
    pub async fn get_alerts(&self) -> Result<Vec<AlertDto>, Error> {
        let alerts = AlertRepository::new(self.db).get_all_with_region().await?;

        Ok(alerts
            .into_iter()
            .map(|(alert, region)| alert_dto(alert, region.map(|r| r.name)))
            .collect())
    }

    /// Alerts of a single region, most recent first
    pub async fn get_region_alerts(&self, region_id: i32) -> Result<Vec<AlertDto>, Error> {
        let region: AreaOfInterestModel = RegionRepository::new(self.db)
            .get_by_id(region_id)
            .await?
            .ok_or(MonitorError::RegionNotFound(region_id))?;

        Ok(AlertRepository::new(self.db)
            .get_by_region(region.id)
            .await?
            .into_iter()
            .map(|alert| alert_dto(alert, Some(region.name.clone())))
            .collect())
    }
}
