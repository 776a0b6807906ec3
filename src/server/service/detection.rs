use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        alert::{AlertRepository, NewAlert},
        analysis::{AnalysisRepository, TimelineEntry},
    },
    error::Error,
    model::db::{AreaOfInterestModel, DeforestationAlertModel},
    service::analysis::{region_geometry, AnalysisService, ServiceOutcome},
};

/// The two most recent entries of a chronologically ordered timeline as (before, after)
pub fn latest_pair(timeline: &[TimelineEntry]) -> Option<(&TimelineEntry, &TimelineEntry)> {
    match timeline {
        [.., before, after] => Some((before, after)),
        _ => None,
    }
}

/// Whether a loss is large enough to alert on, the threshold itself does not alert
pub fn exceeds_threshold(loss_hectares: f64, alert_min_loss_hectares: f64) -> bool {
    loss_hectares > alert_min_loss_hectares
}

pub struct DetectionService<'a> {
    db: &'a DatabaseConnection,
    analysis: &'a AnalysisService<'a>,
    alert_min_loss_hectares: f64,
}

impl<'a> DetectionService<'a> {
    /// Creates a new instance of [`DetectionService`]
    pub fn new(
        db: &'a DatabaseConnection,
        analysis: &'a AnalysisService<'a>,
        alert_min_loss_hectares: f64,
    ) -> Self {
        Self {
            db,
            analysis,
            alert_min_loss_hectares,
        }
    }

    /// Compares the two most recent resolved analyses of a region
    ///
    /// The loss computation is skipped when fewer than two analyses are resolved, when the pair
    /// was already alerted on, or when either capture lacks an asset. A loss that could not be
    /// fetched never alerts.
    ///
    /// # Returns
    /// - `Some(Model)` - The alert created by this call
    /// - `None` - No new alert
    pub async fn detect(
        &self,
        region: &AreaOfInterestModel,
    ) -> Result<Option<DeforestationAlertModel>, Error> {
        let analysis_repo = AnalysisRepository::new(self.db);
        let alert_repo = AlertRepository::new(self.db);

        let timeline = analysis_repo.get_timeline(region.id).await?;
        let Some((before, after)) = latest_pair(&timeline) else {
            tracing::debug!(
                region_id = %region.id,
                "Fewer than two resolved analyses, skipping comparison"
            );
            return Ok(None);
        };

        if alert_repo
            .exists_for_pair(before.analysis_id, after.analysis_id)
            .await?
        {
            tracing::debug!(
                region_id = %region.id,
                "Latest analysis pair already alerted on"
            );
            return Ok(None);
        }

        let (Some(before_asset), Some(after_asset)) = (&before.asset_id, &after.asset_id) else {
            tracing::debug!(
                region_id = %region.id,
                "Latest captures are missing assets, skipping comparison"
            );
            return Ok(None);
        };

        let loss = match self
            .analysis
            .forest_loss(before_asset, after_asset, Some(region_geometry(region)))
            .await
        {
            ServiceOutcome::Fetched(loss) => loss,
            ServiceOutcome::Degraded(_) => return Ok(None),
        };

        if !exceeds_threshold(loss.loss_hectares, self.alert_min_loss_hectares) {
            tracing::debug!(
                region_id = %region.id,
                loss_hectares = %loss.loss_hectares,
                "Forest loss below alert threshold"
            );
            return Ok(None);
        }

        let alert = alert_repo
            .create_if_absent(NewAlert {
                area_of_interest_id: region.id,
                analysis_before_id: before.analysis_id,
                analysis_after_id: after.analysis_id,
                forest_loss_hectares: loss.loss_hectares,
                loss_percentage: loss.loss_percentage,
                loss_tile_url: loss.tile_url,
            })
            .await?;

        if let Some(alert) = &alert {
            tracing::info!(
                region_id = %region.id,
                region_name = %region.name,
                loss_hectares = %alert.forest_loss_hectares,
                loss_percentage = %alert.loss_percentage,
                "Deforestation alert created"
            );
        }

        Ok(alert)
    }
}
