use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::region::RegionRepository,
    error::{monitor::MonitorError, Error},
    model::{
        db::AreaOfInterestModel,
        pulse::{MonitorSettings, PulseSummary, PulseWindow, RegionOutcome},
    },
    service::{
        analysis::AnalysisService, catalog::CatalogService, detection::DetectionService,
        resolution::ResolutionService, retry::RetryPolicy,
    },
};

/// Rejects pulse parameters outside their valid range
pub fn validate_pulse_parameters(
    time_window_days: i64,
    max_cloud_coverage: f64,
) -> Result<(), MonitorError> {
    if time_window_days <= 0 {
        return Err(MonitorError::InvalidTimeWindow(time_window_days));
    }

    if !(0.0..=100.0).contains(&max_cloud_coverage) {
        return Err(MonitorError::InvalidCloudCoverage(max_cloud_coverage));
    }

    Ok(())
}

/// Runs the discovery, resolution and detection pipeline over every region
pub struct PulseService<'a> {
    db: &'a DatabaseConnection,
    analysis_client: &'a analysis_client::Client,
    settings: MonitorSettings,
}

impl<'a> PulseService<'a> {
    /// Creates a new instance of [`PulseService`]
    pub fn new(
        db: &'a DatabaseConnection,
        analysis_client: &'a analysis_client::Client,
        settings: MonitorSettings,
    ) -> Self {
        Self {
            db,
            analysis_client,
            settings,
        }
    }

    /// Runs a pulse with the configured default window and cloud coverage
    pub async fn run_default_pulse(&self) -> Result<PulseSummary, Error> {
        self.run_pulse(
            self.settings.default_window_days,
            self.settings.default_max_cloud_coverage,
        )
        .await
    }

    /// Runs one monitoring pulse over all regions
    ///
    /// Regions are processed one after another. A region whose pipeline fails is logged and
    /// counted as failed, the remaining regions are still processed. Running the same pulse
    /// twice with no new captures stores nothing new.
    ///
    /// # Arguments
    /// - `time_window_days`: How far back from now to search for captures, greater than zero
    /// - `max_cloud_coverage`: Maximum accepted cloud coverage percentage, 0-100
    ///
    /// # Returns
    /// - `Ok(PulseSummary)` - Counters aggregated over all regions
    /// - `Err(Error::MonitorError)` - The parameters are out of range
    /// - `Err(Error::DbErr)` - Regions could not be loaded
    pub async fn run_pulse(
        &self,
        time_window_days: i64,
        max_cloud_coverage: f64,
    ) -> Result<PulseSummary, Error> {
        validate_pulse_parameters(time_window_days, max_cloud_coverage)?;

        let window = PulseWindow::ending_at(Utc::now(), time_window_days);
        let regions = RegionRepository::new(self.db).get_all().await?;

        tracing::info!(
            "Starting monitoring pulse over {} regions ({} days, max {}% clouds)",
            regions.len(),
            time_window_days,
            max_cloud_coverage
        );

        let analysis = AnalysisService::new(
            self.analysis_client,
            RetryPolicy::from_settings(&self.settings),
        );

        let mut summary = PulseSummary::default();

        for region in &regions {
            match self
                .run_region(&analysis, region, window, max_cloud_coverage)
                .await
            {
                Ok(outcome) => {
                    tracing::info!(
                        region_id = %region.id,
                        region_name = %region.name,
                        new_captures = %outcome.new_captures,
                        analyses_resolved = %outcome.analyses_resolved,
                        analyses_deferred = %outcome.analyses_deferred,
                        alert_created = %outcome.alert_created,
                        "Region processed"
                    );

                    summary.record(outcome);
                }
                Err(e) => {
                    tracing::error!(
                        region_id = %region.id,
                        region_name = %region.name,
                        "Failed to process region: {}",
                        e
                    );

                    summary.record_failure();
                }
            }
        }

        tracing::info!(
            regions_processed = %summary.regions_processed,
            regions_failed = %summary.regions_failed,
            new_captures = %summary.new_captures,
            alerts_created = %summary.alerts_created,
            "Monitoring pulse complete"
        );

        Ok(summary)
    }

    async fn run_region(
        &self,
        analysis: &AnalysisService<'_>,
        region: &AreaOfInterestModel,
        window: PulseWindow,
        max_cloud_coverage: f64,
    ) -> Result<RegionOutcome, Error> {
        let catalog = CatalogService::new(self.db, analysis)
            .sync_region(region, window, max_cloud_coverage)
            .await?;

        let resolution = ResolutionService::new(self.db, analysis)
            .resolve_pending(region)
            .await?;

        let alert = DetectionService::new(self.db, analysis, self.settings.alert_min_loss_hectares)
            .detect(region)
            .await?;

        Ok(RegionOutcome {
            new_captures: catalog.new_captures,
            analyses_resolved: resolution.resolved,
            analyses_deferred: resolution.deferred,
            alert_created: alert.is_some(),
        })
    }
}
