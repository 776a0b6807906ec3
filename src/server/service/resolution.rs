use sea_orm::DatabaseConnection;

use crate::server::{
    data::analysis::AnalysisRepository,
    error::Error,
    model::db::AreaOfInterestModel,
    service::analysis::{region_geometry, AnalysisService, ServiceOutcome},
};

/// Result of resolving a region's pending analyses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    pub resolved: usize,
    /// Analyses left pending because statistics could not be fetched
    pub deferred: usize,
}

pub struct ResolutionService<'a> {
    db: &'a DatabaseConnection,
    analysis: &'a AnalysisService<'a>,
}

impl<'a> ResolutionService<'a> {
    /// Creates a new instance of [`ResolutionService`]
    pub fn new(db: &'a DatabaseConnection, analysis: &'a AnalysisService<'a>) -> Self {
        Self { db, analysis }
    }

    /// Fetches statistics for every pending analysis of a region
    ///
    /// Analyses whose statistics could not be fetched stay pending with their attempt counter
    /// incremented, they are retried on the next pulse and never enter the comparison timeline.
    pub async fn resolve_pending(
        &self,
        region: &AreaOfInterestModel,
    ) -> Result<ResolutionSummary, Error> {
        let analysis_repo = AnalysisRepository::new(self.db);
        let geometry = region_geometry(region);

        let pending = analysis_repo.get_pending(region.id).await?;
        let mut summary = ResolutionSummary::default();

        for entry in pending {
            match self
                .analysis
                .vegetation_statistics(&entry.asset_id, Some(geometry))
                .await
            {
                ServiceOutcome::Fetched(statistics) => {
                    analysis_repo.resolve(entry.analysis_id, statistics).await?;
                    summary.resolved += 1;
                }
                ServiceOutcome::Degraded(_) => {
                    analysis_repo.record_failed_attempt(entry.analysis_id).await?;

                    tracing::debug!(
                        region_id = %region.id,
                        capture_id = %entry.capture_id,
                        "Analysis left pending until the next pulse"
                    );

                    summary.deferred += 1;
                }
            }
        }

        Ok(summary)
    }
}
