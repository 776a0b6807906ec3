use std::collections::HashSet;

use analysis_client::model::CaptureDescriptor;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{analysis::AnalysisRepository, capture::CaptureRepository},
    error::Error,
    model::{db::AreaOfInterestModel, pulse::PulseWindow},
    service::analysis::AnalysisService,
};

/// Result of synchronizing a region's capture catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogSync {
    /// Distinct captures returned by discovery
    pub discovered: usize,
    /// Captures stored for the first time
    pub new_captures: usize,
    /// Previously stored captures that received their asset
    pub assets_attached: usize,
    /// Captures registered for analysis, including late registrations
    pub registered: usize,
}

/// Drops repeated capture ids, keeping the first occurrence
pub fn dedupe_captures(captures: Vec<CaptureDescriptor>) -> Vec<CaptureDescriptor> {
    let mut seen = HashSet::new();

    captures
        .into_iter()
        .filter(|capture| seen.insert(capture.capture_id.clone()))
        .collect()
}

/// Treats a blank asset reference as no asset at all
///
/// A capture stored with a blank asset would be registered for analysis it can never complete
/// and would never receive its real asset later.
pub fn normalize_asset(mut capture: CaptureDescriptor) -> CaptureDescriptor {
    capture.asset_id = capture
        .asset_id
        .map(|asset_id| asset_id.trim().to_string())
        .filter(|asset_id| !asset_id.is_empty());

    capture
}

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
    analysis: &'a AnalysisService<'a>,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection, analysis: &'a AnalysisService<'a>) -> Self {
        Self { db, analysis }
    }

    /// Discovers captures for a region and stores the ones not seen before
    ///
    /// New captures and their registration for analysis are written in a single transaction.
    /// Stored captures that were discovered without an asset get it attached once discovery
    /// reports one, and any capture with an asset but no processing marker is registered.
    /// A failed discovery stores nothing new but still registers leftover captures.
    pub async fn sync_region(
        &self,
        region: &AreaOfInterestModel,
        window: PulseWindow,
        max_cloud_coverage: f64,
    ) -> Result<CatalogSync, Error> {
        let discovered = self
            .analysis
            .discover_captures(region, window, max_cloud_coverage)
            .await
            .into_inner();
        let discovered: Vec<CaptureDescriptor> = dedupe_captures(discovered)
            .into_iter()
            .map(normalize_asset)
            .collect();

        let txn = self.db.begin().await?;

        let capture_repo = CaptureRepository::new(&txn);
        let analysis_repo = AnalysisRepository::new(&txn);

        let discovered_count = discovered.len();
        let inserted = capture_repo
            .insert_missing(region.id, discovered.clone())
            .await?;
        let inserted_ids: HashSet<&str> = inserted.iter().map(|c| c.capture_id.as_str()).collect();

        let mut assets_attached = 0;
        for capture in discovered
            .iter()
            .filter(|c| !inserted_ids.contains(c.capture_id.as_str()))
        {
            if let Some(asset_id) = &capture.asset_id {
                if capture_repo
                    .attach_asset(region.id, &capture.capture_id, asset_id)
                    .await?
                {
                    assets_attached += 1;
                }
            }
        }

        let unregistered: Vec<i32> = capture_repo
            .get_unregistered(region.id)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();
        let registered = analysis_repo.register_pending(&unregistered).await?;

        txn.commit().await?;

        if assets_attached > 0 {
            tracing::info!(
                region_id = %region.id,
                "Attached late assets to {} stored captures",
                assets_attached
            );
        }

        Ok(CatalogSync {
            discovered: discovered_count,
            new_captures: inserted.len(),
            assets_attached,
            registered: registered.len(),
        })
    }
}
