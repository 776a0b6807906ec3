//! Analysis Service calls that never fail the pulse.
//!
//! Each call is retried according to the [`RetryPolicy`]. Once retries are exhausted or the
//! error is permanent, the failure is logged and a neutral result is returned instead so one
//! misbehaving capture or region cannot abort the rest of the pulse.

use analysis_client::model::{
    CaptureDescriptor, CaptureQuery, LossStatistics, RegionGeometry, VegetationStatistics,
};

use crate::server::{
    error::Error,
    model::{db::AreaOfInterestModel, pulse::PulseWindow},
    service::retry::RetryPolicy,
};

/// Result of an Analysis Service call after retries
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceOutcome<T> {
    /// The service answered with this value
    Fetched(T),
    /// The call failed and this neutral value stands in for the answer
    Degraded(T),
}

impl<T> ServiceOutcome<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Fetched(value) | Self::Degraded(value) => value,
        }
    }
}

/// Geometry sent to the Analysis Service for a region
pub fn region_geometry(region: &AreaOfInterestModel) -> RegionGeometry {
    RegionGeometry {
        latitude: region.latitude,
        longitude: region.longitude,
        radius_km: region.radius_km,
    }
}

pub struct AnalysisService<'a> {
    client: &'a analysis_client::Client,
    retry: RetryPolicy,
}

impl<'a> AnalysisService<'a> {
    /// Creates a new instance of [`AnalysisService`]
    pub fn new(client: &'a analysis_client::Client, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Discovers captures over a region acquired within the window
    ///
    /// Degrades to an empty list.
    pub async fn discover_captures(
        &self,
        region: &AreaOfInterestModel,
        window: PulseWindow,
        max_cloud_coverage: f64,
    ) -> ServiceOutcome<Vec<CaptureDescriptor>> {
        let client = self.client;
        let query = CaptureQuery {
            region: region_geometry(region),
            start: window.start,
            end: window.end,
            max_cloud_coverage,
        };
        let query = &query;

        let description = format!("capture discovery for region {}", region.id);
        let result = self
            .retry
            .execute(&description, move || async move {
                client
                    .captures()
                    .search(query)
                    .await
                    .map_err(Error::from)
            })
            .await;

        match result {
            Ok(captures) => ServiceOutcome::Fetched(captures),
            Err(e) => {
                tracing::warn!(
                    region_id = %region.id,
                    region_name = %region.name,
                    "Capture discovery failed, continuing without new captures: {}",
                    e
                );

                ServiceOutcome::Degraded(Vec::new())
            }
        }
    }

    /// Fetches vegetation statistics for an asset
    ///
    /// Degrades to zero statistics without a tile layer.
    pub async fn vegetation_statistics(
        &self,
        asset_id: &str,
        region: Option<RegionGeometry>,
    ) -> ServiceOutcome<VegetationStatistics> {
        let client = self.client;

        let description = format!("vegetation statistics for asset {}", asset_id);
        let result = self
            .retry
            .execute(&description, move || async move {
                client
                    .statistics()
                    .vegetation(asset_id, region)
                    .await
                    .map_err(Error::from)
            })
            .await;

        match result {
            Ok(statistics) => ServiceOutcome::Fetched(statistics),
            Err(e) => {
                tracing::warn!(
                    asset_id = %asset_id,
                    "Vegetation statistics unavailable, using neutral result: {}",
                    e
                );

                ServiceOutcome::Degraded(VegetationStatistics::default())
            }
        }
    }

    /// Fetches forest loss between an earlier and a later asset
    ///
    /// Degrades to zero loss without a tile layer.
    pub async fn forest_loss(
        &self,
        before_asset_id: &str,
        after_asset_id: &str,
        region: Option<RegionGeometry>,
    ) -> ServiceOutcome<LossStatistics> {
        let client = self.client;

        let description = format!(
            "forest loss between assets {} and {}",
            before_asset_id, after_asset_id
        );
        let result = self
            .retry
            .execute(&description, move || async move {
                client
                    .statistics()
                    .loss(before_asset_id, after_asset_id, region)
                    .await
                    .map_err(Error::from)
            })
            .await;

        match result {
            Ok(loss) => ServiceOutcome::Fetched(loss),
            Err(e) => {
                tracing::warn!(
                    before_asset_id = %before_asset_id,
                    after_asset_id = %after_asset_id,
                    "Forest loss unavailable, using neutral result: {}",
                    e
                );

                ServiceOutcome::Degraded(LossStatistics::default())
            }
        }
    }
}
