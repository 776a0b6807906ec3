use crate::{
    model::{LossRequest, LossStatistics, RegionGeometry, VegetationRequest, VegetationStatistics},
    Client, Error,
};

/// Vegetation and forest-loss statistics endpoints of the Analysis Service.
pub struct StatisticsEndpoints<'a> {
    client: &'a Client,
}

impl<'a> StatisticsEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Reduces one capture to vegetation statistics.
    ///
    /// When `region` is `None` the service reduces over the whole capture footprint.
    pub async fn vegetation(
        &self,
        asset_id: &str,
        region: Option<RegionGeometry>,
    ) -> Result<VegetationStatistics, Error> {
        let body = VegetationRequest { asset_id, region };

        let stats: VegetationStatistics = self
            .client
            .post_json("v1/statistics/vegetation", &body)
            .await?;

        if !(0.0..=100.0).contains(&stats.forest_cover_percentage) {
            return Err(Error::InvalidResponse(format!(
                "forest cover percentage {} for asset {} is outside 0-100",
                stats.forest_cover_percentage, asset_id
            )));
        }

        Ok(stats)
    }

    /// Computes forest loss between an earlier and a later capture.
    pub async fn loss(
        &self,
        before_asset_id: &str,
        after_asset_id: &str,
        region: Option<RegionGeometry>,
    ) -> Result<LossStatistics, Error> {
        let body = LossRequest {
            before_asset_id,
            after_asset_id,
            region,
        };

        let loss: LossStatistics = self.client.post_json("v1/statistics/loss", &body).await?;

        if loss.loss_hectares < 0.0 || loss.loss_hectares.is_nan() {
            return Err(Error::InvalidResponse(format!(
                "negative forest loss {} ha between {} and {}",
                loss.loss_hectares, before_asset_id, after_asset_id
            )));
        }

        Ok(loss)
    }
}
