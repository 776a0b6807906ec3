//! Analysis Service payload factories with default test values.

use analysis_client::model::{
    CaptureDescriptor, LossStatistics, RegionGeometry, VegetationStatistics,
};
use chrono::{DateTime, Utc};

/// Radius used by every mock region.
pub const MOCK_RADIUS_KM: f64 = 10.0;

/// Geometry of a mock region centered at the given coordinates.
pub fn mock_region_geometry(latitude: f64, longitude: f64) -> RegionGeometry {
    RegionGeometry {
        latitude,
        longitude,
        radius_km: MOCK_RADIUS_KM,
    }
}

/// Capture descriptor with low cloud coverage.
///
/// # Arguments
/// - `capture_id` - Provider identifier of the capture
/// - `acquired_at` - Acquisition timestamp
/// - `asset_id` - Analyzable asset reference, `None` for a capture without a resolved asset
pub fn mock_capture(
    capture_id: &str,
    acquired_at: DateTime<Utc>,
    asset_id: Option<&str>,
) -> CaptureDescriptor {
    CaptureDescriptor {
        capture_id: capture_id.to_string(),
        acquired_at,
        cloud_coverage: 5.0,
        platform: "Sentinel-2".to_string(),
        asset_id: asset_id.map(str::to_string),
        metadata: Some(serde_json::json!({ "provider": "mock" })),
    }
}

/// Vegetation statistics with the given forest cover and a matching tree probability.
pub fn mock_vegetation(forest_cover_percentage: f64) -> VegetationStatistics {
    VegetationStatistics {
        mean_tree_probability: forest_cover_percentage / 100.0,
        forest_cover_percentage,
        tile_url: Some(format!(
            "https://tiles.example.com/vegetation/{}/{{z}}/{{x}}/{{y}}",
            forest_cover_percentage
        )),
    }
}

/// Forest loss statistics with a tile layer.
pub fn mock_loss(loss_hectares: f64, loss_percentage: f64) -> LossStatistics {
    LossStatistics {
        loss_hectares,
        loss_percentage,
        tile_url: Some("https://tiles.example.com/loss/{z}/{x}/{y}".to_string()),
    }
}
