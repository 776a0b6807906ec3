//! Wire models exchanged with the Analysis Service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Circular region the service reduces over: a center point and a radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionGeometry {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

/// Capture discovery query.
///
/// `max_cloud_coverage` is a percentage in the 0-100 range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureQuery {
    #[serde(flatten)]
    pub region: RegionGeometry,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub max_cloud_coverage: f64,
}

/// One capture returned by discovery.
///
/// Overlapping discovery windows return the same capture more than once; callers dedupe on
/// `capture_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureDescriptor {
    pub capture_id: String,
    pub acquired_at: DateTime<Utc>,
    pub cloud_coverage: f64,
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Reference to an analyzable asset, absent when the provider could not resolve one yet.
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

fn default_platform() -> String {
    "Sentinel-2".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CaptureSearchResponse {
    pub captures: Vec<CaptureDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct VegetationRequest<'a> {
    pub asset_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionGeometry>,
}

/// Vegetation statistics for a single capture.
///
/// The `Default` value is the neutral result: all statistics zero and no tile layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VegetationStatistics {
    /// Mean tree probability over the region, 0.0-1.0.
    pub mean_tree_probability: f64,
    /// Share of the region classified as forest, 0-100.
    pub forest_cover_percentage: f64,
    #[serde(default)]
    pub tile_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LossRequest<'a> {
    pub before_asset_id: &'a str,
    pub after_asset_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionGeometry>,
}

/// Forest loss between an earlier and a later capture.
///
/// The `Default` value is the neutral result: no loss and no tile layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LossStatistics {
    pub loss_hectares: f64,
    /// Loss relative to the forest area of the earlier capture, 0-100.
    pub loss_percentage: f64,
    #[serde(default)]
    pub tile_url: Option<String>,
}
