use serde::{Deserialize, Serialize};

/// Request body for triggering a monitoring pulse, unset fields fall back to configured defaults
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PulseRequestDto {
    /// Number of past days to search for new captures
    pub time_window_days: Option<i64>,
    /// Maximum accepted cloud coverage percentage (0-100)
    pub max_cloud_coverage: Option<f64>,
}

/// Aggregate counters returned by a monitoring pulse
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PulseSummaryDto {
    pub regions_processed: usize,
    pub regions_failed: usize,
    pub new_captures: usize,
    pub alerts_created: usize,
}
