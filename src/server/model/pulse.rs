use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::model::pulse::PulseSummaryDto;

/// Runtime settings of the monitoring pulse
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonitorSettings {
    /// Alerts are only created when forest loss strictly exceeds this many hectares
    pub alert_min_loss_hectares: f64,
    /// Attempts per analysis service call before degrading to a neutral result
    pub analysis_max_attempts: u32,
    /// Backoff before the first retry, doubled on every following retry
    pub analysis_initial_backoff: Duration,
    /// Time window used when a pulse is triggered without explicit parameters
    pub default_window_days: i64,
    /// Cloud coverage percentage used when a pulse is triggered without explicit parameters
    pub default_max_cloud_coverage: f64,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            alert_min_loss_hectares: 0.1,
            analysis_max_attempts: 3,
            analysis_initial_backoff: Duration::from_secs(1),
            default_window_days: 15,
            default_max_cloud_coverage: 20.0,
        }
    }
}

/// Capture search window ending at the moment the pulse starts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PulseWindow {
    pub fn ending_at(end: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: end - chrono::Duration::days(days),
            end,
        }
    }
}

/// What a single region contributed to a pulse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionOutcome {
    pub new_captures: usize,
    pub analyses_resolved: usize,
    pub analyses_deferred: usize,
    pub alert_created: bool,
}

/// Aggregate counters of a completed pulse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PulseSummary {
    pub regions_processed: usize,
    pub regions_failed: usize,
    pub new_captures: usize,
    pub alerts_created: usize,
}

impl PulseSummary {
    pub fn record(&mut self, outcome: RegionOutcome) {
        self.regions_processed += 1;
        self.new_captures += outcome.new_captures;
        if outcome.alert_created {
            self.alerts_created += 1;
        }
    }

    pub fn record_failure(&mut self) {
        self.regions_failed += 1;
    }
}

impl From<PulseSummary> for PulseSummaryDto {
    fn from(summary: PulseSummary) -> Self {
        Self {
            regions_processed: summary.regions_processed,
            regions_failed: summary.regions_failed,
            new_captures: summary.new_captures,
            alerts_created: summary.alerts_created,
        }
    }
}
