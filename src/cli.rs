//! Command-line interface of the SilvaGuard binary.
//!
//! Without a subcommand the binary serves the HTTP API and runs the scheduled pulse. The
//! `pulse` subcommand runs a single monitoring pulse and prints its counters.

use clap::{Args, Parser, Subcommand};

use crate::server::model::pulse::PulseSummary;

/// SilvaGuard forest loss monitoring.
#[derive(Debug, Parser)]
#[command(name = "silvaguard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute, `serve` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Subcommand to execute, defaulting to [`Command::Serve`]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

/// CLI subcommands.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Serve the HTTP API and run the monitoring pulse on its cron schedule.
    Serve,
    /// Run one monitoring pulse over all regions and print the counters.
    Pulse(PulseArgs),
}

/// Arguments of the `pulse` subcommand.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct PulseArgs {
    /// Number of past days to search for new captures [default: PULSE_WINDOW_DAYS].
    #[arg(long)]
    pub days: Option<i64>,

    /// Maximum accepted cloud coverage percentage [default: PULSE_MAX_CLOUD_COVERAGE].
    #[arg(long = "max-cloud")]
    pub max_cloud: Option<f64>,
}

/// Human-readable pulse counters printed by the `pulse` subcommand
pub fn format_summary(summary: &PulseSummary) -> String {
    format!(
        "Regions processed: {}\nRegions failed: {}\nNew captures: {}\nAlerts created: {}",
        summary.regions_processed,
        summary.regions_failed,
        summary.new_captures,
        summary.alerts_created
    )
}
