use std::{str::FromStr, time::Duration};

use crate::server::{
    error::config::ConfigError, model::pulse::MonitorSettings, scheduler::config::pulse,
};

const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 30;
const DEFAULT_ANALYSIS_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_ALERT_MIN_LOSS_HECTARES: f64 = 0.1;
const DEFAULT_PULSE_WINDOW_DAYS: i64 = 15;
const DEFAULT_PULSE_MAX_CLOUD_COVERAGE: f64 = 20.0;
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub contact_email: String,
    pub user_agent: String,
    pub database_url: String,
    pub analysis_service_url: String,
    pub analysis_service_api_key: String,
    pub analysis_timeout: Duration,
    pub analysis_max_attempts: u32,
    pub alert_min_loss_hectares: f64,
    pub pulse_window_days: i64,
    pub pulse_max_cloud_coverage: f64,
    pub pulse_cron: String,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let contact_email = required("CONTACT_EMAIL")?;
        let user_agent = format!(
            "SilvaGuard/{} ({})",
            env!("CARGO_PKG_VERSION"),
            contact_email
        );

        let analysis_timeout_secs: u64 =
            optional("ANALYSIS_TIMEOUT_SECS", DEFAULT_ANALYSIS_TIMEOUT_SECS)?;
        if analysis_timeout_secs == 0 {
            return Err(invalid("ANALYSIS_TIMEOUT_SECS", "must be greater than zero"));
        }

        let analysis_max_attempts: u32 =
            optional("ANALYSIS_MAX_ATTEMPTS", DEFAULT_ANALYSIS_MAX_ATTEMPTS)?;
        if analysis_max_attempts == 0 {
            return Err(invalid("ANALYSIS_MAX_ATTEMPTS", "must be at least 1"));
        }

        let alert_min_loss_hectares: f64 =
            optional("ALERT_MIN_LOSS_HECTARES", DEFAULT_ALERT_MIN_LOSS_HECTARES)?;
        if alert_min_loss_hectares.is_nan() || alert_min_loss_hectares < 0.0 {
            return Err(invalid("ALERT_MIN_LOSS_HECTARES", "must not be negative"));
        }

        let pulse_window_days: i64 = optional("PULSE_WINDOW_DAYS", DEFAULT_PULSE_WINDOW_DAYS)?;
        if pulse_window_days <= 0 {
            return Err(invalid("PULSE_WINDOW_DAYS", "must be greater than zero"));
        }

        let pulse_max_cloud_coverage: f64 =
            optional("PULSE_MAX_CLOUD_COVERAGE", DEFAULT_PULSE_MAX_CLOUD_COVERAGE)?;
        if !(0.0..=100.0).contains(&pulse_max_cloud_coverage) {
            return Err(invalid(
                "PULSE_MAX_CLOUD_COVERAGE",
                "must be a percentage between 0 and 100",
            ));
        }

        Ok(Self {
            contact_email,
            user_agent,
            database_url: required("DATABASE_URL")?,
            analysis_service_url: required("ANALYSIS_SERVICE_URL")?,
            analysis_service_api_key: required("ANALYSIS_SERVICE_API_KEY")?,
            analysis_timeout: Duration::from_secs(analysis_timeout_secs),
            analysis_max_attempts,
            alert_min_loss_hectares,
            pulse_window_days,
            pulse_max_cloud_coverage,
            pulse_cron: std::env::var("PULSE_CRON")
                .unwrap_or_else(|_| pulse::CRON_EXPRESSION.to_string()),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }

    /// Settings shared by the pulse orchestrator, the scheduler and the HTTP handlers
    pub fn monitor_settings(&self) -> MonitorSettings {
        MonitorSettings {
            alert_min_loss_hectares: self.alert_min_loss_hectares,
            analysis_max_attempts: self.analysis_max_attempts,
            default_window_days: self.pulse_window_days,
            default_max_cloud_coverage: self.pulse_max_cloud_coverage,
            ..MonitorSettings::default()
        }
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

fn invalid(var: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}
