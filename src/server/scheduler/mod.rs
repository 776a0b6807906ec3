//! Scheduler for the periodic monitoring pulse.
//!
//! Runs the pulse over all regions on a cron schedule using the configured default window and
//! cloud coverage. A tick that fires while the previous pulse is still running is skipped.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::Error,
    model::pulse::{MonitorSettings, PulseSummary},
    service::pulse::PulseService,
};

pub mod config;

/// Job scheduler for the monitoring pulse
pub struct Scheduler {
    db: DatabaseConnection,
    analysis_client: analysis_client::Client,
    settings: MonitorSettings,
    sched: JobScheduler,
}

/// Runs a pulse with the configured defaults
pub async fn run_scheduled_pulse(
    db: DatabaseConnection,
    analysis_client: analysis_client::Client,
    settings: MonitorSettings,
) -> Result<PulseSummary, Error> {
    PulseService::new(&db, &analysis_client, settings)
        .run_default_pulse()
        .await
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(
        db: DatabaseConnection,
        analysis_client: analysis_client::Client,
        settings: MonitorSettings,
    ) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            db,
            analysis_client,
            settings,
            sched,
        })
    }

    /// Registers the monitoring pulse and starts the scheduler.
    ///
    /// # Arguments
    /// - `cron` - Cron expression with seconds precision, e.g. [`config::pulse::CRON_EXPRESSION`]
    ///
    /// # Returns
    /// - `Ok(())` - Pulse registered and scheduler started
    /// - `Err(Error)` - Invalid cron expression or scheduler error
    pub async fn start(mut self, cron: &str) -> Result<(), Error> {
        self.schedule_job(cron, "monitoring pulse", run_scheduled_pulse)
            .await?;

        self.sched.start().await?;

        tracing::info!("Monitoring pulse scheduled with cron expression {}", cron);

        Ok(())
    }

    /// Schedules a recurring pulse job with the specified cron expression.
    ///
    /// Each run receives clones of the database connection and client. Runs never overlap, a
    /// run that would start while the previous one is in progress is skipped.
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, analysis_client::Client, MonitorSettings) -> Fut
            + Send
            + Sync
            + 'static,
        Fut: std::future::Future<Output = Result<PulseSummary, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let analysis_client = self.analysis_client.clone();
        let settings = self.settings;
        let name = name.to_string();
        let function = Arc::new(function);
        let running = Arc::new(Mutex::new(()));

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let analysis_client = analysis_client.clone();
                let name = name.clone();
                let function = Arc::clone(&function);
                let running = Arc::clone(&running);

                Box::pin(async move {
                    let Ok(_guard) = running.try_lock() else {
                        tracing::warn!("Skipping {}, previous run still in progress", name);
                        return;
                    };

                    match function(db, analysis_client, settings).await {
                        Ok(summary) => tracing::debug!("Completed {}: {:?}", name, summary),
                        Err(e) => tracing::error!("Error running {}: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
