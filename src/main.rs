use clap::Parser;
use silvaguard::{
    cli::{format_summary, Cli, Command, PulseArgs},
    server::{
        config::Config, error::Error, model::app::AppState, router, scheduler::Scheduler,
        service::pulse::PulseService, startup,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command() {
        Command::Serve => serve(config).await,
        Command::Pulse(args) => pulse(config, args).await,
    };

    if let Err(e) = result {
        tracing::error!("SilvaGuard stopped: {}", e);
        std::process::exit(1);
    }
}

/// Serve the HTTP API with the scheduled pulse running in the background
async fn serve(config: Config) -> Result<(), Error> {
    let analysis_client = startup::build_analysis_client(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let settings = config.monitor_settings();

    Scheduler::new(db.clone(), analysis_client.clone(), settings)
        .await?
        .start(&config.pulse_cron)
        .await?;

    let app = router::routes().with_state(AppState {
        db,
        analysis_client,
        settings,
    });

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run a single pulse and print its counters
async fn pulse(config: Config, args: PulseArgs) -> Result<(), Error> {
    let analysis_client = startup::build_analysis_client(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let settings = config.monitor_settings();

    let summary = PulseService::new(&db, &analysis_client, settings)
        .run_pulse(
            args.days.unwrap_or(settings.default_window_days),
            args.max_cloud
                .unwrap_or(settings.default_max_cloud_coverage),
        )
        .await?;

    println!("{}", format_summary(&summary));

    Ok(())
}
