use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error};

/// Build the Analysis Service client from the configured URL, credential and timeout
pub fn build_analysis_client(config: &Config) -> Result<analysis_client::Client, Error> {
    let analysis_client = analysis_client::Client::builder()
        .base_url(&config.analysis_service_url)
        .api_key(&config.analysis_service_api_key)
        .user_agent(&config.user_agent)
        .timeout(config.analysis_timeout)
        .build()?;

    Ok(analysis_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}
