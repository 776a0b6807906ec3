use sea_orm::DatabaseConnection;

use crate::server::model::pulse::MonitorSettings;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub analysis_client: analysis_client::Client,
    pub settings: MonitorSettings,
}

impl From<(DatabaseConnection, analysis_client::Client)> for AppState {
    fn from((db, analysis_client): (DatabaseConnection, analysis_client::Client)) -> Self {
        Self {
            db,
            analysis_client,
            settings: MonitorSettings::default(),
        }
    }
}
