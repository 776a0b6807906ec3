pub use sea_orm_migration::prelude::*;

mod m20260301_000001_area_of_interest;
mod m20260301_000002_satellite_capture;
mod m20260301_000003_processed_capture;
mod m20260301_000004_vegetation_analysis;
mod m20260301_000005_deforestation_alert;

pub use m20260301_000005_deforestation_alert::alert_pair_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_area_of_interest::Migration),
            Box::new(m20260301_000002_satellite_capture::Migration),
            Box::new(m20260301_000003_processed_capture::Migration),
            Box::new(m20260301_000004_vegetation_analysis::Migration),
            Box::new(m20260301_000005_deforestation_alert::Migration),
        ]
    }
}
