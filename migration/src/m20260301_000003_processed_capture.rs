use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_satellite_capture::SatelliteCapture;

static FK_PROCESSED_CAPTURE_SATELLITE_CAPTURE_ID: &str =
    "fk-processed_capture-satellite_capture_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProcessedCapture::Table)
                    .if_not_exists()
                    .col(pk_auto(ProcessedCapture::Id))
                    .col(integer_uniq(ProcessedCapture::SatelliteCaptureId))
                    .col(string_len(ProcessedCapture::Method, 50))
                    .col(json_binary(ProcessedCapture::Metadata))
                    .col(timestamp(ProcessedCapture::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROCESSED_CAPTURE_SATELLITE_CAPTURE_ID)
                    .from_tbl(ProcessedCapture::Table)
                    .from_col(ProcessedCapture::SatelliteCaptureId)
                    .to_tbl(SatelliteCapture::Table)
                    .to_col(SatelliteCapture::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROCESSED_CAPTURE_SATELLITE_CAPTURE_ID)
                    .table(ProcessedCapture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProcessedCapture::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProcessedCapture {
    Table,
    Id,
    SatelliteCaptureId,
    Method,
    Metadata,
    CreatedAt,
}
