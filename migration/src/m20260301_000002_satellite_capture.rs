use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_area_of_interest::AreaOfInterest;

static IDX_SATELLITE_CAPTURE_AOI_ACQUIRED_AT: &str =
    "idx-satellite_capture-area_of_interest_id-acquired_at";
static FK_SATELLITE_CAPTURE_AREA_OF_INTEREST_ID: &str =
    "fk-satellite_capture-area_of_interest_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SatelliteCapture::Table)
                    .if_not_exists()
                    .col(pk_auto(SatelliteCapture::Id))
                    .col(integer(SatelliteCapture::AreaOfInterestId))
                    .col(string_uniq(SatelliteCapture::CaptureId))
                    .col(timestamp(SatelliteCapture::AcquiredAt))
                    .col(double(SatelliteCapture::CloudCoverage))
                    .col(string_len(SatelliteCapture::Platform, 50))
                    .col(string_null(SatelliteCapture::AssetId))
                    .col(json_binary_null(SatelliteCapture::Metadata))
                    .col(timestamp(SatelliteCapture::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Timeline queries walk a region's captures in acquisition order
        manager
            .create_index(
                Index::create()
                    .name(IDX_SATELLITE_CAPTURE_AOI_ACQUIRED_AT)
                    .table(SatelliteCapture::Table)
                    .col(SatelliteCapture::AreaOfInterestId)
                    .col(SatelliteCapture::AcquiredAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SATELLITE_CAPTURE_AREA_OF_INTEREST_ID)
                    .from_tbl(SatelliteCapture::Table)
                    .from_col(SatelliteCapture::AreaOfInterestId)
                    .to_tbl(AreaOfInterest::Table)
                    .to_col(AreaOfInterest::Id)
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
                    .name(FK_SATELLITE_CAPTURE_AREA_OF_INTEREST_ID)
                    .table(SatelliteCapture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SATELLITE_CAPTURE_AOI_ACQUIRED_AT)
                    .table(SatelliteCapture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SatelliteCapture::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SatelliteCapture {
    Table,
    Id,
    AreaOfInterestId,
    CaptureId,
    AcquiredAt,
    CloudCoverage,
    Platform,
    AssetId,
    Metadata,
    CreatedAt,
}
