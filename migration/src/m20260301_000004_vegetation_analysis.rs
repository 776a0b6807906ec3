use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000003_processed_capture::ProcessedCapture;

static IDX_VEGETATION_ANALYSIS_STATUS: &str = "idx-vegetation_analysis-status";
static FK_VEGETATION_ANALYSIS_PROCESSED_CAPTURE_ID: &str =
    "fk-vegetation_analysis-processed_capture_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VegetationAnalysis::Table)
                    .if_not_exists()
                    .col(pk_auto(VegetationAnalysis::Id))
                    .col(integer_uniq(VegetationAnalysis::ProcessedCaptureId))
                    .col(string_len(VegetationAnalysis::Status, 16))
                    .col(double(VegetationAnalysis::MeanTreeProbability))
                    .col(double(VegetationAnalysis::ForestCoverPercentage))
                    .col(text_null(VegetationAnalysis::TileUrl))
                    .col(integer(VegetationAnalysis::ResolutionAttempts))
                    .col(timestamp_null(VegetationAnalysis::AnalyzedAt))
                    .col(timestamp(VegetationAnalysis::CreatedAt))
                    .col(timestamp(VegetationAnalysis::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VEGETATION_ANALYSIS_STATUS)
                    .table(VegetationAnalysis::Table)
                    .col(VegetationAnalysis::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEGETATION_ANALYSIS_PROCESSED_CAPTURE_ID)
                    .from_tbl(VegetationAnalysis::Table)
                    .from_col(VegetationAnalysis::ProcessedCaptureId)
                    .to_tbl(ProcessedCapture::Table)
                    .to_col(ProcessedCapture::Id)
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
                    .name(FK_VEGETATION_ANALYSIS_PROCESSED_CAPTURE_ID)
                    .table(VegetationAnalysis::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VEGETATION_ANALYSIS_STATUS)
                    .table(VegetationAnalysis::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VegetationAnalysis::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VegetationAnalysis {
    Table,
    Id,
    ProcessedCaptureId,
    Status,
    MeanTreeProbability,
    ForestCoverPercentage,
    TileUrl,
    ResolutionAttempts,
    AnalyzedAt,
    CreatedAt,
    UpdatedAt,
}
