use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_area_of_interest::AreaOfInterest,
    m20260301_000004_vegetation_analysis::VegetationAnalysis,
};

/// Name of the unique index guarding against duplicate alerts for the same comparison.
pub static UNQ_DEFORESTATION_ALERT_ANALYSIS_PAIR: &str =
    "unq-deforestation_alert-analysis_before_id-analysis_after_id";
static IDX_DEFORESTATION_ALERT_AREA_OF_INTEREST_ID: &str =
    "idx-deforestation_alert-area_of_interest_id";
static FK_DEFORESTATION_ALERT_AREA_OF_INTEREST_ID: &str =
    "fk-deforestation_alert-area_of_interest_id";
static FK_DEFORESTATION_ALERT_ANALYSIS_BEFORE_ID: &str =
    "fk-deforestation_alert-analysis_before_id";
static FK_DEFORESTATION_ALERT_ANALYSIS_AFTER_ID: &str =
    "fk-deforestation_alert-analysis_after_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeforestationAlert::Table)
                    .if_not_exists()
                    .col(pk_auto(DeforestationAlert::Id))
                    .col(integer(DeforestationAlert::AreaOfInterestId))
                    .col(integer(DeforestationAlert::AnalysisBeforeId))
                    .col(integer(DeforestationAlert::AnalysisAfterId))
                    .col(double(DeforestationAlert::ForestLossHectares))
                    .col(double(DeforestationAlert::LossPercentage))
                    .col(text_null(DeforestationAlert::LossTileUrl))
                    .col(timestamp(DeforestationAlert::DetectedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(alert_pair_index())
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DEFORESTATION_ALERT_AREA_OF_INTEREST_ID)
                    .table(DeforestationAlert::Table)
                    .col(DeforestationAlert::AreaOfInterestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DEFORESTATION_ALERT_AREA_OF_INTEREST_ID)
                    .from_tbl(DeforestationAlert::Table)
                    .from_col(DeforestationAlert::AreaOfInterestId)
                    .to_tbl(AreaOfInterest::Table)
                    .to_col(AreaOfInterest::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DEFORESTATION_ALERT_ANALYSIS_BEFORE_ID)
                    .from_tbl(DeforestationAlert::Table)
                    .from_col(DeforestationAlert::AnalysisBeforeId)
                    .to_tbl(VegetationAnalysis::Table)
                    .to_col(VegetationAnalysis::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DEFORESTATION_ALERT_ANALYSIS_AFTER_ID)
                    .from_tbl(DeforestationAlert::Table)
                    .from_col(DeforestationAlert::AnalysisAfterId)
                    .to_tbl(VegetationAnalysis::Table)
                    .to_col(VegetationAnalysis::Id)
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
                    .name(FK_DEFORESTATION_ALERT_ANALYSIS_AFTER_ID)
                    .table(DeforestationAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DEFORESTATION_ALERT_ANALYSIS_BEFORE_ID)
                    .table(DeforestationAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DEFORESTATION_ALERT_AREA_OF_INTEREST_ID)
                    .table(DeforestationAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DEFORESTATION_ALERT_AREA_OF_INTEREST_ID)
                    .table(DeforestationAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UNQ_DEFORESTATION_ALERT_ANALYSIS_PAIR)
                    .table(DeforestationAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DeforestationAlert::Table).to_owned())
            .await?;

        Ok(())
    }
}

/// Unique index over the ordered (before, after) analysis pair.
///
/// Exposed so test harnesses building tables from entities can apply the same constraint.
pub fn alert_pair_index() -> IndexCreateStatement {
    Index::create()
        .name(UNQ_DEFORESTATION_ALERT_ANALYSIS_PAIR)
        .table(DeforestationAlert::Table)
        .col(DeforestationAlert::AnalysisBeforeId)
        .col(DeforestationAlert::AnalysisAfterId)
        .unique()
        .to_owned()
}

#[derive(DeriveIden)]
pub enum DeforestationAlert {
    Table,
    Id,
    AreaOfInterestId,
    AnalysisBeforeId,
    AnalysisAfterId,
    ForestLossHectares,
    LossPercentage,
    LossTileUrl,
    DetectedAt,
}
