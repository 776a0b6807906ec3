use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AreaOfInterest::Table)
                    .if_not_exists()
                    .col(pk_auto(AreaOfInterest::Id))
                    .col(string_len(AreaOfInterest::Name, 100))
                    .col(double(AreaOfInterest::Latitude))
                    .col(double(AreaOfInterest::Longitude))
                    .col(double(AreaOfInterest::RadiusKm))
                    .col(timestamp(AreaOfInterest::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AreaOfInterest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AreaOfInterest {
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    RadiusKm,
    CreatedAt,
}
