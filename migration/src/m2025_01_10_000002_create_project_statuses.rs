//! Migration to create the project_statuses table.
//!
//! Statuses are reference data; inactive rows stay in the table but are
//! hidden from the statuses listing.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectStatuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectStatuses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectStatuses::Status).text().not_null())
                    .col(ColumnDef::new(ProjectStatuses::Description).text().null())
                    .col(
                        ColumnDef::new(ProjectStatuses::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ProjectStatuses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProjectStatuses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectStatuses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectStatuses {
    Table,
    Id,
    Status,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
