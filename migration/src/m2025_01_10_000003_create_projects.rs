//! Migration to create the projects table.
//!
//! Every project belongs to exactly one account and one status; both links
//! are enforced by foreign keys.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Name).text().not_null())
                    .col(ColumnDef::new(Projects::Description).text().null())
                    .col(ColumnDef::new(Projects::StartDate).date().not_null())
                    .col(ColumnDef::new(Projects::PlannedEndDate).date().not_null())
                    .col(ColumnDef::new(Projects::StatusId).integer().not_null())
                    .col(ColumnDef::new(Projects::AccountId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_status_id")
                            .from(Projects::Table, Projects::StatusId)
                            .to(ProjectStatuses::Table, ProjectStatuses::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_account_id")
                            .from(Projects::Table, Projects::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_account_id")
                    .table(Projects::Table)
                    .col(Projects::AccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_projects_account_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    PlannedEndDate,
    StatusId,
    AccountId,
}

#[derive(DeriveIden)]
enum ProjectStatuses {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}
