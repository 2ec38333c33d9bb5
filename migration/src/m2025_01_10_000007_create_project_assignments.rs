//! Migration to create the project_assignments table linking employees to projects.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectAssignments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectAssignments::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectAssignments::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectAssignments::Role).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_assignments_employee_id")
                            .from(ProjectAssignments::Table, ProjectAssignments::EmployeeId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_assignments_project_id")
                            .from(ProjectAssignments::Table, ProjectAssignments::ProjectId)
                            .to(Projects::Table, Projects::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_assignments_employee_id")
                    .table(ProjectAssignments::Table)
                    .col(ProjectAssignments::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_project_assignments_employee_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectAssignments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectAssignments {
    Table,
    Id,
    EmployeeId,
    ProjectId,
    Role,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
