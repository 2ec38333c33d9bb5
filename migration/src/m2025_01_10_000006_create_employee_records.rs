//! Migration to create the per-employee detail tables.
//!
//! Levels, motivators, performance reviews, salaries and absences all hang
//! off an employee. None of the foreign keys cascade: removing an employee
//! requires deleting these rows first.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_column<T: Iden + 'static>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn employee_fk<T: Iden + Copy + 'static>(
    name: &str,
    table: T,
    column: T,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Employees::Table, Employees::Id)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeLevels::Table)
                    .if_not_exists()
                    .col(id_column(EmployeeLevels::Id))
                    .col(ColumnDef::new(EmployeeLevels::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(EmployeeLevels::Level).text().not_null())
                    .col(ColumnDef::new(EmployeeLevels::EffectiveDate).date().not_null())
                    .foreign_key(&mut employee_fk(
                        "fk_employee_levels_employee_id",
                        EmployeeLevels::Table,
                        EmployeeLevels::EmployeeId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Motivators::Table)
                    .if_not_exists()
                    .col(id_column(Motivators::Id))
                    .col(ColumnDef::new(Motivators::MotivatorName).text().not_null())
                    .col(ColumnDef::new(Motivators::Description).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeMotivators::Table)
                    .if_not_exists()
                    .col(id_column(EmployeeMotivators::Id))
                    .col(
                        ColumnDef::new(EmployeeMotivators::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeMotivators::MotivatorId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(&mut employee_fk(
                        "fk_employee_motivators_employee_id",
                        EmployeeMotivators::Table,
                        EmployeeMotivators::EmployeeId,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_motivators_motivator_id")
                            .from(EmployeeMotivators::Table, EmployeeMotivators::MotivatorId)
                            .to(Motivators::Table, Motivators::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PerformanceReviews::Table)
                    .if_not_exists()
                    .col(id_column(PerformanceReviews::Id))
                    .col(
                        ColumnDef::new(PerformanceReviews::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PerformanceReviews::ReviewDate).date().not_null())
                    .col(ColumnDef::new(PerformanceReviews::Rating).integer().not_null())
                    .col(ColumnDef::new(PerformanceReviews::Comments).text().null())
                    .foreign_key(&mut employee_fk(
                        "fk_performance_reviews_employee_id",
                        PerformanceReviews::Table,
                        PerformanceReviews::EmployeeId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Salaries::Table)
                    .if_not_exists()
                    .col(id_column(Salaries::Id))
                    .col(ColumnDef::new(Salaries::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(Salaries::Amount).double().not_null())
                    .col(ColumnDef::new(Salaries::StartDate).date().not_null())
                    .foreign_key(&mut employee_fk(
                        "fk_salaries_employee_id",
                        Salaries::Table,
                        Salaries::EmployeeId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Absences::Table)
                    .if_not_exists()
                    .col(id_column(Absences::Id))
                    .col(ColumnDef::new(Absences::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(Absences::StartDate).date().not_null())
                    .col(ColumnDef::new(Absences::EndDate).date().not_null())
                    .col(ColumnDef::new(Absences::Reason).text().null())
                    .foreign_key(&mut employee_fk(
                        "fk_absences_employee_id",
                        Absences::Table,
                        Absences::EmployeeId,
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Absences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Salaries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PerformanceReviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmployeeMotivators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Motivators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmployeeLevels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum EmployeeLevels {
    Table,
    Id,
    EmployeeId,
    Level,
    EffectiveDate,
}

#[derive(DeriveIden)]
enum Motivators {
    Table,
    Id,
    MotivatorName,
    Description,
}

#[derive(DeriveIden, Clone, Copy)]
enum EmployeeMotivators {
    Table,
    Id,
    EmployeeId,
    MotivatorId,
}

#[derive(DeriveIden, Clone, Copy)]
enum PerformanceReviews {
    Table,
    Id,
    EmployeeId,
    ReviewDate,
    Rating,
    Comments,
}

#[derive(DeriveIden, Clone, Copy)]
enum Salaries {
    Table,
    Id,
    EmployeeId,
    Amount,
    StartDate,
}

#[derive(DeriveIden, Clone, Copy)]
enum Absences {
    Table,
    Id,
    EmployeeId,
    StartDate,
    EndDate,
    Reason,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}
