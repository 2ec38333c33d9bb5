//! Migration to create the skills catalog and the employee_skills join table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::SkillName).text().not_null())
                    .col(ColumnDef::new(Skills::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeSkills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmployeeSkills::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(EmployeeSkills::SkillId).integer().not_null())
                    .col(
                        ColumnDef::new(EmployeeSkills::ProficiencyLevel)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_skills_employee_id")
                            .from(EmployeeSkills::Table, EmployeeSkills::EmployeeId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_skills_skill_id")
                            .from(EmployeeSkills::Table, EmployeeSkills::SkillId)
                            .to(Skills::Table, Skills::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One proficiency row per employee and skill
        manager
            .create_index(
                Index::create()
                    .name("idx_employee_skills_employee_skill")
                    .table(EmployeeSkills::Table)
                    .col(EmployeeSkills::EmployeeId)
                    .col(EmployeeSkills::SkillId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_employee_skills_employee_skill")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmployeeSkills::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    SkillName,
    Description,
}

#[derive(DeriveIden)]
enum EmployeeSkills {
    Table,
    Id,
    EmployeeId,
    SkillId,
    ProficiencyLevel,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}
