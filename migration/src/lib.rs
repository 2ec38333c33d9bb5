//! Database migrations for the Backoffice service.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_01_10_000001_create_accounts;
mod m2025_01_10_000002_create_project_statuses;
mod m2025_01_10_000003_create_projects;
mod m2025_01_10_000004_create_employees;
mod m2025_01_10_000005_create_skills;
mod m2025_01_10_000006_create_employee_records;
mod m2025_01_10_000007_create_project_assignments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_01_10_000001_create_accounts::Migration),
            Box::new(m2025_01_10_000002_create_project_statuses::Migration),
            Box::new(m2025_01_10_000003_create_projects::Migration),
            Box::new(m2025_01_10_000004_create_employees::Migration),
            Box::new(m2025_01_10_000005_create_skills::Migration),
            Box::new(m2025_01_10_000006_create_employee_records::Migration),
            Box::new(m2025_01_10_000007_create_project_assignments::Migration),
        ]
    }
}
