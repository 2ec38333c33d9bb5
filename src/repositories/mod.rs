//! # Repository Layer
//!
//! Repository implementations that encapsulate SeaORM operations for each
//! entity, plus the table registry used by the generic data route.

use sea_orm::DbErr;
use thiserror::Error;

pub mod account;
pub mod employee;
pub mod payload;
pub mod project;
pub mod registry;
pub mod skill;
pub mod status;

pub use account::{AccountRepository, AccountWithProjects};
pub use employee::{EmployeeDetails, EmployeeRepository};
pub use payload::Payload;
pub use project::{ProjectRepository, ProjectWithRelations};
pub use registry::{DataTable, TableRegistry};
pub use skill::{SkillRepository, SkillWithEmployees};
pub use status::StatusRepository;

/// Errors raised by the repository layer
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Request data failed validation; the message is safe to show to clients
    #[error("{0}")]
    Validation(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown resource: {0}")]
    UnknownTable(String),
}

impl RepositoryError {
    pub(crate) fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}
