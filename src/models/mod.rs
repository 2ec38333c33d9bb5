//! # Data Models
//!
//! SeaORM entities for every table the service manages. Models serialize to
//! camelCase JSON, which is the wire format of the API routes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod absence;
pub mod account;
pub mod employee;
pub mod employee_level;
pub mod employee_motivator;
pub mod employee_skill;
pub mod motivator;
pub mod performance_review;
pub mod project;
pub mod project_assignment;
pub mod project_status;
pub mod salary;
pub mod skill;

pub use absence::Entity as Absence;
pub use account::Entity as Account;
pub use employee::Entity as Employee;
pub use employee_level::Entity as EmployeeLevel;
pub use employee_motivator::Entity as EmployeeMotivator;
pub use employee_skill::Entity as EmployeeSkill;
pub use motivator::Entity as Motivator;
pub use performance_review::Entity as PerformanceReview;
pub use project::Entity as Project;
pub use project_assignment::Entity as ProjectAssignment;
pub use project_status::Entity as ProjectStatus;
pub use salary::Entity as Salary;
pub use skill::Entity as Skill;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "backoffice".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
