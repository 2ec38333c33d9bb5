//! Employee entity model
//!
//! Employees own a set of detail rows (skills, levels, motivators, reviews,
//! salaries, absences, project assignments). The foreign keys from those
//! tables do not cascade, so the repository removes them before the employee.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee record
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Server-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// Job title
    pub position: String,

    /// Employment type label, e.g. "Full-time" or "Contract"
    pub employment_type: String,

    pub hire_date: Date,

    /// Email or phone, stored as entered
    pub contact_info: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_skill::Entity")]
    Skills,
    #[sea_orm(has_many = "super::employee_level::Entity")]
    Levels,
    #[sea_orm(has_many = "super::employee_motivator::Entity")]
    Motivators,
    #[sea_orm(has_many = "super::performance_review::Entity")]
    PerformanceReviews,
    #[sea_orm(has_many = "super::salary::Entity")]
    Salaries,
    #[sea_orm(has_many = "super::absence::Entity")]
    Absences,
    #[sea_orm(has_many = "super::project_assignment::Entity")]
    ProjectAssignments,
}

impl Related<super::employee_skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

impl Related<super::employee_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Levels.def()
    }
}

impl Related<super::employee_motivator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Motivators.def()
    }
}

impl Related<super::performance_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PerformanceReviews.def()
    }
}

impl Related<super::salary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salaries.def()
    }
}

impl Related<super::absence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Absences.def()
    }
}

impl Related<super::project_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
