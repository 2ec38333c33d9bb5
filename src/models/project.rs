//! Project entity model
//!
//! This module contains the SeaORM entity model for the projects table.
//! A project always references one account and one status.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project delivered for an account
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Server-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Project name
    pub name: String,

    /// Free-form description (optional)
    pub description: Option<String>,

    /// First day of the project
    pub start_date: Date,

    /// Planned last day of the project
    pub planned_end_date: Date,

    /// Status the project is currently in
    pub status_id: i32,

    /// Account the project is delivered for
    pub account_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::project_status::Entity",
        from = "Column::StatusId",
        to = "super::project_status::Column::Id"
    )]
    Status,
    #[sea_orm(has_many = "super::project_assignment::Entity")]
    Assignments,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::project_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<super::project_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
