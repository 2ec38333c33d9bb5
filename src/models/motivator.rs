//! Motivator entity model
//!
//! Catalog of things that motivate employees (growth, collaboration, ...).

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "motivators")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub motivator_name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_motivator::Entity")]
    EmployeeMotivators,
}

impl Related<super::employee_motivator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeMotivators.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
