//! # Skill Repository
//!
//! CRUD operations for skills. Skills are listed alphabetically with the
//! employees that hold them.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, LoaderTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use serde::Serialize;

use super::payload::{Payload, SkillPayload};
use super::RepositoryError;
use crate::models::skill::{self, Entity as Skill, Model as SkillModel};
use crate::models::{employee, employee_skill};

/// An employee-skill link with the employee resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSkillWithEmployee {
    #[serde(flatten)]
    pub link: employee_skill::Model,
    pub employee: Option<employee::Model>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillWithEmployees {
    #[serde(flatten)]
    pub skill: SkillModel,
    pub employee_skills: Vec<EmployeeSkillWithEmployee>,
}

/// Repository for Skill database operations
pub struct SkillRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SkillRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List skills ordered by name, each with its employee links
    pub async fn list_with_employees(&self) -> Result<Vec<SkillWithEmployees>, RepositoryError> {
        let skills = Skill::find()
            .order_by_asc(skill::Column::SkillName)
            .order_by_asc(skill::Column::Id)
            .all(self.db)
            .await?;
        self.with_employees(skills).await
    }

    pub async fn find(&self, id: i32) -> Result<Option<SkillModel>, RepositoryError> {
        Ok(Skill::find_by_id(id).one(self.db).await?)
    }

    pub async fn create(&self, payload: SkillPayload) -> Result<SkillWithEmployees, RepositoryError> {
        let skill = payload.build()?.insert(self.db).await?;
        Ok(SkillWithEmployees {
            skill,
            employee_skills: Vec::new(),
        })
    }

    pub async fn update(
        &self,
        id: i32,
        payload: SkillPayload,
    ) -> Result<SkillWithEmployees, RepositoryError> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Skill", id))?;

        let mut active = existing.into_active_model();
        payload.apply(&mut active);
        let skill = active.update(self.db).await?;

        self.with_employees(vec![skill])
            .await?
            .pop()
            .ok_or_else(|| RepositoryError::not_found("Skill", id))
    }

    /// Delete a skill after removing every employee link to it, in one transaction
    pub async fn delete(&self, id: i32) -> Result<SkillModel, RepositoryError> {
        let txn = self.db.begin().await?;

        let existing = Skill::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Skill", id))?;

        employee_skill::Entity::delete_many()
            .filter(employee_skill::Column::SkillId.eq(id))
            .exec(&txn)
            .await?;
        Skill::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(existing)
    }

    async fn with_employees(
        &self,
        skills: Vec<SkillModel>,
    ) -> Result<Vec<SkillWithEmployees>, RepositoryError> {
        let links = skills
            .load_many(
                employee_skill::Entity::find().order_by_asc(employee_skill::Column::Id),
                self.db,
            )
            .await?;

        let employee_ids: Vec<i32> = links.iter().flatten().map(|l| l.employee_id).collect();
        let employees: HashMap<i32, employee::Model> = if employee_ids.is_empty() {
            HashMap::new()
        } else {
            employee::Entity::find()
                .filter(employee::Column::Id.is_in(employee_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|e| (e.id, e))
                .collect()
        };

        Ok(skills
            .into_iter()
            .zip(links)
            .map(|(skill, links)| SkillWithEmployees {
                skill,
                employee_skills: links
                    .into_iter()
                    .map(|link| EmployeeSkillWithEmployee {
                        employee: employees.get(&link.employee_id).cloned(),
                        link,
                    })
                    .collect(),
            })
            .collect())
    }
}
