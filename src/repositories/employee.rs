//! # Employee Repository
//!
//! CRUD operations for employees. An employee is returned together with its
//! skills, levels, project assignments, reviews and current salary. Deleting
//! an employee removes every dependent row first, inside one transaction.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, LoaderTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::Serialize;
use tracing::debug;

use super::payload::{EmployeePayload, Payload};
use super::RepositoryError;
use crate::models::employee::{self, Entity as Employee, Model as EmployeeModel};
use crate::models::{
    absence, employee_level, employee_motivator, employee_skill, performance_review, project,
    project_assignment, salary, skill,
};

/// An employee-skill link with the skill resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSkillWithSkill {
    #[serde(flatten)]
    pub link: employee_skill::Model,
    pub skill: Option<skill::Model>,
}

/// A project assignment with the project resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentWithProject {
    #[serde(flatten)]
    pub assignment: project_assignment::Model,
    pub project: Option<project::Model>,
}

/// Employee with every detail collection the API exposes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    #[serde(flatten)]
    pub employee: EmployeeModel,
    pub employee_skills: Vec<EmployeeSkillWithSkill>,
    pub employee_levels: Vec<employee_level::Model>,
    pub project_assignments: Vec<AssignmentWithProject>,
    pub performance_reviews: Vec<performance_review::Model>,
    /// Holds at most the most recent salary by start date
    pub salaries: Vec<salary::Model>,
}

impl EmployeeDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.employee.first_name, self.employee.last_name)
    }

    pub fn current_salary(&self) -> Option<&salary::Model> {
        self.salaries.first()
    }
}

/// Repository for Employee database operations
pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List every employee in id order with details
    pub async fn list_with_details(&self) -> Result<Vec<EmployeeDetails>, RepositoryError> {
        let employees = Employee::find()
            .order_by_asc(employee::Column::Id)
            .all(self.db)
            .await?;
        self.with_details(employees).await
    }

    pub async fn find(&self, id: i32) -> Result<Option<EmployeeModel>, RepositoryError> {
        Ok(Employee::find_by_id(id).one(self.db).await?)
    }

    pub async fn create(&self, payload: EmployeePayload) -> Result<EmployeeDetails, RepositoryError> {
        let employee = payload.build()?.insert(self.db).await?;
        self.single_with_details(employee).await
    }

    pub async fn update(
        &self,
        id: i32,
        payload: EmployeePayload,
    ) -> Result<EmployeeDetails, RepositoryError> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Employee", id))?;

        let mut active = existing.into_active_model();
        payload.apply(&mut active);
        let employee = active.update(self.db).await?;
        self.single_with_details(employee).await
    }

    /// Delete an employee and all of its dependent rows
    ///
    /// Dependents go first (skills, levels, motivators, reviews, salaries,
    /// absences, assignments). Any failure rolls the whole sequence back.
    pub async fn delete(&self, id: i32) -> Result<EmployeeModel, RepositoryError> {
        let txn = self.db.begin().await?;

        let existing = Employee::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Employee", id))?;

        delete_dependents(&txn, id).await?;
        Employee::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        debug!(employee_id = id, "Deleted employee with dependents");

        Ok(existing)
    }

    async fn single_with_details(
        &self,
        employee: EmployeeModel,
    ) -> Result<EmployeeDetails, RepositoryError> {
        let id = employee.id;
        self.with_details(vec![employee])
            .await?
            .pop()
            .ok_or_else(|| RepositoryError::not_found("Employee", id))
    }

    async fn with_details(
        &self,
        employees: Vec<EmployeeModel>,
    ) -> Result<Vec<EmployeeDetails>, RepositoryError> {
        if employees.is_empty() {
            return Ok(Vec::new());
        }

        let skill_links = employees
            .load_many(
                employee_skill::Entity::find().order_by_asc(employee_skill::Column::Id),
                self.db,
            )
            .await?;
        let levels = employees
            .load_many(
                employee_level::Entity::find().order_by_asc(employee_level::Column::Id),
                self.db,
            )
            .await?;
        let assignments = employees
            .load_many(
                project_assignment::Entity::find().order_by_asc(project_assignment::Column::Id),
                self.db,
            )
            .await?;
        let reviews = employees
            .load_many(
                performance_review::Entity::find().order_by_asc(performance_review::Column::Id),
                self.db,
            )
            .await?;
        let salaries = employees
            .load_many(
                salary::Entity::find()
                    .order_by_desc(salary::Column::StartDate)
                    .order_by_desc(salary::Column::Id),
                self.db,
            )
            .await?;

        let skill_ids: Vec<i32> = skill_links.iter().flatten().map(|l| l.skill_id).collect();
        let skills: HashMap<i32, skill::Model> = if skill_ids.is_empty() {
            HashMap::new()
        } else {
            skill::Entity::find()
                .filter(skill::Column::Id.is_in(skill_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.id, s))
                .collect()
        };

        let project_ids: Vec<i32> = assignments.iter().flatten().map(|a| a.project_id).collect();
        let projects: HashMap<i32, project::Model> = if project_ids.is_empty() {
            HashMap::new()
        } else {
            project::Entity::find()
                .filter(project::Column::Id.is_in(project_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        let mut details = Vec::with_capacity(employees.len());
        for (((((employee, skill_links), levels), assignments), reviews), salaries) in employees
            .into_iter()
            .zip(skill_links)
            .zip(levels)
            .zip(assignments)
            .zip(reviews)
            .zip(salaries)
        {
            details.push(EmployeeDetails {
                employee,
                employee_skills: skill_links
                    .into_iter()
                    .map(|link| EmployeeSkillWithSkill {
                        skill: skills.get(&link.skill_id).cloned(),
                        link,
                    })
                    .collect(),
                employee_levels: levels,
                project_assignments: assignments
                    .into_iter()
                    .map(|assignment| AssignmentWithProject {
                        project: projects.get(&assignment.project_id).cloned(),
                        assignment,
                    })
                    .collect(),
                performance_reviews: reviews,
                salaries: salaries.into_iter().take(1).collect(),
            });
        }

        Ok(details)
    }
}

async fn delete_dependents<C: ConnectionTrait>(conn: &C, employee_id: i32) -> Result<(), RepositoryError> {
    employee_skill::Entity::delete_many()
        .filter(employee_skill::Column::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;
    employee_level::Entity::delete_many()
        .filter(employee_level::Column::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;
    employee_motivator::Entity::delete_many()
        .filter(employee_motivator::Column::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;
    performance_review::Entity::delete_many()
        .filter(performance_review::Column::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;
    salary::Entity::delete_many()
        .filter(salary::Column::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;
    absence::Entity::delete_many()
        .filter(absence::Column::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;
    project_assignment::Entity::delete_many()
        .filter(project_assignment::Column::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;
    Ok(())
}
