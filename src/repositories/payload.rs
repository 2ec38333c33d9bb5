//! Request payloads for every writable table.
//!
//! A payload is the body of a create or update request. All fields are
//! optional at the type level: creating a row checks the required ones,
//! updating a row only touches the fields that were submitted. The same types
//! parse JSON API bodies and urlencoded HTML form posts, so scalar fields are
//! read leniently (numbers may arrive as strings, blank strings mean absent).

use chrono::{NaiveDate, Utc};
use sea_orm::Set;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RepositoryError;
use crate::models::{
    absence, account, employee, employee_level, employee_motivator, employee_skill, motivator,
    performance_review, project, project_assignment, project_status, salary, skill,
};

/// A request body that can create or patch an active model of type `A`.
pub trait Payload<A>: DeserializeOwned + Send + 'static {
    /// Builds a new row, failing when a required field is missing.
    fn build(self) -> Result<A, RepositoryError>;

    /// Overwrites the fields present in the payload, leaving the rest untouched.
    fn apply(self, active: &mut A);
}

/// Collects the names of required fields that were not submitted.
#[derive(Debug, Default)]
struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    fn take<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(field);
        }
        value
    }

    fn into_error(self) -> RepositoryError {
        RepositoryError::Validation(format!(
            "Missing required fields: {}",
            self.missing.join(", ")
        ))
    }
}

/// Account create/update body
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    #[schema(example = "Acme")]
    pub name: Option<String>,
}

impl Payload<account::ActiveModel> for AccountPayload {
    fn build(self) -> Result<account::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let Some(name) = required.take("name", self.name) else {
            return Err(required.into_error());
        };

        Ok(account::ActiveModel {
            name: Set(name),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut account::ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
    }
}

/// Project status create/update body
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusPayload {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    #[schema(example = "Planning")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::nullable_text", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Payload<project_status::ActiveModel> for StatusPayload {
    fn build(self) -> Result<project_status::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let Some(status) = required.take("status", self.status) else {
            return Err(required.into_error());
        };

        let now = Utc::now();
        Ok(project_status::ActiveModel {
            status: Set(status),
            description: Set(self.description.flatten()),
            is_active: Set(self.is_active.unwrap_or(true)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut project_status::ActiveModel) {
        if let Some(status) = self.status {
            active.status = Set(status);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
        if let Some(is_active) = self.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Utc::now().into());
    }
}

/// Project create/update body
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    #[schema(example = "E-commerce Platform")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::nullable_text", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date, example = "2024-01-15")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date, example = "2024-06-30")]
    pub planned_end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i32>,
}

impl Payload<project::ActiveModel> for ProjectPayload {
    fn build(self) -> Result<project::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let name = required.take("name", self.name);
        let start_date = required.take("startDate", self.start_date);
        let planned_end_date = required.take("plannedEndDate", self.planned_end_date);
        let status_id = required.take("statusId", self.status_id);
        let account_id = required.take("accountId", self.account_id);
        let (Some(name), Some(start_date), Some(planned_end_date), Some(status_id), Some(account_id)) =
            (name, start_date, planned_end_date, status_id, account_id)
        else {
            return Err(required.into_error());
        };

        Ok(project::ActiveModel {
            name: Set(name),
            description: Set(self.description.flatten()),
            start_date: Set(start_date),
            planned_end_date: Set(planned_end_date),
            status_id: Set(status_id),
            account_id: Set(account_id),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut project::ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
        if let Some(start_date) = self.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(planned_end_date) = self.planned_end_date {
            active.planned_end_date = Set(planned_end_date);
        }
        if let Some(status_id) = self.status_id {
            active.status_id = Set(status_id);
        }
        if let Some(account_id) = self.account_id {
            active.account_id = Set(account_id);
        }
    }
}

/// Employee create/update body
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    #[schema(example = "Smith")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    #[schema(example = "Full-time")]
    pub employment_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date, example = "2024-01-01")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

impl Payload<employee::ActiveModel> for EmployeePayload {
    fn build(self) -> Result<employee::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let first_name = required.take("firstName", self.first_name);
        let last_name = required.take("lastName", self.last_name);
        let position = required.take("position", self.position);
        let employment_type = required.take("employmentType", self.employment_type);
        let hire_date = required.take("hireDate", self.hire_date);
        let contact_info = required.take("contactInfo", self.contact_info);
        let (
            Some(first_name),
            Some(last_name),
            Some(position),
            Some(employment_type),
            Some(hire_date),
            Some(contact_info),
        ) = (
            first_name,
            last_name,
            position,
            employment_type,
            hire_date,
            contact_info,
        )
        else {
            return Err(required.into_error());
        };

        Ok(employee::ActiveModel {
            first_name: Set(first_name),
            last_name: Set(last_name),
            position: Set(position),
            employment_type: Set(employment_type),
            hire_date: Set(hire_date),
            contact_info: Set(contact_info),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut employee::ActiveModel) {
        if let Some(first_name) = self.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = self.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(position) = self.position {
            active.position = Set(position);
        }
        if let Some(employment_type) = self.employment_type {
            active.employment_type = Set(employment_type);
        }
        if let Some(hire_date) = self.hire_date {
            active.hire_date = Set(hire_date);
        }
        if let Some(contact_info) = self.contact_info {
            active.contact_info = Set(contact_info);
        }
    }
}

/// Skill create/update body
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillPayload {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    #[schema(example = "Rust")]
    pub skill_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Payload<skill::ActiveModel> for SkillPayload {
    fn build(self) -> Result<skill::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let skill_name = required.take("skillName", self.skill_name);
        let description = required.take("description", self.description);
        let (Some(skill_name), Some(description)) = (skill_name, description) else {
            return Err(required.into_error());
        };

        Ok(skill::ActiveModel {
            skill_name: Set(skill_name),
            description: Set(description),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut skill::ActiveModel) {
        if let Some(skill_name) = self.skill_name {
            active.skill_name = Set(skill_name);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSkillPayload {
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub proficiency_level: Option<i32>,
}

impl Payload<employee_skill::ActiveModel> for EmployeeSkillPayload {
    fn build(self) -> Result<employee_skill::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let employee_id = required.take("employeeId", self.employee_id);
        let skill_id = required.take("skillId", self.skill_id);
        let proficiency_level = required.take("proficiencyLevel", self.proficiency_level);
        let (Some(employee_id), Some(skill_id), Some(proficiency_level)) =
            (employee_id, skill_id, proficiency_level)
        else {
            return Err(required.into_error());
        };

        Ok(employee_skill::ActiveModel {
            employee_id: Set(employee_id),
            skill_id: Set(skill_id),
            proficiency_level: Set(proficiency_level),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut employee_skill::ActiveModel) {
        if let Some(employee_id) = self.employee_id {
            active.employee_id = Set(employee_id);
        }
        if let Some(skill_id) = self.skill_id {
            active.skill_id = Set(skill_id);
        }
        if let Some(proficiency_level) = self.proficiency_level {
            active.proficiency_level = Set(proficiency_level);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryPayload {
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
}

impl Payload<salary::ActiveModel> for SalaryPayload {
    fn build(self) -> Result<salary::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let employee_id = required.take("employeeId", self.employee_id);
        let amount = required.take("amount", self.amount);
        let start_date = required.take("startDate", self.start_date);
        let (Some(employee_id), Some(amount), Some(start_date)) = (employee_id, amount, start_date)
        else {
            return Err(required.into_error());
        };

        Ok(salary::ActiveModel {
            employee_id: Set(employee_id),
            amount: Set(amount),
            start_date: Set(start_date),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut salary::ActiveModel) {
        if let Some(employee_id) = self.employee_id {
            active.employee_id = Set(employee_id);
        }
        if let Some(amount) = self.amount {
            active.amount = Set(amount);
        }
        if let Some(start_date) = self.start_date {
            active.start_date = Set(start_date);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeLevelPayload {
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub effective_date: Option<NaiveDate>,
}

impl Payload<employee_level::ActiveModel> for EmployeeLevelPayload {
    fn build(self) -> Result<employee_level::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let employee_id = required.take("employeeId", self.employee_id);
        let level = required.take("level", self.level);
        let effective_date = required.take("effectiveDate", self.effective_date);
        let (Some(employee_id), Some(level), Some(effective_date)) =
            (employee_id, level, effective_date)
        else {
            return Err(required.into_error());
        };

        Ok(employee_level::ActiveModel {
            employee_id: Set(employee_id),
            level: Set(level),
            effective_date: Set(effective_date),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut employee_level::ActiveModel) {
        if let Some(employee_id) = self.employee_id {
            active.employee_id = Set(employee_id);
        }
        if let Some(level) = self.level {
            active.level = Set(level);
        }
        if let Some(effective_date) = self.effective_date {
            active.effective_date = Set(effective_date);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MotivatorPayload {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub motivator_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::nullable_text", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl Payload<motivator::ActiveModel> for MotivatorPayload {
    fn build(self) -> Result<motivator::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let Some(motivator_name) = required.take("motivatorName", self.motivator_name) else {
            return Err(required.into_error());
        };

        Ok(motivator::ActiveModel {
            motivator_name: Set(motivator_name),
            description: Set(self.description.flatten()),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut motivator::ActiveModel) {
        if let Some(motivator_name) = self.motivator_name {
            active.motivator_name = Set(motivator_name);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeMotivatorPayload {
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub motivator_id: Option<i32>,
}

impl Payload<employee_motivator::ActiveModel> for EmployeeMotivatorPayload {
    fn build(self) -> Result<employee_motivator::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let employee_id = required.take("employeeId", self.employee_id);
        let motivator_id = required.take("motivatorId", self.motivator_id);
        let (Some(employee_id), Some(motivator_id)) = (employee_id, motivator_id) else {
            return Err(required.into_error());
        };

        Ok(employee_motivator::ActiveModel {
            employee_id: Set(employee_id),
            motivator_id: Set(motivator_id),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut employee_motivator::ActiveModel) {
        if let Some(employee_id) = self.employee_id {
            active.employee_id = Set(employee_id);
        }
        if let Some(motivator_id) = self.motivator_id {
            active.motivator_id = Set(motivator_id);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReviewPayload {
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub review_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default, deserialize_with = "lenient::nullable_text", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub comments: Option<Option<String>>,
}

impl Payload<performance_review::ActiveModel> for PerformanceReviewPayload {
    fn build(self) -> Result<performance_review::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let employee_id = required.take("employeeId", self.employee_id);
        let review_date = required.take("reviewDate", self.review_date);
        let rating = required.take("rating", self.rating);
        let (Some(employee_id), Some(review_date), Some(rating)) =
            (employee_id, review_date, rating)
        else {
            return Err(required.into_error());
        };

        Ok(performance_review::ActiveModel {
            employee_id: Set(employee_id),
            review_date: Set(review_date),
            rating: Set(rating),
            comments: Set(self.comments.flatten()),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut performance_review::ActiveModel) {
        if let Some(employee_id) = self.employee_id {
            active.employee_id = Set(employee_id);
        }
        if let Some(review_date) = self.review_date {
            active.review_date = Set(review_date);
        }
        if let Some(rating) = self.rating {
            active.rating = Set(rating);
        }
        if let Some(comments) = self.comments {
            active.comments = Set(comments);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AbsencePayload {
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::nullable_text", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub reason: Option<Option<String>>,
}

impl Payload<absence::ActiveModel> for AbsencePayload {
    fn build(self) -> Result<absence::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let employee_id = required.take("employeeId", self.employee_id);
        let start_date = required.take("startDate", self.start_date);
        let end_date = required.take("endDate", self.end_date);
        let (Some(employee_id), Some(start_date), Some(end_date)) =
            (employee_id, start_date, end_date)
        else {
            return Err(required.into_error());
        };

        Ok(absence::ActiveModel {
            employee_id: Set(employee_id),
            start_date: Set(start_date),
            end_date: Set(end_date),
            reason: Set(self.reason.flatten()),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut absence::ActiveModel) {
        if let Some(employee_id) = self.employee_id {
            active.employee_id = Set(employee_id);
        }
        if let Some(start_date) = self.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = self.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(reason) = self.reason {
            active.reason = Set(reason);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignmentPayload {
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient::nullable_text", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub role: Option<Option<String>>,
}

impl Payload<project_assignment::ActiveModel> for ProjectAssignmentPayload {
    fn build(self) -> Result<project_assignment::ActiveModel, RepositoryError> {
        let mut required = RequiredFields::default();
        let employee_id = required.take("employeeId", self.employee_id);
        let project_id = required.take("projectId", self.project_id);
        let (Some(employee_id), Some(project_id)) = (employee_id, project_id) else {
            return Err(required.into_error());
        };

        Ok(project_assignment::ActiveModel {
            employee_id: Set(employee_id),
            project_id: Set(project_id),
            role: Set(self.role.flatten()),
            ..Default::default()
        })
    }

    fn apply(self, active: &mut project_assignment::ActiveModel) {
        if let Some(employee_id) = self.employee_id {
            active.employee_id = Set(employee_id);
        }
        if let Some(project_id) = self.project_id {
            active.project_id = Set(project_id);
        }
        if let Some(role) = self.role {
            active.role = Set(role);
        }
    }
}

/// Field deserializers shared by JSON bodies and urlencoded forms.
pub(crate) mod lenient {
    use std::fmt::Display;
    use std::str::FromStr;

    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
    }

    impl Scalar {
        fn into_text(self) -> String {
            match self {
                Scalar::Text(text) => text,
                Scalar::Number(number) => number.to_string(),
                Scalar::Flag(flag) => flag.to_string(),
            }
        }
    }

    fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Scalar>::deserialize(deserializer)?;
        Ok(value
            .map(Scalar::into_text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty()))
    }

    /// Present but blank or `null` clears a nullable column.
    pub fn nullable_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        non_blank(deserializer).map(Some)
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        non_blank(deserializer)
    }

    pub fn number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        non_blank(deserializer)?
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|err| D::Error::custom(format!("invalid number '{raw}': {err}")))
            })
            .transpose()
    }

    /// Accepts `YYYY-MM-DD` or a full ISO timestamp, keeping the date part.
    pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        non_blank(deserializer)?
            .map(|raw| {
                let day = raw.split('T').next().unwrap_or(raw.as_str());
                NaiveDate::parse_from_str(day, "%Y-%m-%d")
                    .map_err(|err| D::Error::custom(format!("invalid date '{raw}': {err}")))
            })
            .transpose()
    }

    /// HTML checkboxes submit `on`; JSON submits booleans.
    pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        non_blank(deserializer)?
            .map(|raw| match raw.to_ascii_lowercase().as_str() {
                "true" | "on" | "1" | "yes" => Ok(true),
                "false" | "off" | "0" | "no" => Ok(false),
                _ => Err(D::Error::custom(format!("invalid flag '{raw}'"))),
            })
            .transpose()
    }
}
