//! # Project Repository
//!
//! CRUD operations for projects. Listings resolve each project's status and
//! account.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, LoaderTrait, ModelTrait,
    QueryOrder,
};
use serde::Serialize;

use super::payload::{Payload, ProjectPayload};
use super::RepositoryError;
use crate::models::project::{self, Entity as Project, Model as ProjectModel};
use crate::models::{account, project_status};

/// A project with its status and account resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectWithRelations {
    #[serde(flatten)]
    pub project: ProjectModel,
    pub status: Option<project_status::Model>,
    pub account: Option<account::Model>,
}

/// Repository for Project database operations
pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List every project in id order with status and account
    pub async fn list_with_relations(&self) -> Result<Vec<ProjectWithRelations>, RepositoryError> {
        let projects = Project::find()
            .order_by_asc(project::Column::Id)
            .all(self.db)
            .await?;
        let statuses = projects.load_one(project_status::Entity, self.db).await?;
        let accounts = projects.load_one(account::Entity, self.db).await?;

        Ok(projects
            .into_iter()
            .zip(statuses)
            .zip(accounts)
            .map(|((project, status), account)| ProjectWithRelations {
                project,
                status,
                account,
            })
            .collect())
    }

    pub async fn find(&self, id: i32) -> Result<Option<ProjectModel>, RepositoryError> {
        Ok(Project::find_by_id(id).one(self.db).await?)
    }

    pub async fn create(&self, payload: ProjectPayload) -> Result<ProjectModel, RepositoryError> {
        let project = payload.build()?;
        Ok(project.insert(self.db).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        payload: ProjectPayload,
    ) -> Result<ProjectModel, RepositoryError> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Project", id))?;

        let mut active = existing.into_active_model();
        payload.apply(&mut active);
        Ok(active.update(self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<ProjectModel, RepositoryError> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Project", id))?;

        existing.clone().delete(self.db).await?;
        Ok(existing)
    }
}
