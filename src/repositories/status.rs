//! # Project Status Repository

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::payload::{Payload, StatusPayload};
use super::RepositoryError;
use crate::models::project_status::{self, Entity as ProjectStatus, Model as StatusModel};

/// Repository for ProjectStatus database operations
pub struct StatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active statuses ordered by label
    pub async fn list_active(&self) -> Result<Vec<StatusModel>, RepositoryError> {
        Ok(ProjectStatus::find()
            .filter(project_status::Column::IsActive.eq(true))
            .order_by_asc(project_status::Column::Status)
            .all(self.db)
            .await?)
    }

    pub async fn find_by_label(&self, label: &str) -> Result<Option<StatusModel>, RepositoryError> {
        Ok(ProjectStatus::find()
            .filter(project_status::Column::Status.eq(label))
            .one(self.db)
            .await?)
    }

    /// Create a status; new statuses are always active
    pub async fn create(&self, payload: StatusPayload) -> Result<StatusModel, RepositoryError> {
        let status = StatusPayload {
            is_active: Some(true),
            ..payload
        }
        .build()?;
        Ok(status.insert(self.db).await?)
    }
}
