//! # Account Repository
//!
//! CRUD operations for client accounts. Listings carry each account's
//! projects.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, LoaderTrait, ModelTrait,
    QueryOrder,
};
use serde::Serialize;

use super::payload::{AccountPayload, Payload};
use super::RepositoryError;
use crate::models::account::{self, Entity as Account, Model as AccountModel};
use crate::models::project;

/// An account together with the projects delivered for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountWithProjects {
    #[serde(flatten)]
    pub account: AccountModel,
    pub projects: Vec<project::Model>,
}

/// Repository for Account database operations
pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List every account in id order, each with its projects
    pub async fn list_with_projects(&self) -> Result<Vec<AccountWithProjects>, RepositoryError> {
        let accounts = Account::find()
            .order_by_asc(account::Column::Id)
            .all(self.db)
            .await?;
        let projects = accounts
            .load_many(
                project::Entity::find().order_by_asc(project::Column::Id),
                self.db,
            )
            .await?;

        Ok(accounts
            .into_iter()
            .zip(projects)
            .map(|(account, projects)| AccountWithProjects { account, projects })
            .collect())
    }

    pub async fn find(&self, id: i32) -> Result<Option<AccountModel>, RepositoryError> {
        Ok(Account::find_by_id(id).one(self.db).await?)
    }

    /// Create an account; `createdAt` is stamped with the current time
    pub async fn create(&self, payload: AccountPayload) -> Result<AccountModel, RepositoryError> {
        let account = payload.build()?;
        Ok(account.insert(self.db).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        payload: AccountPayload,
    ) -> Result<AccountModel, RepositoryError> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Account", id))?;

        let mut active = existing.into_active_model();
        payload.apply(&mut active);
        Ok(active.update(self.db).await?)
    }

    /// Delete an account and return the removed row
    ///
    /// Fails with a database error while projects still reference the account.
    pub async fn delete(&self, id: i32) -> Result<AccountModel, RepositoryError> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Account", id))?;

        existing.clone().delete(self.db).await?;
        Ok(existing)
    }
}
