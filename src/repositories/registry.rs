//! # Table Registry
//!
//! Backs the generic data route. Every table the route may touch is
//! registered explicitly with its entity and payload type, so a request can
//! only reach known tables and known columns.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IdenStatic, IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::RepositoryError;
use super::payload::{
    AbsencePayload, AccountPayload, EmployeeLevelPayload, EmployeeMotivatorPayload,
    EmployeePayload, EmployeeSkillPayload, MotivatorPayload, Payload, PerformanceReviewPayload,
    ProjectAssignmentPayload, ProjectPayload, SalaryPayload, SkillPayload, StatusPayload,
};
use crate::models;

/// A table reachable through the generic data route
#[async_trait]
pub trait DataTable: Send + Sync {
    /// Accessor name, e.g. `projectStatus`
    fn name(&self) -> &'static str;

    /// SQL table name, e.g. `project_statuses`
    fn table_name(&self) -> &str;

    /// JSON field names in column order
    fn fields(&self) -> Vec<String>;

    /// Every row in primary key order, restricted to `fields`
    async fn select(
        &self,
        db: &DatabaseConnection,
        fields: &[String],
    ) -> Result<Vec<Value>, RepositoryError>;

    async fn insert(&self, db: &DatabaseConnection, body: Value) -> Result<Value, RepositoryError>;

    async fn update(
        &self,
        db: &DatabaseConnection,
        id: i32,
        body: Value,
    ) -> Result<Value, RepositoryError>;

    async fn delete(&self, db: &DatabaseConnection, id: i32) -> Result<(), RepositoryError>;
}

/// `DataTable` over a SeaORM entity `E` written through payload `P`
pub struct EntityTable<E, P> {
    name: &'static str,
    table_name: String,
    _marker: PhantomData<fn() -> (E, P)>,
}

impl<E, P> EntityTable<E, P>
where
    E: EntityTrait,
{
    pub fn new(name: &'static str, table_name: String) -> Self {
        Self {
            name,
            table_name,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<E, P> DataTable for EntityTable<E, P>
where
    E: EntityTrait,
    E::Model: Serialize + IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    P: Payload<E::ActiveModel> + DeserializeOwned,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn fields(&self) -> Vec<String> {
        E::Column::iter()
            .map(|column| camel_case(column.as_str()))
            .collect()
    }

    async fn select(
        &self,
        db: &DatabaseConnection,
        fields: &[String],
    ) -> Result<Vec<Value>, RepositoryError> {
        let known = self.fields();
        if let Some(unknown) = fields.iter().find(|field| !known.contains(field)) {
            return Err(RepositoryError::UnknownField(unknown.clone()));
        }

        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        query
            .all(db)
            .await?
            .iter()
            .map(|model| {
                let Value::Object(row) = to_json(model)? else {
                    return Ok(Value::Null);
                };
                let projected: Map<String, Value> = fields
                    .iter()
                    .map(|field| (field.clone(), row.get(field).cloned().unwrap_or(Value::Null)))
                    .collect();
                Ok(Value::Object(projected))
            })
            .collect()
    }

    async fn insert(&self, db: &DatabaseConnection, body: Value) -> Result<Value, RepositoryError> {
        let payload = parse_payload::<P>(body)?;
        let model = payload.build()?.insert(db).await?;
        to_json(&model)
    }

    async fn update(
        &self,
        db: &DatabaseConnection,
        id: i32,
        body: Value,
    ) -> Result<Value, RepositoryError> {
        let payload = parse_payload::<P>(body)?;
        let existing = E::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| RepositoryError::not_found(self.name, id))?;

        let mut active = existing.into_active_model();
        payload.apply(&mut active);
        let model = active.update(db).await?;
        to_json(&model)
    }

    async fn delete(&self, db: &DatabaseConnection, id: i32) -> Result<(), RepositoryError> {
        let result = E::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found(self.name, id));
        }
        Ok(())
    }
}

fn parse_payload<P: DeserializeOwned>(body: Value) -> Result<P, RepositoryError> {
    serde_json::from_value(body).map_err(|err| RepositoryError::Validation(err.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, RepositoryError> {
    serde_json::to_value(value).map_err(|err| DbErr::Json(err.to_string()).into())
}

/// Converts a snake_case column name to its camelCase JSON field
pub fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Lookup of data tables by accessor or SQL table name
#[derive(Clone)]
pub struct TableRegistry {
    tables: Vec<Arc<dyn DataTable>>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Registry with every table of the data model
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register::<models::Account, AccountPayload>("account");
        registry.register::<models::ProjectStatus, StatusPayload>("projectStatus");
        registry.register::<models::Project, ProjectPayload>("project");
        registry.register::<models::Employee, EmployeePayload>("employee");
        registry.register::<models::Skill, SkillPayload>("skill");
        registry.register::<models::EmployeeSkill, EmployeeSkillPayload>("employeeSkill");
        registry.register::<models::Salary, SalaryPayload>("salary");
        registry.register::<models::EmployeeLevel, EmployeeLevelPayload>("employeeLevel");
        registry.register::<models::Motivator, MotivatorPayload>("motivator");
        registry.register::<models::EmployeeMotivator, EmployeeMotivatorPayload>(
            "employeeMotivator",
        );
        registry.register::<models::PerformanceReview, PerformanceReviewPayload>(
            "performanceReview",
        );
        registry.register::<models::Absence, AbsencePayload>("absence");
        registry.register::<models::ProjectAssignment, ProjectAssignmentPayload>(
            "projectAssignment",
        );
        registry
    }

    /// Register entity `E` under `name` and its SQL table name
    pub fn register<E, P>(&mut self, name: &'static str)
    where
        EntityTable<E, P>: DataTable + 'static,
        E: EntityTrait,
    {
        let table_name = E::default().table_name().to_string();
        self.tables.push(Arc::new(EntityTable::<E, P>::new(name, table_name)));
    }

    /// Resolve a table by accessor name or SQL table name
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn DataTable>, RepositoryError> {
        self.tables
            .iter()
            .find(|table| table.name() == name || table.table_name() == name)
            .cloned()
            .ok_or_else(|| RepositoryError::UnknownTable(name.to_string()))
    }

    /// Accessor names of all registered tables
    pub fn names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|table| table.name()).collect()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for TableRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableRegistry")
            .field("tables", &self.names())
            .finish()
    }
}
