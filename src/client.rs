//! # API Client
//!
//! Typed HTTP client for a running backoffice server. The `dashboard`
//! command uses it to load the three listings the dashboard is built from.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::dashboard::{AccountSummary, Dashboard, EmployeeSummary, ProjectSummary};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid api base url '{0}'")]
    InvalidBaseUrl(String),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
}

/// Client for the JSON API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        // A trailing slash keeps `join` from dropping the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("backoffice/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ClientError::Request {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn projects(&self) -> Result<Vec<ProjectSummary>, ClientError> {
        self.get_json("api/projectsApi").await
    }

    pub async fn employees(&self) -> Result<Vec<EmployeeSummary>, ClientError> {
        self.get_json("api/employeesApi").await
    }

    pub async fn accounts(&self) -> Result<Vec<AccountSummary>, ClientError> {
        self.get_json("api/accountsApi").await
    }

    /// Loads the three listings concurrently and builds the dashboard.
    ///
    /// A failed listing is logged and treated as empty.
    pub async fn dashboard(&self) -> Dashboard {
        let (projects, employees, accounts) =
            tokio::join!(self.projects(), self.employees(), self.accounts());

        Dashboard::build(
            or_empty(projects, "projects"),
            or_empty(employees, "employees"),
            or_empty(accounts, "accounts"),
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?;

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        response.json().await.map_err(|source| ClientError::Request {
            url: url.to_string(),
            source,
        })
    }
}

pub(crate) fn or_empty<T>(result: Result<Vec<T>, impl std::fmt::Display>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to fetch {}", what);
        Vec::new()
    })
}
