//! # Management Pages
//!
//! Server-rendered HTML pages: the dashboard and one management view per
//! entity. Pages are askama templates under `templates/`; every page extends
//! `base.html` (sidebar plus alert banner) and reads its shared parts from a
//! [`Frame`]. Forms post back to the server, which redirects to the page so
//! the collection is fetched again.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::error::ApiError;

pub mod form;
pub mod pages;
pub mod search;
pub mod table;

/// Sidebar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Projects,
    Accounts,
    Employees,
    Skills,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Dashboard,
        NavItem::Projects,
        NavItem::Accounts,
        NavItem::Employees,
        NavItem::Skills,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavItem::Dashboard => "/",
            NavItem::Projects => "/projects",
            NavItem::Accounts => "/accounts",
            NavItem::Employees => "/employees",
            NavItem::Skills => "/skills",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Projects => "Projects",
            NavItem::Accounts => "Accounts",
            NavItem::Employees => "Employees",
            NavItem::Skills => "Skills",
        }
    }
}

/// One sidebar link as the layout renders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Parts of the layout shared by every page
#[derive(Debug, Clone)]
pub struct Frame {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    /// Messages for the alert banner
    pub alerts: Vec<String>,
}

impl Frame {
    pub fn new(title: &'static str, active: NavItem, alerts: Vec<String>) -> Self {
        let nav = NavItem::ALL
            .iter()
            .map(|item| NavLink {
                path: item.path(),
                label: item.label(),
                active: *item == active,
            })
            .collect();

        Self { title, nav, alerts }
    }
}

/// A stat card: a headline value plus optional detail lines
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub lines: Vec<StatLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    pub fn new(title: &'static str, value: impl ToString) -> Self {
        Self {
            title,
            value: value.to_string(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, label: &'static str, value: impl ToString) -> Self {
        self.lines.push(StatLine {
            label,
            value: value.to_string(),
        });
        self
    }
}

/// Search box posting `q` back to the page
#[derive(Debug, Clone)]
pub struct SearchBox {
    pub path: &'static str,
    pub query: String,
    pub placeholder: &'static str,
}

/// Query string shared by the management pages
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageQuery {
    /// Id of the row being edited; absent in create mode
    pub edit: Option<String>,
    /// Search text (employees and skills)
    pub q: Option<String>,
    /// Message for the alert banner
    pub error: Option<String>,
}

impl PageQuery {
    pub fn editing_id(&self) -> Option<i32> {
        self.edit.as_deref().and_then(|raw| raw.trim().parse().ok())
    }

    pub fn search(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// Renders `template` with the given status
pub fn render<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to render page");
            ApiError::internal("Failed to render page").into_response()
        }
    }
}
