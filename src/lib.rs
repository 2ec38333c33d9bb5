//! # Backoffice Library
//!
//! Core of the backoffice service: JSON API handlers, server-rendered
//! management pages, repositories over the SeaORM models, and the
//! configuration, telemetry and database plumbing they share.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod seeds;
pub mod server;
pub mod telemetry;
pub mod ui;
pub use migration;
