//! eventdesk-server: HTTP API for event-planning records
//!
//! Stores events, contractor categories, contractors, and guests in
//! PostgreSQL and exposes JSON CRUD endpoints over each resource.

pub mod db;
pub mod http;
pub mod models;

pub use db::create_pool;
pub use http::{run_server, ServerConfig};
