//! Database layer - connection pool, migrations, and repositories
//!
//! # Design Principles
//!
//! - Connection pool injected through state - no module-level globals
//! - Each request borrows a connection for its duration only
//! - Referential integrity lives in the database, not in handler code
//! - Single-row commits; no multi-row transactions span resources

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
