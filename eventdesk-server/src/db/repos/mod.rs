//! Repository implementations for database access
//!
//! One repository per resource. Each follows the same patterns:
//! - Inserts use RETURNING so the generated key comes back in one round trip
//! - Lookups use fetch_optional and translate a missing row into NotFound
//! - Updates overwrite every mutable column (full replacement, never a merge)

pub mod categories;
pub mod contractors;
pub mod events;
pub mod guests;

pub use categories::{CategoryRepo, CategoryRow};
pub use contractors::{ContractorRepo, ContractorRow};
pub use events::{EventRepo, EventRow};
pub use guests::{GuestRepo, GuestRow};

/// Postgres error code for foreign_key_violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i32 },

    #[error("foreign key violation: {detail}")]
    ForeignKey { detail: String },
}

impl DbError {
    /// Translate a query failure, surfacing foreign key violations as their
    /// own variant so callers can distinguish a dangling reference from a
    /// genuine storage failure.
    pub(crate) fn from_query(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return Self::ForeignKey {
                    detail: db.message().to_owned(),
                };
            }
        }
        Self::Sqlx(e)
    }
}
