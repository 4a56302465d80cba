//! Event repository
//!
//! Full CRUD plus traversal to the contractors an event owns.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use super::{ContractorRow, DbError};
use crate::models::EventCreate;

/// Event record from the database
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub event_id: i32,
    pub name: String,
    pub event_date: NaiveDateTime,
    pub event_type: Option<String>,
    pub budget: Option<Decimal>,
}

/// Event repository
pub struct EventRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an event, returning the stored row with its generated key.
    pub async fn create(&self, input: &EventCreate) -> Result<EventRow, DbError> {
        let row = sqlx::query_as(
            r#"
            INSERT INTO events (name, event_date, event_type, budget)
            VALUES ($1, $2, $3, $4)
            RETURNING event_id, name, event_date, event_type, budget
            "#,
        )
        .bind(&input.name)
        .bind(input.event_date)
        .bind(&input.event_type)
        .bind(input.budget)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::from_query)?;

        Ok(row)
    }

    /// List all events in identity-key order.
    pub async fn list(&self) -> Result<Vec<EventRow>, DbError> {
        let rows = sqlx::query_as(
            r#"
            SELECT event_id, name, event_date, event_type, budget
            FROM events
            ORDER BY event_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single event by its identity key.
    pub async fn get(&self, id: i32) -> Result<EventRow, DbError> {
        let row = sqlx::query_as(
            r#"
            SELECT event_id, name, event_date, event_type, budget
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "event",
            id,
        })?;

        Ok(row)
    }

    /// Overwrite every mutable field of an event.
    ///
    /// Optional fields absent from the input are cleared, not preserved.
    pub async fn update(&self, id: i32, input: &EventCreate) -> Result<EventRow, DbError> {
        let row = sqlx::query_as(
            r#"
            UPDATE events
            SET name = $2, event_date = $3, event_type = $4, budget = $5
            WHERE event_id = $1
            RETURNING event_id, name, event_date, event_type, budget
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.event_date)
        .bind(&input.event_type)
        .bind(input.budget)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "event",
            id,
        })?;

        Ok(row)
    }

    /// Delete an event by its identity key.
    ///
    /// Fails with a foreign key violation if contractors still reference it.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(DbError::from_query)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "event",
                id,
            });
        }

        Ok(())
    }

    /// List the contractors owned by an event.
    pub async fn contractors(&self, id: i32) -> Result<Vec<ContractorRow>, DbError> {
        // NotFound on a missing event rather than an empty list
        self.get(id).await?;

        let rows = sqlx::query_as(
            r#"
            SELECT contractor_id, name, status, description, phone_number,
                   service_cost, category_id, event_id
            FROM contractors
            WHERE event_id = $1
            ORDER BY contractor_id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        migrations::run(&pool).await.expect("migrations");
        pool
    }

    fn sample_event(name: &str) -> EventCreate {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "event_date": "2025-06-01T10:00:00",
            "event_type": "corporate",
            "budget": "500.00",
        }))
        .expect("valid input")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_assigns_fresh_key_and_get_roundtrips() {
        let pool = test_pool().await;
        let repo = EventRepo::new(&pool);

        let first = repo.create(&sample_event("Launch")).await.expect("create");
        let second = repo.create(&sample_event("Retreat")).await.expect("create");
        assert!(second.event_id > first.event_id);

        let fetched = repo.get(first.event_id).await.expect("get");
        assert_eq!(fetched.name, "Launch");
        assert_eq!(fetched.event_type.as_deref(), Some("corporate"));
        assert_eq!(fetched.budget, first.budget);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_is_full_overwrite() {
        let pool = test_pool().await;
        let repo = EventRepo::new(&pool);

        let created = repo.create(&sample_event("Launch")).await.expect("create");

        // Payload omits event_type and budget: both must be cleared.
        let replacement: EventCreate = serde_json::from_value(serde_json::json!({
            "name": "Launch v2",
            "event_date": "2025-07-01T09:00:00",
        }))
        .expect("valid input");

        let updated = repo
            .update(created.event_id, &replacement)
            .await
            .expect("update");
        assert_eq!(updated.name, "Launch v2");
        assert!(updated.event_type.is_none());
        assert!(updated.budget.is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_key_is_not_found_everywhere() {
        let pool = test_pool().await;
        let repo = EventRepo::new(&pool);

        let missing = i32::MAX;
        assert!(matches!(
            repo.get(missing).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(
            repo.update(missing, &sample_event("x")).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete(missing).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_then_get_is_not_found() {
        let pool = test_pool().await;
        let repo = EventRepo::new(&pool);

        let created = repo.create(&sample_event("Launch")).await.expect("create");
        repo.delete(created.event_id).await.expect("delete");

        assert!(matches!(
            repo.get(created.event_id).await,
            Err(DbError::NotFound { .. })
        ));
    }
}
