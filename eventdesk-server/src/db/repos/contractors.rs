//! Contractor repository
//!
//! Contractors carry the only foreign keys in the schema. Inserts and
//! updates with a dangling category_id or event_id fail with
//! DbError::ForeignKey rather than ever storing a dangling reference.

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::ContractorCreate;

/// Contractor record from the database
#[derive(Debug, Clone, FromRow)]
pub struct ContractorRow {
    pub contractor_id: i32,
    pub name: String,
    pub status: String,
    pub description: Option<String>,
    pub phone_number: Option<String>,
    pub service_cost: Option<f64>,
    pub category_id: i32,
    pub event_id: i32,
}

/// Contractor repository
pub struct ContractorRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ContractorRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a contractor, returning the stored row with its generated key.
    pub async fn create(&self, input: &ContractorCreate) -> Result<ContractorRow, DbError> {
        let row = sqlx::query_as(
            r#"
            INSERT INTO contractors
                (name, status, description, phone_number, service_cost,
                 category_id, event_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING contractor_id, name, status, description, phone_number,
                      service_cost, category_id, event_id
            "#,
        )
        .bind(&input.name)
        .bind(&input.status)
        .bind(&input.description)
        .bind(&input.phone_number)
        .bind(input.service_cost)
        .bind(input.category_id)
        .bind(input.event_id)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::from_query)?;

        Ok(row)
    }

    /// List all contractors in identity-key order.
    pub async fn list(&self) -> Result<Vec<ContractorRow>, DbError> {
        let rows = sqlx::query_as(
            r#"
            SELECT contractor_id, name, status, description, phone_number,
                   service_cost, category_id, event_id
            FROM contractors
            ORDER BY contractor_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single contractor by its identity key.
    pub async fn get(&self, id: i32) -> Result<ContractorRow, DbError> {
        let row = sqlx::query_as(
            r#"
            SELECT contractor_id, name, status, description, phone_number,
                   service_cost, category_id, event_id
            FROM contractors
            WHERE contractor_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "contractor",
            id,
        })?;

        Ok(row)
    }

    /// Overwrite every mutable field of a contractor, references included.
    pub async fn update(
        &self,
        id: i32,
        input: &ContractorCreate,
    ) -> Result<ContractorRow, DbError> {
        let row = sqlx::query_as(
            r#"
            UPDATE contractors
            SET name = $2, status = $3, description = $4, phone_number = $5,
                service_cost = $6, category_id = $7, event_id = $8
            WHERE contractor_id = $1
            RETURNING contractor_id, name, status, description, phone_number,
                      service_cost, category_id, event_id
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.status)
        .bind(&input.description)
        .bind(&input.phone_number)
        .bind(input.service_cost)
        .bind(input.category_id)
        .bind(input.event_id)
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::from_query)?
        .ok_or(DbError::NotFound {
            resource: "contractor",
            id,
        })?;

        Ok(row)
    }

    /// Delete a contractor by its identity key.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM contractors WHERE contractor_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "contractor",
                id,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;
    use crate::db::repos::{CategoryRepo, EventRepo};
    use crate::models::{CategoryCreate, EventCreate};

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        migrations::run(&pool).await.expect("migrations");
        pool
    }

    async fn fixture_refs(pool: &PgPool) -> (i32, i32) {
        let category = CategoryRepo::new(pool)
            .create(&CategoryCreate {
                category_name: "Music".into(),
            })
            .await
            .expect("category");

        let event_input: EventCreate = serde_json::from_value(serde_json::json!({
            "name": "Wedding",
            "event_date": "2025-08-09T16:00:00",
        }))
        .expect("valid input");
        let event = EventRepo::new(pool)
            .create(&event_input)
            .await
            .expect("event");

        (category.category_id, event.event_id)
    }

    fn contractor_input(category_id: i32, event_id: i32) -> ContractorCreate {
        ContractorCreate {
            name: "DJ Sasha".into(),
            status: "booked".into(),
            description: Some("Evening set".into()),
            phone_number: Some("+7 900 000 00 00".into()),
            service_cost: Some(1200.0),
            category_id,
            event_id,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn dangling_references_fail_loudly() {
        let pool = test_pool().await;
        let repo = ContractorRepo::new(&pool);

        let result = repo.create(&contractor_input(i32::MAX, i32::MAX)).await;
        assert!(matches!(result, Err(DbError::ForeignKey { .. })));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_with_valid_references_roundtrips() {
        let pool = test_pool().await;
        let (category_id, event_id) = fixture_refs(&pool).await;

        let repo = ContractorRepo::new(&pool);
        let created = repo
            .create(&contractor_input(category_id, event_id))
            .await
            .expect("create");

        let fetched = repo.get(created.contractor_id).await.expect("get");
        assert_eq!(fetched.name, "DJ Sasha");
        assert_eq!(fetched.category_id, category_id);
        assert_eq!(fetched.event_id, event_id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_of_referenced_event_is_rejected() {
        let pool = test_pool().await;
        let (category_id, event_id) = fixture_refs(&pool).await;

        ContractorRepo::new(&pool)
            .create(&contractor_input(category_id, event_id))
            .await
            .expect("create");

        let result = EventRepo::new(&pool).delete(event_id).await;
        assert!(matches!(result, Err(DbError::ForeignKey { .. })));
    }
}
