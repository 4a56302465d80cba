//! Contractor category repository
//!
//! Categories expose only create/list/get; they are never updated or
//! deleted through the API.

use sqlx::{FromRow, PgPool};

use super::{ContractorRow, DbError};
use crate::models::CategoryCreate;

/// Category record from the database
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub category_id: i32,
    pub category_name: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a category, returning the stored row with its generated key.
    pub async fn create(&self, input: &CategoryCreate) -> Result<CategoryRow, DbError> {
        let row = sqlx::query_as(
            r#"
            INSERT INTO contractor_categories (category_name)
            VALUES ($1)
            RETURNING category_id, category_name
            "#,
        )
        .bind(&input.category_name)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List all categories in identity-key order.
    pub async fn list(&self) -> Result<Vec<CategoryRow>, DbError> {
        let rows = sqlx::query_as(
            r#"
            SELECT category_id, category_name
            FROM contractor_categories
            ORDER BY category_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single category by its identity key.
    pub async fn get(&self, id: i32) -> Result<CategoryRow, DbError> {
        let row = sqlx::query_as(
            r#"
            SELECT category_id, category_name
            FROM contractor_categories
            WHERE category_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "contractor category",
            id,
        })?;

        Ok(row)
    }

    /// List the contractors filed under a category.
    pub async fn contractors(&self, id: i32) -> Result<Vec<ContractorRow>, DbError> {
        self.get(id).await?;

        let rows = sqlx::query_as(
            r#"
            SELECT contractor_id, name, status, description, phone_number,
                   service_cost, category_id, event_id
            FROM contractors
            WHERE category_id = $1
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
    use crate::models::CategoryCreate;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_and_get_roundtrip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        migrations::run(&pool).await.expect("migrations");

        let repo = CategoryRepo::new(&pool);
        let created = repo
            .create(&CategoryCreate {
                category_name: "Catering".into(),
            })
            .await
            .expect("create");

        let fetched = repo.get(created.category_id).await.expect("get");
        assert_eq!(fetched.category_name, "Catering");

        assert!(matches!(
            repo.get(i32::MAX).await,
            Err(DbError::NotFound { .. })
        ));
    }
}
