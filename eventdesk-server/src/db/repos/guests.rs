//! Guest repository
//!
//! Guests expose only create/list/get and reference nothing else.

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::GuestCreate;

/// Guest record from the database
#[derive(Debug, Clone, FromRow)]
pub struct GuestRow {
    pub guest_id: i32,
    pub full_name: String,
    pub guest_type: Option<String>,
    pub category: Option<String>,
    pub comment: Option<String>,
    pub status: Option<String>,
    pub phone_number: String,
}

/// Guest repository
pub struct GuestRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> GuestRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a guest, returning the stored row with its generated key.
    pub async fn create(&self, input: &GuestCreate) -> Result<GuestRow, DbError> {
        let row = sqlx::query_as(
            r#"
            INSERT INTO guests
                (full_name, guest_type, category, comment, status, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING guest_id, full_name, guest_type, category, comment,
                      status, phone_number
            "#,
        )
        .bind(&input.full_name)
        .bind(&input.guest_type)
        .bind(&input.category)
        .bind(&input.comment)
        .bind(&input.status)
        .bind(&input.phone_number)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List all guests in identity-key order.
    pub async fn list(&self) -> Result<Vec<GuestRow>, DbError> {
        let rows = sqlx::query_as(
            r#"
            SELECT guest_id, full_name, guest_type, category, comment,
                   status, phone_number
            FROM guests
            ORDER BY guest_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single guest by its identity key.
    pub async fn get(&self, id: i32) -> Result<GuestRow, DbError> {
        let row = sqlx::query_as(
            r#"
            SELECT guest_id, full_name, guest_type, category, comment,
                   status, phone_number
            FROM guests
            WHERE guest_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "guest",
            id,
        })?;

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_and_get_roundtrip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        migrations::run(&pool).await.expect("migrations");

        let repo = GuestRepo::new(&pool);
        let created = repo
            .create(&GuestCreate {
                full_name: "Anna Petrova".into(),
                guest_type: Some("family".into()),
                category: None,
                comment: None,
                status: Some("confirmed".into()),
                phone_number: "+7 900 123 45 67".into(),
            })
            .await
            .expect("create");

        let fetched = repo.get(created.guest_id).await.expect("get");
        assert_eq!(fetched.full_name, "Anna Petrova");
        assert_eq!(fetched.guest_type.as_deref(), Some("family"));
        assert!(fetched.category.is_none());
    }
}
