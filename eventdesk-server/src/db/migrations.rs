//! Schema creation
//!
//! Idempotent CREATE TABLE IF NOT EXISTS migrations, run once at startup.
//! Contractor foreign keys use ON DELETE RESTRICT: deleting an event or
//! category that contractors still reference is rejected, never cascaded.

use sqlx::PgPool;

/// Create all tables and indexes if absent.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            event_id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            event_date TIMESTAMP NOT NULL,
            event_type TEXT,
            budget NUMERIC(12, 2)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contractor_categories (
            category_id SERIAL PRIMARY KEY,
            category_name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contractors (
            contractor_id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            status TEXT NOT NULL,
            description TEXT,
            phone_number TEXT,
            service_cost DOUBLE PRECISION,
            category_id INTEGER NOT NULL
                REFERENCES contractor_categories(category_id) ON DELETE RESTRICT,
            event_id INTEGER NOT NULL
                REFERENCES events(event_id) ON DELETE RESTRICT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS guests (
            guest_id SERIAL PRIMARY KEY,
            full_name TEXT NOT NULL,
            guest_type TEXT,
            category TEXT,
            comment TEXT,
            status TEXT,
            phone_number TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_contractors_category ON contractors(category_id)",
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_contractors_event ON contractors(event_id)")
        .execute(pool)
        .await?;

    Ok(())
}
