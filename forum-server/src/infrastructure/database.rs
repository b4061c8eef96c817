use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub(crate) async fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("failed to connect to postgres")?;

    Ok(pool)
}

/// Brings the tables in line with the entity definitions on startup.
/// Existing tables are left alone; there is no migration history.
pub(crate) async fn sync_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id          BIGSERIAL PRIMARY KEY,
            title       TEXT NOT NULL,
            body        TEXT NOT NULL,
            user_id     BIGINT NOT NULL,
            created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create posts table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id       BIGSERIAL PRIMARY KEY,
            post_id  BIGINT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
            body     TEXT NOT NULL,
            user_id  BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create comments table")?;

    // one vote per (post, user) is enforced by the service's upsert, not
    // by a unique constraint
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS votes (
            id         BIGSERIAL PRIMARY KEY,
            post_id    BIGINT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
            user_id    BIGINT NOT NULL,
            user_vote  SMALLINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create votes table")?;

    info!("database schema synchronized");
    Ok(())
}
