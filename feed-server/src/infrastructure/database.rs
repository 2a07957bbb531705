use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::infrastructure::fixtures::Fixtures;

const DROP_TABLES: &[&str] = &[
    "DROP TABLE IF EXISTS post_tag",
    "DROP TABLE IF EXISTS post_like",
    "DROP TABLE IF EXISTS tag",
    "DROP TABLE IF EXISTS post",
];

const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE post (
        id INTEGER PRIMARY KEY,
        username TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE tag (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE post_like (
        id INTEGER PRIMARY KEY,
        post_id INTEGER NOT NULL REFERENCES post (id),
        user_id INTEGER NOT NULL,
        UNIQUE (post_id, user_id)
    )
    "#,
    r#"
    CREATE TABLE post_tag (
        id INTEGER PRIMARY KEY,
        post_id INTEGER NOT NULL REFERENCES post (id),
        tag_id INTEGER NOT NULL REFERENCES tag (id),
        UNIQUE (post_id, tag_id)
    )
    "#,
];

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;
    info!(database_url, "connected to SQLite");
    Ok(pool)
}

/// Drops every table, recreates the schema and inserts `fixtures`, all in
/// one transaction.
pub async fn reset_and_seed(pool: &SqlitePool, fixtures: &Fixtures) -> anyhow::Result<()> {
    info!("resetting database");
    let mut tx = pool.begin().await?;

    for statement in DROP_TABLES.iter().chain(CREATE_TABLES) {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    for post in fixtures.posts {
        let created_at = NaiveDateTime::from_str(post.created_at).map_err(|e| {
            anyhow::anyhow!("bad created_at {:?} on post {}: {}", post.created_at, post.id, e)
        })?;
        sqlx::query("INSERT INTO post (id, username, content, created_at) VALUES (?, ?, ?, ?)")
            .bind(post.id)
            .bind(post.username)
            .bind(post.content)
            .bind(created_at)
            .execute(&mut *tx)
            .await?;
    }

    for tag in fixtures.tags {
        sqlx::query("INSERT INTO tag (id, name) VALUES (?, ?)")
            .bind(tag.id)
            .bind(tag.name)
            .execute(&mut *tx)
            .await?;
    }

    for like in fixtures.post_likes {
        sqlx::query("INSERT INTO post_like (post_id, user_id) VALUES (?, ?)")
            .bind(like.post_id)
            .bind(like.user_id)
            .execute(&mut *tx)
            .await?;
    }

    for post_tag in fixtures.post_tags {
        sqlx::query("INSERT INTO post_tag (post_id, tag_id) VALUES (?, ?)")
            .bind(post_tag.post_id)
            .bind(post_tag.tag_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!(
        posts = fixtures.posts.len(),
        tags = fixtures.tags.len(),
        likes = fixtures.post_likes.len(),
        "database seeded"
    );
    Ok(())
}

/// Single-connection in-memory pool; the database lives as long as the pool.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap()
}

#[cfg(test)]
pub async fn seeded_pool(fixtures: &Fixtures) -> SqlitePool {
    let pool = memory_pool().await;
    reset_and_seed(&pool, fixtures).await.unwrap();
    pool
}
