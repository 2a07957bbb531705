use std::collections::HashMap;

use crate::domain::error::DomainError;
use crate::domain::like::LikeOutcome;
use crate::domain::post::{PostQuery, PostView, SortOrder};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use tracing::{error, info};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list_posts(
        &self,
        query: &PostQuery,
        viewer_id: i64,
    ) -> Result<Vec<PostView>, DomainError>;
    async fn featured_post(&self, viewer_id: i64) -> Result<Option<PostView>, DomainError>;
    async fn toggle_like(&self, post_id: i64, user_id: i64) -> Result<LikeOutcome, DomainError>;
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    username: String,
    content: String,
    created_at: NaiveDateTime,
    likes: i64,
    liked: bool,
}

#[derive(Debug, FromRow)]
struct PostTagRow {
    post_id: i64,
    name: String,
}

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Left join keeps unliked posts; `liked` is NULL for them until coalesced.
    fn select_posts<'a>(viewer_id: i64) -> QueryBuilder<'a, Sqlite> {
        let mut builder = QueryBuilder::new(
            r#"
            SELECT p.id, p.username, p.content, p.created_at,
                   COUNT(l.id) AS likes,
                   COALESCE(MAX(l.user_id = "#,
        );
        builder.push_bind(viewer_id);
        builder.push(
            r#"), 0) AS liked
            FROM post p
            LEFT JOIN post_like l ON l.post_id = p.id
            "#,
        );
        builder
    }

    async fn with_tags(&self, rows: Vec<PostRow>) -> Result<Vec<PostView>, DomainError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT pt.post_id, t.name
            FROM post_tag pt
            JOIN tag t ON t.id = pt.tag_id
            WHERE pt.post_id IN ("#,
        );
        let mut ids = builder.separated(", ");
        for row in &rows {
            ids.push_bind(row.id);
        }
        ids.push_unseparated(") ORDER BY pt.id");

        let tag_rows = builder
            .build_query_as::<PostTagRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("db error while fetching post tags: {}", e);
                DomainError::Internal(e.to_string())
            })?;

        let mut tags: HashMap<i64, Vec<String>> = HashMap::new();
        for tag in tag_rows {
            tags.entry(tag.post_id).or_default().push(tag.name);
        }

        Ok(rows
            .into_iter()
            .map(|row| PostView {
                tags: tags.remove(&row.id).unwrap_or_default(),
                id: row.id,
                username: row.username,
                content: row.content,
                created_at: row.created_at,
                likes: row.likes,
                liked: row.liked,
            })
            .collect())
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_posts(
        &self,
        query: &PostQuery,
        viewer_id: i64,
    ) -> Result<Vec<PostView>, DomainError> {
        let mut builder = Self::select_posts(viewer_id);

        if let Some(tag) = &query.tag {
            builder.push(
                r#"
                WHERE p.id IN (
                    SELECT pt.post_id FROM post_tag pt
                    JOIN tag t ON t.id = pt.tag_id
                    WHERE t.name = "#,
            );
            builder.push_bind(tag.clone());
            builder.push(")");
        }

        builder.push(" GROUP BY p.id");
        builder.push(match query.sort {
            None => " ORDER BY p.id",
            Some(SortOrder::Latest) => " ORDER BY p.created_at, p.id",
            Some(SortOrder::Popular) => " ORDER BY likes DESC, p.id",
        });

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("db error while fetching posts: {}", e);
                DomainError::Internal(e.to_string())
            })?;

        self.with_tags(rows).await
    }

    async fn featured_post(&self, viewer_id: i64) -> Result<Option<PostView>, DomainError> {
        let mut builder = Self::select_posts(viewer_id);
        builder.push(" GROUP BY p.id ORDER BY RANDOM() LIMIT 1");

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("db error while picking featured post: {}", e);
                DomainError::Internal(e.to_string())
            })?;

        Ok(self.with_tags(row.into_iter().collect()).await?.pop())
    }

    async fn toggle_like(&self, post_id: i64, user_id: i64) -> Result<LikeOutcome, DomainError> {
        let db_err = |e: sqlx::Error| {
            error!("failed to toggle like on post {}: {}", post_id, e);
            DomainError::Internal(e.to_string())
        };

        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let removed = sqlx::query("DELETE FROM post_like WHERE post_id = ? AND user_id = ?")
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        let outcome = if removed.rows_affected() > 0 {
            LikeOutcome::Unliked
        } else {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM post WHERE id = ?)")
                .bind(post_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(db_err)?;
            if !exists {
                return Err(DomainError::PostNotFound(post_id));
            }

            sqlx::query("INSERT INTO post_like (post_id, user_id) VALUES (?, ?)")
                .bind(post_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
            LikeOutcome::Liked
        };

        tx.commit().await.map_err(db_err)?;

        info!(post_id, user_id, %outcome, "like toggled");
        Ok(outcome)
    }
}
