use crate::domain::error::DomainError;
use crate::domain::tag::Tag;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn list_tags(&self) -> Result<Vec<Tag>, DomainError>;
}

#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: SqlitePool,
}

impl SqliteTagRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn list_tags(&self) -> Result<Vec<Tag>, DomainError> {
        sqlx::query_as::<_, Tag>("SELECT id, name FROM tag ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("db error while fetching tags: {}", e);
                DomainError::Internal(e.to_string())
            })
    }
}
