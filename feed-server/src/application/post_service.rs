use std::sync::Arc;

use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::like::{DEMO_USER_ID, LikeOutcome};
use crate::domain::post::{PostQuery, PostView};
use tracing::instrument;

/// Feed operations performed on behalf of a single viewer.
#[derive(Clone)]
pub struct PostService<R: PostRepository + 'static> {
    repo: Arc<R>,
    viewer_id: i64,
}

impl<R> PostService<R>
where
    R: PostRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            viewer_id: DEMO_USER_ID,
        }
    }

    pub async fn list_posts(&self, query: PostQuery) -> Result<Vec<PostView>, DomainError> {
        self.repo.list_posts(&query, self.viewer_id).await
    }

    pub async fn featured_post(&self) -> Result<PostView, DomainError> {
        self.repo
            .featured_post(self.viewer_id)
            .await?
            .ok_or(DomainError::NoPosts)
    }

    #[instrument(skip(self))]
    pub async fn toggle_like(&self, post_id: i64) -> Result<LikeOutcome, DomainError> {
        self.repo.toggle_like(post_id, self.viewer_id).await
    }
}
