use std::sync::Arc;

use crate::data::tag_repository::TagRepository;
use crate::domain::{error::DomainError, tag::Tag};

#[derive(Clone)]
pub struct TagService<R: TagRepository + 'static> {
    repo: Arc<R>,
}

impl<R> TagService<R>
where
    R: TagRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, DomainError> {
        self.repo.list_tags().await
    }
}
