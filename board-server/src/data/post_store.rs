use async_trait::async_trait;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub(crate) struct PostRow {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) content: String,
    pub(crate) time: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct NewPostRow {
    pub(crate) name: String,
    pub(crate) content: String,
    pub(crate) time: i64,
}

#[async_trait]
pub(crate) trait PostStore: Send + Sync {
    async fn ensure_schema(&self) -> Result<(), DomainError>;

    async fn insert(&self, row: NewPostRow) -> Result<i64, DomainError>;

    // newest `time` first, ties by `id` descending
    async fn query_all_ordered_by_time_desc(&self) -> Result<Vec<PostRow>, DomainError>;
}
