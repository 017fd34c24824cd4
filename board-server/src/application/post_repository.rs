use tracing::info;

use super::clock::{Clock, SystemClock};
use crate::data::post_store::{NewPostRow, PostRow, PostStore};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostDraft};

pub(crate) struct PostRepository<S: PostStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
}

impl<S: PostStore> PostRepository<S> {
    pub(crate) fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: PostStore, C: Clock> PostRepository<S, C> {
    pub(crate) fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub(crate) async fn ensure_schema(&self) -> Result<(), DomainError> {
        self.store.ensure_schema().await
    }

    pub(crate) async fn create(&self, name: &str, content: &str) -> Result<(), DomainError> {
        let draft = PostDraft::new(name, content)?;
        let row = NewPostRow {
            name: draft.name,
            content: draft.content,
            time: self.clock.now_unix_seconds(),
        };
        let created_at = row.time;

        let id = self.store.insert(row).await?;
        info!(post_id = id, created_at, "post created");
        Ok(())
    }

    pub(crate) async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        let rows = self.store.query_all_ordered_by_time_desc().await?;
        Ok(rows.into_iter().map(Post::from).collect())
    }
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            content: row.content,
            created_at: row.time,
        }
    }
}
