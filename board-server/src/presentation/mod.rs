use std::sync::Arc;

use crate::application::post_repository::PostRepository;
use crate::application::view_projector::ViewProjector;
use crate::data::repositories::sqlite::post_store::SqlitePostStore;

pub(crate) mod http;
pub(crate) mod http_handlers;
pub(crate) mod render;

use render::FeedRenderer;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) posts: Arc<PostRepository<SqlitePostStore>>,
    pub(crate) projector: Arc<ViewProjector>,
    pub(crate) renderer: Arc<dyn FeedRenderer>,
}

impl AppState {
    pub(crate) fn new(
        posts: Arc<PostRepository<SqlitePostStore>>,
        projector: Arc<ViewProjector>,
        renderer: Arc<dyn FeedRenderer>,
    ) -> Self {
        Self {
            posts,
            projector,
            renderer,
        }
    }
}
