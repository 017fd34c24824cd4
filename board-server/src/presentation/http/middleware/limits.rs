use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

pub(crate) fn apply_body_limit(router: Router, body_limit_bytes: usize) -> Router {
    router.layer(RequestBodyLimitLayer::new(body_limit_bytes))
}
