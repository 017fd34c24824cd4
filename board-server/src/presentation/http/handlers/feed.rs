use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::error::DomainError;
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;

pub(crate) const INVALID_METHOD_MESSAGE: &str = "Invalid HTTP method!\n";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SubmitPostForm {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) content: String,
}

pub(crate) async fn show_feed(State(state): State<AppState>) -> AppResult<Html<String>> {
    let posts = state.posts.list_all().await?;
    let count = posts.len();

    let view = state.projector.project(posts);
    let page = state.renderer.render(&view)?;

    debug!(count, "feed rendered");
    Ok(Html(page))
}

/// Always answers `303 See Other` to `/`; rejected submissions are only logged.
pub(crate) async fn submit_post(
    State(state): State<AppState>,
    form: Result<Form<SubmitPostForm>, FormRejection>,
) -> AppResult<Redirect> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable submission body");
            SubmitPostForm::default()
        }
    };

    match state.posts.create(&form.name, &form.content).await {
        Ok(()) => {}
        Err(DomainError::Validation { field, message }) => {
            info!(field, reason = message, "submission dropped");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(Redirect::to("/"))
}

pub(crate) async fn invalid_method() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, HEAD, POST")],
        INVALID_METHOD_MESSAGE,
    )
}
