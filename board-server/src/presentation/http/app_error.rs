use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::domain::error::DomainError;
use crate::presentation::render::RenderError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Domain(DomainError::Storage(_)) => {
                error!(error = %self, "storage failure while handling request");
            }
            // submissions swallow validation errors before they get here
            AppError::Domain(DomainError::Validation { .. }) => {
                error!(error = %self, "unexpected validation error at the http boundary");
            }
            AppError::Render(_) => {
                error!(error = %self, "failed to render feed");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}
