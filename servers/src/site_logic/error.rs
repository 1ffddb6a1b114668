use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lib_site::content::ArticleSeo;
use lib_site::forms::SubmitError;
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with. The `Display` text is what the
/// visitor sees.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("Your form session has expired. Please reload the page and try again.")]
    UnknownSession,
    #[error("The attached resume could not be read.")]
    BadResume(#[from] base64::DecodeError),
    #[error("Article not found")]
    PostNotFound(String),
    /// The form body was too large or not the expected JSON.
    #[error("Submission failed. Please try again.")]
    Body(#[from] JsonRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Submit(SubmitError::Blocked) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Submit(SubmitError::MissingResume) => StatusCode::BAD_REQUEST,
            AppError::Submit(SubmitError::Relay(_)) => StatusCode::BAD_GATEWAY,
            AppError::UnknownSession | AppError::BadResume(_) => StatusCode::BAD_REQUEST,
            AppError::PostNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Body(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Submit(SubmitError::Relay(source)) => {
                tracing::error!(error = %source, "form relay failed");
            }
            AppError::Body(rejection) => {
                tracing::warn!(status = status.as_u16(), error = %rejection.body_text(), "form body refused");
            }
            other => tracing::warn!(status = status.as_u16(), error = %other, "request rejected"),
        }

        let body = match &self {
            AppError::PostNotFound(slug) => json!({
                "error": self.to_string(),
                "seo": ArticleSeo::not_found(slug),
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
