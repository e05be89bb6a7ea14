//! Error handling for the Shelf HTTP layer

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::html::{document, escape};

/// Errors that end a request and render a full error page
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {message}")]
    NotFound { message: String, code: String },

    /// The books API answered with an error or could not be reached.
    #[error("upstream error: {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
        code: String,
    },
}

impl AppError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            code: "not_found".to_string(),
        }
    }

    /// Create an upstream error; `status` is the books API status when it answered
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
            code: "upstream_error".to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();
        let timestamp = OffsetDateTime::now_utc().to_string();
        let status = self.status_code();

        let (error_code, message) = match self {
            AppError::NotFound { message, code } => (code, message),
            AppError::Upstream {
                status: upstream_status,
                message,
                code,
            } => {
                tracing::warn!(upstream_status = ?upstream_status, "books API failure");
                (code, message)
            }
        };

        tracing::error!(
            error_id = %error_id,
            error_code = %error_code,
            status_code = %status.as_u16(),
            "Request error"
        );

        let title = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<main class=\"error-page\">\n<h1>{title}</h1>\n<p class=\"message\">{message}</p>\n\
             <p><a class=\"button\" href=\"/books\">Back to Book List</a></p>\n\
             <p><small>code: {code} &middot; trace id: {trace_id} &middot; {timestamp}</small></p>\n</main>",
            message = escape(&message),
            code = escape(&error_code),
            trace_id = error_id,
            timestamp = escape(&timestamp),
        );

        (status, Html(document(title, "", &body))).into_response()
    }
}
