//! Request-level errors and their HTTP mapping.
//!
//! Upload and analysis failures never reach this type: handlers render them
//! into the page as notices or an empty results region.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use crate::workspace::WorkspaceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error("Malformed form data: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Missing form field: {0}")]
    MissingField(&'static str),
}

impl AppError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::Multipart(e) => e.status(),
            Self::Workspace(WorkspaceError::Busy(_)) => StatusCode::CONFLICT,
            Self::Workspace(WorkspaceError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(
            name: "request.rejected",
            status = status.as_u16(),
            error = %self,
            "Request rejected"
        );
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::from(WorkspaceError::Busy("a".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(WorkspaceError::NotFound("a".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MissingField("workspace_id").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_workspace_message_is_transparent() {
        let err = AppError::from(WorkspaceError::NotFound("abc".into()));
        assert_eq!(err.to_string(), "Workspace abc not found");
    }
}
