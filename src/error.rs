use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Why a signup or removal was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Participant not found")]
    ParticipantNotFound,
}

impl ActivityError {
    /// Duplicate signups and removals of non-members are client mistakes,
    /// not missing resources.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(
            self,
            ActivityError::AlreadySignedUp | ActivityError::ParticipantNotFound
        )
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Activity(#[from] ActivityError),

    #[error("Query parameter 'email' is required")]
    MissingEmail,

    #[error("{0}")]
    InvalidPath(String),

    #[error("{0}")]
    InvalidQuery(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Activity(ActivityError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Activity(_) | ApiError::InvalidPath(_) | ApiError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
