use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("goal {0} not found")]
    GoalNotFound(String),
    #[error("task {task_id} not found in goal {goal_id}")]
    TaskNotFound { goal_id: String, task_id: String },
    #[error("month must be between 0 and 11, got {0}")]
    InvalidMonth(u32),
    #[error("date key must be YYYY-MM-DD, got {0:?}")]
    InvalidDateKey(String),
    #[error("mood token must not be empty")]
    EmptyMoodToken,
    #[error("persistence unavailable: {0}")]
    Persistence(String),
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::GoalNotFound(_) | TrackerError::TaskNotFound { .. } => {
                Self::not_found(err.to_string())
            }
            TrackerError::InvalidMonth(_)
            | TrackerError::InvalidDateKey(_)
            | TrackerError::EmptyMoodToken => Self::bad_request(err.to_string()),
            TrackerError::Persistence(_) => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
