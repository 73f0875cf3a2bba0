use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::criteria::{CriterionKind, CriterionModifier, CriterionType};

/// Rejected edits to a single criterion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriterionError {
    #[error("modifier {modifier} is not offered for {criterion_type}")]
    UnsupportedModifier {
        criterion_type: CriterionType,
        modifier: CriterionModifier,
    },
    #[error("value does not fit a {kind:?} criterion ({criterion_type})")]
    ValueShape {
        criterion_type: CriterionType,
        kind: CriterionKind,
    },
    #[error("invalid input {input:?} for {criterion_type}: {reason}")]
    InvalidInput {
        criterion_type: CriterionType,
        input: String,
        reason: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown criterion type: {0}")]
    UnknownCriterionType(String),
    #[error("Unknown filter mode: {0}")]
    UnknownFilterMode(String),
    #[error(transparent)]
    Criterion(#[from] CriterionError),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownCriterionType(_) | AppError::UnknownFilterMode(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Criterion(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Serialization(_) | AppError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_response(&self) -> (StatusCode, Json<serde_json::Value>) {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }
        (
            status,
            Json(json!({
                "error": self.to_string(),
                "status": status.as_u16().to_string(),
            })),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_response().into_response()
    }
}
