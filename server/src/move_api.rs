use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct BoardRequest {
    pub board: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MoveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_move: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MoveResponse {
    pub fn found(best_move: usize) -> Self {
        Self {
            success: true,
            best_move: Some(best_move),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            best_move: None,
            message: Some(message.into()),
        }
    }
}

/// Failures surfaced at the HTTP boundary. `Internal` never carries details.
#[derive(Debug, Display, PartialEq)]
pub enum ApiError {
    #[display("{_0}")]
    InvalidRequest(String),
    #[display("Search timed out")]
    Timeout,
    #[display("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Timeout => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(MoveResponse::failure(self.to_string()))).into_response()
    }
}
