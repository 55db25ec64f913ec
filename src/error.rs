use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const QUOTA_EXCEEDED_MESSAGE: &str =
    "Maximum number of requests reached. Please sign in or create an account to continue.";

// JSON error body: `{"error": "..."}`
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Everything that can turn a leaderboard request into an error response
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{}", QUOTA_EXCEEDED_MESSAGE)]
    QuotaExceeded,

    // Upstream answered with a non-200 status; both are passed through verbatim
    #[error("Failed to fetch data: {status}, {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to fetch data: {reason}")]
    Transport { reason: String, timed_out: bool },

    #[error("Malformed upstream entry at index {index}: missing {field}")]
    MalformedUpstream { index: usize, field: &'static str },

    // 200 body without a top-level `data` array
    #[error("Malformed upstream response: missing data")]
    MissingData,

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            GatewayError::Transport { timed_out: true, .. } => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Transport { .. } => StatusCode::BAD_GATEWAY,
            GatewayError::MalformedUpstream { .. } | GatewayError::MissingData => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport {
            timed_out: err.is_timeout(),
            reason: err.to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
