//! API error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use bobapp_core::JokeError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("joke provider failed: {0}")]
    Provider(#[from] JokeError),

    #[error("missing required query parameter `{0}`")]
    MissingParam(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Provider(err) => {
                tracing::error!("Failed to get a random joke: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            ApiError::MissingParam(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
        }
    }
}
