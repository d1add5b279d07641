use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::core::client::remote_fault::RemoteFault;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error creating deployment: {0}")]
    CreateDeployment(RemoteFault),

    #[error("Error fetching deployments: {0}")]
    FetchDeployments(RemoteFault),

    #[error("Not Found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Remote faults are never classified further: all of them are client errors.
        let status = match self {
            AppError::CreateDeployment(_) => StatusCode::BAD_REQUEST,
            AppError::FetchDeployments(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}
