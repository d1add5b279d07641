//! Deployment controller: connects routes to the deployment service

use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::deployment_dto::{CreateDeploymentResponse, DeploymentListResponse};
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct DeploymentController;

impl DeploymentController {
    pub async fn create_deployment(
        State(state): State<AppState>,
        Path(name): Path<String>,
    ) -> Result<Json<CreateDeploymentResponse>, AppError> {
        state
            .deployment_service
            .create_deployment(&name)
            .await
            .map_err(AppError::CreateDeployment)?;

        Ok(Json(CreateDeploymentResponse::created(&name)))
    }

    pub async fn list_deployments(
        State(state): State<AppState>,
    ) -> Result<Json<DeploymentListResponse>, AppError> {
        let deployments = state
            .deployment_service
            .list_deployments()
            .await
            .map_err(AppError::FetchDeployments)?;

        Ok(Json(DeploymentListResponse { deployments }))
    }
}
