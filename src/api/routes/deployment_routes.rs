//! Deployment routes (/createDeployment/{name}, /deployments)

use axum::{routing::{get, post}, Router};
use crate::api::controller::deployment::DeploymentController;
use crate::app_state::AppState;

pub fn deployment_routes() -> Router<AppState> {
    Router::new()
        .route("/createDeployment/{name}", post(DeploymentController::create_deployment))
        .route("/deployments", get(DeploymentController::list_deployments))
}
