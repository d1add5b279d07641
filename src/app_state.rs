use std::sync::Arc;

use kube::Client;

use crate::core::client::deployments::{DeploymentApi, KubeDeploymentApi};
use crate::domain::deployment::service::DeploymentService;

/// Shared, read-only handler state. Built once at startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub deployment_service: Arc<DeploymentService>,
}

pub fn build_app_state(client: Client) -> AppState {
    build_app_state_with_api(Arc::new(KubeDeploymentApi::new(client)))
}

pub fn build_app_state_with_api(api: Arc<dyn DeploymentApi>) -> AppState {
    AppState {
        deployment_service: Arc::new(DeploymentService::new(api)),
    }
}
