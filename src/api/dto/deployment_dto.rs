use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CreateDeploymentResponse {
    pub message: String,
}

impl CreateDeploymentResponse {
    pub fn created(name: &str) -> Self {
        Self {
            message: format!("Deployment '{}' created successfully.", name),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DeploymentListResponse {
    pub deployments: Vec<String>,
}
