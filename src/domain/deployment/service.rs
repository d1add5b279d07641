use std::sync::Arc;

use tracing::{info, warn};

use crate::core::client::deployments::DeploymentApi;
use crate::core::client::remote_fault::RemoteFault;
use crate::domain::deployment::descriptor::{build_deployment, deployment_names, NAMESPACE};

/// Create and list Deployments in the gateway namespace.
///
/// Stateless apart from the injected client; every call is one round trip to
/// the cluster API with no retry.
#[derive(Clone)]
pub struct DeploymentService {
    api: Arc<dyn DeploymentApi>,
}

impl DeploymentService {
    pub fn new(api: Arc<dyn DeploymentApi>) -> Self {
        Self { api }
    }

    pub async fn create_deployment(&self, name: &str) -> Result<(), RemoteFault> {
        let deployment = build_deployment(name);

        match self.api.create_deployment(NAMESPACE, &deployment).await {
            Ok(_) => {
                info!("Deployment '{}' created in namespace '{}'", name, NAMESPACE);
                Ok(())
            }
            Err(fault) => {
                warn!("Creating deployment '{}' failed: {}", name, fault);
                Err(fault)
            }
        }
    }

    pub async fn list_deployments(&self) -> Result<Vec<String>, RemoteFault> {
        match self.api.list_deployments(NAMESPACE).await {
            Ok(items) => {
                let names = deployment_names(items);
                info!("Listed {} deployment(s) in namespace '{}'", names.len(), NAMESPACE);
                Ok(names)
            }
            Err(fault) => {
                warn!("Listing deployments failed: {}", fault);
                Err(fault)
            }
        }
    }
}
