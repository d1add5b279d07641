//! In-memory `DeploymentApi` for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::client::deployments::DeploymentApi;
use crate::core::client::kube_resources::Deployment;
use crate::core::client::remote_fault::RemoteFault;

/// Mimics the API server: names are unique per namespace, lists come back in
/// creation order. `fail_with` makes every call return that fault.
#[derive(Default)]
pub struct MockDeploymentApi {
    namespaces: Mutex<HashMap<String, Vec<Deployment>>>,
    fail_with: Option<RemoteFault>,
}

impl MockDeploymentApi {
    pub fn failing(fault: RemoteFault) -> Self {
        Self {
            fail_with: Some(fault),
            ..Default::default()
        }
    }

    pub fn stored(&self, namespace: &str) -> Vec<Deployment> {
        self.namespaces
            .lock()
            .unwrap()
            .get(namespace)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DeploymentApi for MockDeploymentApi {
    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment, RemoteFault> {
        if let Some(fault) = &self.fail_with {
            return Err(fault.clone());
        }

        let name = deployment.metadata.name.clone().unwrap_or_default();
        let mut namespaces = self.namespaces.lock().unwrap();
        let items = namespaces.entry(namespace.to_string()).or_default();

        if items.iter().any(|d| d.metadata.name.as_deref() == Some(name.as_str())) {
            return Err(RemoteFault::status(
                409,
                "AlreadyExists",
                format!("deployments.apps \"{}\" already exists", name),
            ));
        }

        let mut created = deployment.clone();
        created.metadata.namespace = Some(namespace.to_string());
        items.push(created.clone());
        Ok(created)
    }

    async fn list_deployments(&self, namespace: &str) -> Result<Vec<Deployment>, RemoteFault> {
        if let Some(fault) = &self.fail_with {
            return Err(fault.clone());
        }
        Ok(self.stored(namespace))
    }
}
