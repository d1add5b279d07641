use async_trait::async_trait;
use kube::api::{ListParams, PostParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Deployment;
use crate::core::client::remote_fault::RemoteFault;

/// The two Deployment calls the gateway makes against the cluster API.
#[async_trait]
pub trait DeploymentApi: Send + Sync {
    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment, RemoteFault>;

    async fn list_deployments(&self, namespace: &str) -> Result<Vec<Deployment>, RemoteFault>;
}

/// `DeploymentApi` backed by a kube-rs client.
#[derive(Clone)]
pub struct KubeDeploymentApi {
    client: Client,
}

impl KubeDeploymentApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeploymentApi for KubeDeploymentApi {
    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment, RemoteFault> {
        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        let created = deployments.create(&PostParams::default(), deployment).await?;

        debug!(
            "Created deployment {}/{}",
            namespace,
            created.metadata.name.as_deref().unwrap_or_default()
        );
        Ok(created)
    }

    async fn list_deployments(&self, namespace: &str) -> Result<Vec<Deployment>, RemoteFault> {
        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        let deployment_list = deployments.list(&ListParams::default()).await?;

        debug!(
            "Discovered {} deployment(s) in namespace '{}'",
            deployment_list.items.len(),
            namespace
        );
        Ok(deployment_list.items)
    }
}
