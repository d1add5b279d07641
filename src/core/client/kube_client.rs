use anyhow::{Context, Result};
use kube::{Client, Config};
use tracing::{debug, info};

/// Creates the Kubernetes client, once, at startup.
///
/// The service account mounted into the pod is required unless `dev_mode` is
/// set, in which case the usual kubeconfig/in-cluster inference applies.
pub async fn build_kube_client(dev_mode: bool) -> Result<Client> {
    let config = if dev_mode {
        debug!("Dev mode: inferring Kubernetes config (kubeconfig, then in-cluster)");
        Config::infer()
            .await
            .context("failed to infer Kubernetes configuration")?
    } else {
        debug!("Using in-cluster configuration");
        Config::incluster().context("failed to load in-cluster Kubernetes configuration")?
    };

    info!("Kubernetes API server: {}", config.cluster_url);

    let client = Client::try_from(config).context("failed to build Kubernetes client")?;

    debug!("Kubernetes client initialized successfully");
    Ok(client)
}
