// Kube-rs based Kubernetes client
pub mod kube_client;
pub mod kube_resources;
pub mod deployments;
pub mod remote_fault;

#[cfg(test)]
pub mod mock_deployments;
