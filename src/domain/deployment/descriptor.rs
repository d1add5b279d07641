use std::collections::BTreeMap;

use crate::core::client::kube_resources::{
    ContainerPort, Deployment, DeploymentSpec, K8sContainer, LabelSelector, ObjectMeta, PodSpec,
    PodTemplateSpec,
};

/// All gateway operations happen in this namespace.
pub const NAMESPACE: &str = "default";

pub const REPLICAS: i32 = 1;
pub const CONTAINER_NAME: &str = "nginx";
pub const CONTAINER_IMAGE: &str = "nginx:latest";
pub const CONTAINER_PORT: i32 = 80;

/// Label key shared by the selector and the pod template.
pub const APP_LABEL: &str = "app";

/// Builds the Deployment submitted for `name`: one replica of the fixed
/// container, selected by `app=<name>`.
pub fn build_deployment(name: &str) -> Deployment {
    let labels = BTreeMap::from([(APP_LABEL.to_string(), name.to_string())]);

    Deployment {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(REPLICAS),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![K8sContainer {
                        name: CONTAINER_NAME.to_string(),
                        image: Some(CONTAINER_IMAGE.to_string()),
                        ports: Some(vec![ContainerPort {
                            container_port: CONTAINER_PORT,
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Names in the order the API server listed them; unnamed items are skipped.
pub fn deployment_names(deployments: Vec<Deployment>) -> Vec<String> {
    deployments
        .into_iter()
        .filter_map(|d| d.metadata.name)
        .collect()
}
