/// Re-export the Kubernetes resource types the gateway builds and reads.
/// Keeps the k8s-openapi paths in one place.

pub use k8s_openapi::api::core::v1::{
    Container as K8sContainer,
    ContainerPort,
    PodSpec,
    PodTemplateSpec,
};

pub use k8s_openapi::api::apps::v1::{
    Deployment,
    DeploymentSpec,
};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::{
    LabelSelector,
    ObjectMeta,
};
