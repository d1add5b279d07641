//! API route declarations

pub mod deployment_routes;
