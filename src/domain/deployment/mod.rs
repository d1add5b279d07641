pub mod descriptor;
pub mod service;
