pub mod deployment_dto;
