// Application layer - Use cases over the domain
pub mod dashboard_service;
pub mod dataset_source;
pub mod generator;
