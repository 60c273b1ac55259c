// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod csv_export;
pub mod dataset_cache;
pub mod http_response;
