pub mod api_client;
pub mod config;
pub mod storage;

pub use api_client::ApiClientError;
pub use config::ConfigError;
pub use storage::StorageError;
