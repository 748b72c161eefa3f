mod api_config;
mod config;
mod error;
mod logging_config;
mod storage_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_STORAGE_FILENAME: &str = "storage.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
