mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod view_config;


pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use view_config::ViewConfig;

const CONFIG_DIR_ENV: &str = "UL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ul";
const CONFIG_FILE_NAME: &str = "config.toml";

// API
const DEFAULT_API_ENDPOINT: &str = "https://randomuser.me/api";
const DEFAULT_RESULTS: usize = 100;
const MIN_RESULTS: usize = 1;
const MAX_RESULTS: usize = 5000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
