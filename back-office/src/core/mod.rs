//! Core module - configuration and environment setup
//!
//! - [`Config`] - back-office configuration

pub mod config;

pub use config::Config;

/// Load `.env`, initialize logging, then read the configuration
///
/// The logger comes up first so that fallbacks chosen while parsing the
/// configuration are logged.
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_json = std::env::var("LOG_JSON").ok().and_then(|v| v.parse().ok());
    let log_dir = std::env::var("LOG_DIR").ok();
    crate::utils::logger::init_logger_with_file(
        log_level.as_deref(),
        log_json,
        log_dir.as_deref(),
    );
    Config::from_env()
}
