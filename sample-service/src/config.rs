//! Environment-backed configuration.

use std::env;

/// Loads environment variables from a `.env` file if one exists.
///
/// Call this at startup before reading any configuration.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Gets an optional environment variable with a default value.
pub fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// The address the service binds to, from `SAMPLE_SERVICE_ADDR`.
pub fn bind_addr() -> String {
    get_env_or("SAMPLE_SERVICE_ADDR", "127.0.0.1:3000")
}
