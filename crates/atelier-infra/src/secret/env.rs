//! Environment variable API key loader.
//!
//! The key is read once at startup. A `.env` file in the working directory
//! (or any parent) is loaded first, without overriding variables that are
//! already set.

use secrecy::SecretString;

use atelier_types::error::ConfigError;

/// Environment variable holding the OpenAI API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Load `.env` if present, then read the API key from `var`.
///
/// # Errors
///
/// [`ConfigError::MissingApiKey`] when the variable is unset, blank, or not
/// valid Unicode.
pub fn load_api_key(var: &str) -> Result<SecretString, ConfigError> {
    if let Ok(path) = dotenv::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    read_api_key(var)
}

/// Read the API key from `var` without touching `.env`.
pub fn read_api_key(var: &str) -> Result<SecretString, ConfigError> {
    match std::env::var(var) {
        Ok(val) if !val.trim().is_empty() => Ok(SecretString::from(val.trim().to_string())),
        _ => Err(ConfigError::MissingApiKey {
            var: var.to_string(),
        }),
    }
}
