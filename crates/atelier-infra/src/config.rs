//! Configuration and profile file loaders for Atelier.
//!
//! Reads `atelier.toml` (or the path given with `--config`) and
//! deserializes it into [`AppConfig`]. Falls back to the stock settings
//! when the file is missing or malformed.

use std::path::Path;

use atelier_types::config::AppConfig;
use atelier_types::error::ConfigError;
use atelier_types::profile::StyleProfileForm;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "atelier.toml";

/// Load application configuration from `path`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_app_config(path: &Path) -> AppConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            AppConfig::default()
        }
    }
}

/// Read a style profile from a `.json` or `.toml` file.
///
/// The format is chosen by extension; anything other than `.json` is parsed
/// as TOML. The returned form still has to be validated.
pub async fn load_profile_form(path: &Path) -> Result<StyleProfileForm, ConfigError> {
    let profile_error = |message: String| ConfigError::ProfileFile {
        path: path.display().to_string(),
        message,
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| profile_error(e.to_string()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| profile_error(e.to_string()))
    } else {
        toml::from_str(&content).map_err(|e| profile_error(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_types::image::ImageSize;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_app_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_app_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).await;
        assert_eq!(config.text.model, "gpt-4-turbo");
        assert_eq!(config.image.item_count, 8);
    }

    #[tokio::test]
    async fn load_app_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(
            &config_path,
            r#"
request_timeout_secs = 60

[text]
model = "gpt-4o"
max_tokens = 2000

[image]
size = "1024x1792"
"#,
        )
        .await
        .unwrap();

        let config = load_app_config(&config_path).await;
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.text.model, "gpt-4o");
        assert_eq!(config.text.max_tokens, 2000);
        assert_eq!(config.image.size, ImageSize::Portrait);
        assert_eq!(config.image.model, "dall-e-3");
    }

    #[tokio::test]
    async fn load_app_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_app_config(&config_path).await;
        assert_eq!(config.text.max_tokens, 1500);
    }

    #[tokio::test]
    async fn load_profile_form_from_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("alex.toml");
        tokio::fs::write(
            &path,
            r#"
name = "Alex"
top_size = "M"
bottom_size = "28/30"
color_palette = ["neutrals", "Earth tones (olive, rust, brown)"]
"#,
        )
        .await
        .unwrap();

        let profile = load_profile_form(&path).await.unwrap().validate().unwrap();
        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.color_palette.len(), 2);
    }

    #[tokio::test]
    async fn load_profile_form_from_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("alex.json");
        tokio::fs::write(
            &path,
            r#"{"name": "Alex", "top_size": "s", "bottom_size": "30", "gender": "female"}"#,
        )
        .await
        .unwrap();

        let profile = load_profile_form(&path).await.unwrap().validate().unwrap();
        assert_eq!(profile.bottom_size, "30");
    }

    #[tokio::test]
    async fn load_profile_form_reports_path_on_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.toml");
        let err = load_profile_form(&path).await.unwrap_err();
        match err {
            ConfigError::ProfileFile { path: p, .. } => assert!(p.ends_with("missing.toml")),
            other => panic!("expected ProfileFile, got: {other}"),
        }
    }
}
