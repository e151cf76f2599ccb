//! File-based configuration loading

use std::fs;
use std::path::Path;
use tracing::debug;

use super::dispatcher_config::DispatcherConfig;
use crate::error::{ThicketError, ThicketResult};

/// Load configuration from a file
///
/// Supports TOML and JSON formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> ThicketResult<DispatcherConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(DispatcherConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ThicketError::io_with_path(format!("Failed to read config file: {}", e), path.display().to_string())
    })?;

    let config: DispatcherConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            ThicketError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            ThicketError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}

impl DispatcherConfig {
    /// Load from `path`, see [`load_from_file`]
    pub fn load(path: impl AsRef<Path>) -> ThicketResult<Self> {
        load_from_file(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnifiedError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("thicket.toml");
        let config_toml = r#"
max_suggestions = 8
error_context = 16
restricted_usage = false

[logging]
level = "debug"
format = "compact"
"#;
        fs::write(&config_path, config_toml).unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.max_suggestions, Some(8));
        assert_eq!(config.error_context, 16);
        assert!(!config.restricted_usage);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("thicket.json");
        fs::write(&config_path, r#"{"max_suggestions": 4, "logging": {"level": "warn"}}"#).unwrap();

        let config = DispatcherConfig::load(&config_path).unwrap();
        assert_eq!(config.max_suggestions, Some(4));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, DispatcherConfig::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "max_suggestions = [").unwrap();

        let error = load_from_file(&config_path).unwrap_err();
        assert_eq!(error.error_code(), "THICKET_CONFIG");
        assert!(error.to_string().contains("Failed to parse TOML config"));
        assert!(UnifiedError::context(&error).unwrap().contains("broken.toml"));
    }

    #[test]
    fn test_load_unreadable_path_reports_io() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("thicket.toml");
        fs::create_dir(&config_path).unwrap();

        let error = load_from_file(&config_path).unwrap_err();
        assert!(matches!(error, ThicketError::Io { .. }));
        assert_eq!(error.error_code(), "THICKET_IO");
        assert!(error.to_string().contains("Failed to read config file"));
        assert_eq!(UnifiedError::context(&error), Some(config_path.display().to_string().as_str()));
    }
}
