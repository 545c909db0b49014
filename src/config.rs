//! Configuration file support for alertrow.
//!
//! Provides YAML-based configuration through `alertrow.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::{SensuClientOptions, DEFAULT_TIMEOUT};
use crate::alert_view::policies::{KeepStripFilter, VisibilityPolicy};
use crate::application::dto::OutputFormat;
use crate::shared::security::{ensure_readable_file, MAX_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "alertrow.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub show_alertmanagers: Option<bool>,
    pub show_receiver: Option<bool>,
    #[serde(default)]
    pub labels: KeepStripFilter,
    #[serde(default)]
    pub annotations: KeepStripFilter,
    #[serde(default)]
    pub receivers: KeepStripFilter,
    #[serde(default)]
    pub sensu: Vec<SensuUpstreamConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One Sensu upstream to pull events from.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SensuUpstreamConfig {
    pub name: String,
    pub uri: String,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub namespaces: Vec<String>,
    #[serde(default)]
    pub event_limit: usize,
}

impl SensuUpstreamConfig {
    pub fn to_client_options(&self) -> SensuClientOptions {
        SensuClientOptions {
            name: self.name.clone(),
            uri: self.uri.clone(),
            timeout: self.timeout.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT),
            username: self.username.clone(),
            password: self.password.clone(),
            namespaces: self.namespaces.clone(),
            event_limit: self.event_limit,
        }
    }
}

impl ConfigFile {
    pub fn visibility_policy(&self) -> VisibilityPolicy {
        VisibilityPolicy {
            labels: self.labels.clone(),
            annotations: self.annotations.clone(),
            receivers: self.receivers.clone(),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    ensure_readable_file(path, "config file", MAX_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let mut names = HashSet::new();
    for (i, upstream) in config.sensu.iter().enumerate() {
        if upstream.name.trim().is_empty() {
            bail!(
                "Invalid config: sensu[{}].name must not be empty.\n\n\
                 💡 Hint: Each sensu entry needs a unique 'name' (e.g., \"prod\").",
                i
            );
        }
        if upstream.uri.trim().is_empty() {
            bail!(
                "Invalid config: sensu[{}].uri must not be empty.\n\n\
                 💡 Hint: Set 'uri' to the Sensu API address (e.g., \"https://sensu.example.com:8080\").",
                i
            );
        }
        if upstream.timeout == Some(0) {
            bail!(
                "Invalid config: sensu[{}].timeout must be greater than 0.\n\n\
                 💡 Hint: Remove the field to use the default of {} seconds.",
                i,
                DEFAULT_TIMEOUT.as_secs()
            );
        }
        if !names.insert(upstream.name.as_str()) {
            bail!(
                "Invalid config: sensu upstream name '{}' is used more than once.",
                upstream.name
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: json
show_alertmanagers: true
show_receiver: false
labels:
  strip: [instance]
receivers:
  keep: [ops]
sensu:
  - name: prod
    uri: https://sensu.example.com:8080
    timeout: 5
    username: admin
    password: secret
    namespaces: [default, infra]
    event_limit: 500
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.show_alertmanagers, Some(true));
        assert_eq!(config.show_receiver, Some(false));
        assert_eq!(config.labels.strip, vec!["instance"]);
        assert!(config.annotations.keep.is_empty());

        let policy = config.visibility_policy();
        assert!(!policy.allows_receiver("null"));
        assert!(policy.allows_receiver("ops"));

        let options = config.sensu[0].to_client_options();
        assert_eq!(options.name, "prod");
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.namespaces, vec!["default", "infra"]);
        assert_eq!(options.event_limit, 500);
        assert_eq!(options.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_default_timeout() {
        let upstream = SensuUpstreamConfig {
            name: "prod".to_string(),
            uri: "https://sensu:8080".to_string(),
            ..Default::default()
        };
        assert_eq!(upstream.to_client_options().timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: markdown\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format, Some(OutputFormat::Markdown));
        assert!(config.sensu.is_empty());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: html\n");
        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_empty_sensu_name_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
sensu:
  - name: ""
    uri: https://sensu:8080
"#,
        );
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("sensu[0].name must not be empty"));
    }

    #[test]
    fn test_zero_timeout_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
sensu:
  - name: prod
    uri: https://sensu:8080
    timeout: 0
"#,
        );
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("timeout must be greater than 0"));
    }

    #[test]
    fn test_duplicate_sensu_names_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
sensu:
  - name: prod
    uri: https://a:8080
  - name: prod
    uri: https://b:8080
"#,
        );
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("'prod' is used more than once"));
    }

    #[test]
    fn test_unknown_fields_are_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: json\ncheck_cve: true\n");
        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("check_cve"));
    }
}
