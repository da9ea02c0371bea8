//! Layered application configuration.
//!
//! Sources are merged in this order, later ones winning:
//! 1) built-in defaults -> 2) YAML file (if provided) -> 3) env (`HWINFO__*`)
//! -> 4) CLI overrides.

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use hwinfo_node_info::{Component, DEFAULT_DMI_ENTRIES_DIR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment variables; `__` separates nested keys
pub const ENV_PREFIX: &str = "HWINFO__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub dmi: DmiConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    /// Components included in the report
    #[serde(default = "default_components")]
    pub components: Vec<Component>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dmi: DmiConfig::default(),
            logging: LoggingConfig::default(),
            output: OutputConfig::default(),
            components: default_components(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DmiConfig {
    /// Directory holding one sub-directory per DMI structure
    pub entries_dir: PathBuf,
}

impl Default for DmiConfig {
    fn default() -> Self {
        Self {
            entries_dir: PathBuf::from(DEFAULT_DMI_ENTRIES_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when neither `RUST_LOG` nor `-v` is given
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print the JSON report
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn default_components() -> Vec<Component> {
    Component::ALL.to_vec()
}

fn default_log_level() -> String {
    "warn".to_owned()
}

/// Command line values that take precedence over every other source
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dmi_entries: Option<PathBuf>,
    pub components: Option<Vec<Component>>,
    pub pretty: Option<bool>,
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then `HWINFO__*` variables.
    ///
    /// # Errors
    ///
    /// Fails if the given file does not exist or any source cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dir) = overrides.dmi_entries {
            self.dmi.entries_dir = dir;
        }
        if let Some(components) = overrides.components {
            self.components = components;
        }
        if let Some(pretty) = overrides.pretty {
            self.output.pretty = pretty;
        }
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ENV_KEYS: [&str; 3] = [
        "HWINFO__DMI__ENTRIES_DIR",
        "HWINFO__LOGGING__LEVEL",
        "HWINFO__OUTPUT__PRETTY",
    ];

    fn without_env<R>(f: impl FnOnce() -> R) -> R {
        temp_env::with_vars_unset(ENV_KEYS, f)
    }

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("hwinfo.yaml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = without_env(|| AppConfig::load(None).unwrap());

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dmi.entries_dir, Path::new("/sys/firmware/dmi/entries"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.output.pretty);
        assert_eq!(config.components, vec![Component::Cpu, Component::Memory]);
    }

    #[test]
    fn test_yaml_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r"
dmi:
  entries_dir: /tmp/dmi
logging:
  format: json
components: [memory]
",
        );

        let config = without_env(|| AppConfig::load(Some(&path)).unwrap());
        assert_eq!(config.dmi.entries_dir, Path::new("/tmp/dmi"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.components, vec![Component::Memory]);
    }

    #[test]
    fn test_env_overrides_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "logging:\n  level: info\n");

        let config = temp_env::with_vars(
            [
                ("HWINFO__LOGGING__LEVEL", Some("debug")),
                ("HWINFO__OUTPUT__PRETTY", Some("false")),
                ("HWINFO__DMI__ENTRIES_DIR", None),
            ],
            || AppConfig::load(Some(&path)).unwrap(),
        );

        assert_eq!(config.logging.level, "debug");
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = temp_env::with_vars(
            [
                ("HWINFO__DMI__ENTRIES_DIR", Some("/from/env")),
                ("HWINFO__LOGGING__LEVEL", None),
                ("HWINFO__OUTPUT__PRETTY", None),
            ],
            || AppConfig::load(None).unwrap(),
        );
        assert_eq!(config.dmi.entries_dir, Path::new("/from/env"));

        config.apply_cli_overrides(CliOverrides {
            dmi_entries: Some(PathBuf::from("/from/cli")),
            components: Some(vec![Component::Cpu]),
            pretty: Some(false),
        });
        assert_eq!(config.dmi.entries_dir, Path::new("/from/cli"));
        assert_eq!(config.components, vec![Component::Cpu]);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/hwinfo.yaml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "dmi:\n  entries: /tmp\n");
        assert!(without_env(|| AppConfig::load(Some(&path))).is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("entries_dir"));

        let parsed: AppConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
