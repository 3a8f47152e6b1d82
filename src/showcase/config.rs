//! # Configuration
//!
//! Settings live in `config.json`, looked up in this order:
//!
//! 1. `$SHOWCASE_CONFIG_DIR`, when set
//! 2. `./.showcase/`, when it already holds a `config.json`
//! 3. The OS config directory (via the `directories` crate)
//!
//! A missing file means defaults. Writes go to the directory that was resolved.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `catalog` | *(built-in)* | Path to a JSON catalog used instead of the built-in one |
//! | `line-width` | `100` | Width of a rendered list line |

use crate::error::{Result, ShowcaseError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const PROJECT_DIR_NAME: &str = ".showcase";
const CONFIG_DIR_ENV: &str = "SHOWCASE_CONFIG_DIR";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 40;

pub const CONFIG_KEYS: &[&str] = &["catalog", "line-width"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ShowcaseConfig {
    /// Catalog file replacing the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl ShowcaseConfig {
    /// Load config from the given directory, or return defaults if not found.
    /// A hand-edited `line-width` below the minimum is raised to it.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        tracing::debug!(path = %config_path.display(), "loading config");
        let content = fs::read_to_string(&config_path)?;
        let mut config: ShowcaseConfig = serde_json::from_str(&content)?;
        if config.line_width < MIN_LINE_WIDTH {
            tracing::warn!(
                line_width = config.line_width,
                min = MIN_LINE_WIDTH,
                "line-width below minimum, clamping"
            );
            config.line_width = MIN_LINE_WIDTH;
        }
        Ok(config)
    }

    /// Save config to the given directory, creating it when needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Current value of `key` as displayed by `showcase config`.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "catalog" => Ok(self
                .catalog
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "line-width" => Ok(self.line_width.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Sets `key` from its string form. An empty `catalog` value unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog" => {
                self.catalog = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "line-width" => {
                let width: usize = value.parse().map_err(|_| {
                    ShowcaseError::Config(format!("line-width must be a number, got '{}'", value))
                })?;
                if width < MIN_LINE_WIDTH {
                    return Err(ShowcaseError::Config(format!(
                        "line-width must be at least {}",
                        MIN_LINE_WIDTH
                    )));
                }
                self.line_width = width;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ShowcaseError {
    ShowcaseError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

/// Picks the directory holding `config.json` for a run started in `cwd`.
pub fn resolve_config_dir(cwd: &Path) -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }

    let project_dir = cwd.join(PROJECT_DIR_NAME);
    if project_dir.join(CONFIG_FILENAME).exists() {
        return project_dir;
    }

    ProjectDirs::from("com", "showcase", "showcase")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or(project_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.line_width, 100);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ShowcaseConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let mut config = ShowcaseConfig::default();
        config.set("catalog", "/tmp/projects.json").unwrap();
        config.set("line-width", "80").unwrap();
        config.save(&nested).unwrap();

        let loaded = ShowcaseConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();
        let config = ShowcaseConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn test_load_clamps_narrow_line_width() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"line-width": 0}"#).unwrap();
        let config = ShowcaseConfig::load(dir.path()).unwrap();
        assert_eq!(config.line_width, MIN_LINE_WIDTH);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = ShowcaseConfig::default();
        assert!(config.set("line-width", "wide").is_err());
        assert!(config.set("line-width", "10").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn test_empty_catalog_unsets() {
        let mut config = ShowcaseConfig::default();
        config.set("catalog", "a.json").unwrap();
        assert_eq!(config.get("catalog").unwrap(), "a.json");
        config.set("catalog", "").unwrap();
        assert!(config.catalog.is_none());
        assert_eq!(config.get("catalog").unwrap(), "");
    }

    #[test]
    fn test_project_dir_wins_when_present() {
        // SHOWCASE_CONFIG_DIR is not set by the unit test harness.
        if std::env::var_os(CONFIG_DIR_ENV).is_some() {
            return;
        }
        let cwd = TempDir::new().unwrap();
        let project_dir = cwd.path().join(PROJECT_DIR_NAME);
        ShowcaseConfig::default().save(&project_dir).unwrap();
        assert_eq!(resolve_config_dir(cwd.path()), project_dir);
    }
}
