use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BugError, Result};
use crate::models::SortKey;
use crate::sample::DEFAULT_TEAM;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "BUGTRACK_CONFIG";
/// Environment variable overriding `default_sort`
pub const SORT_ENV: &str = "BUGTRACK_SORT";
/// Environment variable disabling colored output when set to anything
pub const NO_COLOR_ENV: &str = "BUGTRACK_NO_COLOR";

/// User settings read from `~/.bugtrack.config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sort applied to the list when a front end starts
    pub default_sort: Option<SortKey>,
    /// Names offered as assignees on the log-bug form
    pub team: Vec<String>,
    /// Colored terminal output
    pub color: bool,
    /// env_logger filter used when RUST_LOG is not set
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: None,
            team: DEFAULT_TEAM.iter().map(|name| name.to_string()).collect(),
            color: true,
            log_level: None,
        }
    }
}

impl Config {
    /// Loads the config from the provided path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BugError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            BugError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Loads the config if the file exists, otherwise returns defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Applies overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(sort) = lookup(SORT_ENV) {
            self.default_sort = Some(sort.parse()?);
        }

        if lookup(NO_COLOR_ENV).is_some() {
            self.color = false;
        }

        Ok(())
    }

    /// Team roster, falling back to the default team when the file lists nobody
    pub fn team(&self) -> Vec<String> {
        if self.team.is_empty() {
            DEFAULT_TEAM.iter().map(|name| name.to_string()).collect()
        } else {
            self.team.clone()
        }
    }
}

/// Gets the path to the config file
pub fn get_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    // Check if BUGTRACK_CONFIG environment variable is set
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    // Default to ~/.bugtrack.config
    let home_dir = dirs::home_dir()
        .ok_or_else(|| BugError::Config("Failed to determine home directory".to_string()))?;

    Ok(home_dir.join(".bugtrack.config"))
}

/// Resolves, loads and env-overrides the config in one step
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = get_config_path(explicit)?;
    let mut config = Config::load_or_default(&path)?;
    config.apply_env()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("nope.config")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.team.len(), 4);
        assert!(config.color);
    }

    #[test]
    fn test_load_from_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bugtrack.config");
        fs::write(
            &path,
            "default_sort: title\nteam:\n  - Erin Vega\n  - Frank Ocean\ncolor: false\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_sort, Some(SortKey::Title));
        assert_eq!(config.team, vec!["Erin Vega", "Frank Ocean"]);
        assert!(!config.color);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bugtrack.config");
        fs::write(&path, "log_level: debug\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.team, Config::default().team);
        assert!(config.color);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bugtrack.config");
        fs::write(&path, "default_sort: assignee\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, BugError::Config(_)));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [(SORT_ENV, "status"), (NO_COLOR_ENV, "1")].into();
        let mut config = Config {
            default_sort: Some(SortKey::Title),
            ..Config::default()
        };

        config
            .apply_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.default_sort, Some(SortKey::Status));
        assert!(!config.color);
    }

    #[test]
    fn test_env_override_rejects_unknown_sort() {
        let mut config = Config::default();
        let result = config.apply_overrides(|name| {
            (name == SORT_ENV).then(|| "priority".to_string())
        });

        assert!(matches!(result, Err(BugError::Parse(_))));
    }

    #[test]
    fn test_empty_team_falls_back() {
        let config = Config {
            team: Vec::new(),
            ..Config::default()
        };
        assert_eq!(config.team().len(), 4);
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let path = get_config_path(Some(Path::new("/tmp/custom.config"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.config"));
    }
}
