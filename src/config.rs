//! Discipline configuration.
//!
//! Loaded from `~/.discipline/config.toml`. Every key is optional and a
//! missing file means defaults:
//!
//! ```toml
//! data-file = "/home/me/discipline.json"
//! actions = ["Sport", "Travail", "Étude", "Projet perso"]
//! ```

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::storage::Store;

/// Environment variable overriding the state file location.
pub const DATA_ENV: &str = "DISCIPLINE_DATA";

/// Action categories offered when the config doesn't list any.
pub const DEFAULT_ACTIONS: [&str; 4] = ["Sport", "Travail", "Étude", "Projet perso"];

/// Discipline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Where the state file lives. Defaults to `~/.discipline/data.json`.
    pub data_file: Option<PathBuf>,

    /// The fixed set of action categories a user can record.
    pub actions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            actions: DEFAULT_ACTIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Load config from `~/.discipline/config.toml`, or defaults if absent.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        Self::parse(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// Parse and validate config contents.
    pub fn parse(contents: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(contents).map_err(|e| e.to_string())?;

        if config.actions.is_empty() {
            return Err("actions must list at least one category".to_string());
        }
        if config.actions.iter().any(|a| a.trim().is_empty()) {
            return Err("action names must not be empty".to_string());
        }

        Ok(config)
    }

    /// The config file path: `~/.discipline/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".discipline").join("config.toml"))
    }

    /// Resolve the state file location.
    ///
    /// Checks in order: explicit `--data` value, `DISCIPLINE_DATA`,
    /// `data-file` from the config, then the default under the home directory.
    pub fn data_file(&self, explicit: Option<&Path>) -> Result<PathBuf, String> {
        let from_env = env::var_os(DATA_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_data_file(explicit, from_env)
    }

    fn resolve_data_file(
        &self,
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
    ) -> Result<PathBuf, String> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = from_env {
            return Ok(path);
        }
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }
        Store::default_path().ok_or_else(|| "could not determine home directory".to_string())
    }

    /// Whether `name` is one of the configured categories.
    pub fn is_known_action(&self, name: &str) -> bool {
        self.actions.iter().any(|a| a == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn defaults_offer_the_standard_actions() {
        let config = Config::default();
        assert_eq!(config.actions, DEFAULT_ACTIONS);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn empty_file_means_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::parse(
            r#"
data-file = "/tmp/discipline.json"
actions = ["Lecture", "Course"]
"#,
        )
        .unwrap();

        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/discipline.json")));
        assert_eq!(config.actions, ["Lecture", "Course"]);
    }

    #[test]
    fn rejects_empty_action_list() {
        let err = Config::parse("actions = []").unwrap_err();
        assert!(err.contains("at least one"));
    }

    #[test]
    fn rejects_blank_action_name() {
        assert!(Config::parse(r#"actions = ["Sport", " "]"#).is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::parse("streak = 4").is_err());
    }

    #[test]
    fn load_missing_file_means_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "actions = 3").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.contains("config.toml"));
    }

    #[test]
    fn explicit_data_file_wins() {
        let config = Config {
            data_file: Some(PathBuf::from("/from/config.json")),
            ..Config::default()
        };
        let path = config
            .resolve_data_file(
                Some(Path::new("/from/flag.json")),
                Some(PathBuf::from("/from/env.json")),
            )
            .unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn env_data_file_beats_config() {
        let config = Config {
            data_file: Some(PathBuf::from("/from/config.json")),
            ..Config::default()
        };
        let path = config
            .resolve_data_file(None, Some(PathBuf::from("/from/env.json")))
            .unwrap();
        assert_eq!(path, PathBuf::from("/from/env.json"));
    }

    #[test]
    fn config_data_file_beats_default() {
        let config = Config {
            data_file: Some(PathBuf::from("/from/config.json")),
            ..Config::default()
        };
        let path = config.resolve_data_file(None, None).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn known_actions_are_exact_matches() {
        let config = Config::default();
        assert!(config.is_known_action("Étude"));
        assert!(!config.is_known_action("etude"));
        assert!(!config.is_known_action(""));
    }
}
