use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::shell::context::DEFAULT_SEARCH_PATH;

pub const CONFIG_ENV: &str = "WISH_CONFIG";
pub const CONFIG_FILE: &str = "wish.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WishConfig {
    /// Initial search path; the `path` built-in replaces it at run time.
    pub path: Vec<String>,
    pub prompt: String,
    pub color: bool,
}

impl Default for WishConfig {
    fn default() -> Self {
        Self {
            path: vec![DEFAULT_SEARCH_PATH.to_string()],
            prompt: "wish> ".to_string(),
            color: true,
        }
    }
}

/// Loads the configuration.
///
/// `WISH_CONFIG` names the file explicitly and must be readable. Otherwise
/// `wish.toml` in `dir` is used when present, and defaults when it is not.
pub fn load_config(dir: &Path) -> Result<WishConfig> {
    if let Some(explicit) = env::var_os(CONFIG_ENV) {
        return read_config(&PathBuf::from(explicit));
    }

    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
        return Ok(WishConfig::default());
    }
    read_config(&config_path)
}

fn read_config(config_path: &Path) -> Result<WishConfig> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: WishConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    if config.path.is_empty() {
        warn!("{} sets an empty search path; no program will resolve until `path` is used", config_path.display());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = WishConfig::default();
        assert_eq!(config.path, vec!["/bin"]);
        assert_eq!(config.prompt, "wish> ");
        assert!(config.color);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(CONFIG_FILE);
        fs::write(&file, "path = [\"/usr/bin\", \"/bin\"]\n").unwrap();

        let config = read_config(&file).unwrap();
        assert_eq!(config.path, vec!["/usr/bin", "/bin"]);
        assert_eq!(config.prompt, "wish> ");
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(CONFIG_FILE);
        fs::write(&file, "path = []\nprompt = \"$ \"\ncolor = false\n").unwrap();

        let config = read_config(&file).unwrap();
        assert!(config.path.is_empty());
        assert_eq!(config.prompt, "$ ");
        assert!(!config.color);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(CONFIG_FILE);
        fs::write(&file, "path = 3\n").unwrap();

        assert!(read_config(&file).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_config(&dir.path().join("absent.toml")).is_err());
    }
}
