//! uniroll configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_DATA_FILE;

/// Environment variable overriding [`UnirollConfig::data_file`].
pub const DATA_FILE_ENV: &str = "UNIROLL_DATA_FILE";

/// Config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "uniroll.toml";

/// Top-level uniroll configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnirollConfig {
    /// Path of the JSON student store.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for UnirollConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
/// Unset variables expand to the empty string. Substituted values are
/// copied verbatim, never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the well-known locations.
///
/// Search order without an explicit path:
/// 1. `uniroll.toml` in the current directory
/// 2. `~/.config/uniroll/config.toml`
///
/// `UNIROLL_DATA_FILE` overrides whatever the file says.
pub fn load_config_from(path: Option<&Path>) -> Result<UnirollConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(LOCAL_CONFIG_FILE);
            if local.exists() {
                Some(local)
            } else {
                global_config_path().filter(|p| p.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => UnirollConfig::default(),
    };

    if let Ok(data_file) = std::env::var(DATA_FILE_ENV) {
        if !data_file.is_empty() {
            config.data_file = PathBuf::from(data_file);
        }
    }

    Ok(config)
}

/// Parse a TOML config string, expanding `${VAR}` references.
pub fn parse_config(content: &str) -> Result<UnirollConfig> {
    let mut config: UnirollConfig = toml::from_str(content)?;
    let resolved = resolve_env_vars(&config.data_file.to_string_lossy());
    config.data_file = PathBuf::from(resolved);
    Ok(config)
}

fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|h| {
        PathBuf::from(h)
            .join(".config")
            .join("uniroll")
            .join("config.toml")
    })
}
