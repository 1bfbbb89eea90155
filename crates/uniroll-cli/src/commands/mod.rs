pub mod init;
pub mod run;
pub mod show;

use std::path::PathBuf;

use anyhow::Result;

use uniroll_core::config::load_config_from;

/// Pick the store path: an explicit `--data-file` wins, then the config
/// (file and environment), then the default.
pub fn resolve_data_file(data_file: Option<PathBuf>, config: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_file {
        return Ok(path);
    }
    let config = load_config_from(config.as_deref())?;
    Ok(config.data_file)
}
