use crate::{CheckerConfig, ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &["prosecheck.toml", ".prosecheck.toml"];

/// Find a checker config file by walking up the directory tree from the
/// given start directory. Returns the path to the config file if found.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.exists() && config_path.is_file() {
                tracing::info!(path = %config_path.display(), checked_dirs, "Found config file");
                return Some(config_path);
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            break;
        }
    }

    None
}

/// Load a checker config from the specified path.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<CheckerConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents, path)
}

/// Load a checker config from a string.
/// The path is used for error messages.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<CheckerConfig> {
    let config: CheckerConfig = toml::from_str(contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!("Validating config");
    config.validate()?;

    tracing::info!(
        num_paras_to_check = config.num_paras_to_check,
        disabled = config.disabled_rules.len(),
        "Config loaded successfully"
    );
    Ok(config)
}
