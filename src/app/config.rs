//! Tool configuration loading.

use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::config::{CONFIG_FILE_NAME, parse_config_content};
use crate::domain::{AppError, ToolConfig};

/// Load configuration from an explicit file, else from `<home>/.create-npm-package.toml`.
///
/// An explicit path must exist; the home file is optional and defaults apply when absent.
pub fn load_config(explicit: Option<&Path>, home: Option<&Path>) -> Result<ToolConfig, AppError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        debug!("loading config from {}", path.display());
        return parse_config_content(&fs::read_to_string(path)?);
    }

    if let Some(home) = home {
        let path = home.join(CONFIG_FILE_NAME);
        if path.is_file() {
            debug!("loading config from {}", path.display());
            return parse_config_content(&fs::read_to_string(&path)?);
        }
    }

    Ok(ToolConfig::default())
}
