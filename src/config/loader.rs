use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::PricingConfig;
use super::validation::validate_config;
use crate::errors::{PricingError, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".vetroi.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read the raw contents of a config file
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<PricingConfig> {
    let config = toml::from_str::<PricingConfig>(contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load a config from an explicit path. Any failure is returned to the caller.
pub fn load_config_from_path(path: &Path) -> Result<PricingConfig> {
    let contents = read_config_file(path).map_err(|e| PricingError::io(path, e))?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded pricing config from {}", path.display());
    Ok(config)
}

/// Try a discovered config path; problems are logged and yield `None`.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<PricingConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded pricing config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using default pricing.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user pricing config, e.g. `~/.config/vetroi/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vetroi").join("config.toml"))
}

/// Discover a config starting at `start`: project ancestors first, then the
/// per-user file, then built-in defaults.
pub fn load_config_from(start: &Path) -> PricingConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No pricing config found after checking {} directories. Using defaults.",
                MAX_TRAVERSAL_DEPTH
            );
            PricingConfig::default()
        })
}

pub fn load_config() -> PricingConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default pricing.",
                e
            );
            PricingConfig::default()
        }
    }
}

/// Render the built-in defaults as a commented TOML document
pub fn default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&PricingConfig::default())?;
    Ok(format!(
        "# vetroi pricing configuration\n\
         # Amounts are whole currency units (PYG); rates are fractions.\n\n{body}"
    ))
}
