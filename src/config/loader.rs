use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, RecipebookError};

/// Configuration file names to look for, in order
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Load site configuration from `config_file`, or the first default config
/// file found in `source_dir`, or defaults when there is none
pub fn load_config<P: AsRef<Path>>(source_dir: P, config_file: Option<PathBuf>) -> BoxResult<Config> {
    let source_dir = source_dir.as_ref();

    let config_path = match config_file {
        Some(path) => Some(path),
        None => find_default_config_file(source_dir),
    };

    let mut config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            read_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    // A relative `source` in the file is relative to the site root
    config.source = if config.source == Path::new(".") {
        source_dir.to_path_buf()
    } else if config.source.is_relative() {
        source_dir.join(&config.source)
    } else {
        config.source
    };

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

fn find_default_config_file(source_dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.join(name))
        .find(|path| path.is_file())
}

fn read_config_file(config_path: &Path) -> BoxResult<Config> {
    if !config_path.exists() {
        return Err(RecipebookError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| RecipebookError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension, YAML when there is none
    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    match ext.as_str() {
        "yml" | "yaml" => parse_yaml_config(&content, config_path),
        "toml" => parse_toml_config(&content, config_path),
        "json" => parse_json_config(&content, config_path),
        other => Err(RecipebookError::Config(format!(
            "Unsupported configuration file format: {}", other
        )).into()),
    }
}

/// Parse a YAML configuration file; an empty file means all defaults
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<Config> {
    let yaml_value = serde_yaml::from_str::<serde_yaml::Value>(content)
        .map_err(|e| RecipebookError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))?;

    if yaml_value.is_null() {
        return Ok(Config::default());
    }

    serde_yaml::from_value(yaml_value)
        .map_err(|e| RecipebookError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<Config> {
    toml::from_str(content)
        .map_err(|e| RecipebookError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<Config> {
    serde_json::from_str(content)
        .map_err(|e| RecipebookError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}
