use log::{debug, warn};

use crate::config::Config;
use crate::utils::error::{BoxResult, RecipebookError};
use crate::utils::{fs, path};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_source_directory(config)?;
    validate_content_dir(config)?;
    validate_extensions(config)?;
    validate_site_url(config)?;
    validate_collections(config)?;
    Ok(())
}

fn validate_source_directory(config: &Config) -> BoxResult<()> {
    let source = &config.source;

    if !fs::is_directory(source) {
        return Err(RecipebookError::Config(format!(
            "Source directory does not exist: {}", source.display()
        )).into());
    }

    debug!("Source directory: {}", source.display());
    Ok(())
}

fn validate_content_dir(config: &Config) -> BoxResult<()> {
    if config.content_dir.as_os_str().is_empty() {
        return Err(RecipebookError::Config("content_dir must not be empty".to_string()).into());
    }

    // A missing content directory only means empty collections
    let root = config.content_root();
    if !fs::is_directory(&root) {
        warn!("Content directory does not exist: {}", root.display());
    }
    Ok(())
}

fn validate_extensions(config: &Config) -> BoxResult<()> {
    if config.extensions.is_empty() {
        return Err(RecipebookError::Config("extensions must not be empty".to_string()).into());
    }

    for ext in &config.extensions {
        if ext.is_empty() || ext.starts_with('.') {
            return Err(RecipebookError::Config(format!(
                "Invalid extension '{}': give it without a leading dot", ext
            )).into());
        }
    }
    Ok(())
}

fn validate_site_url(config: &Config) -> BoxResult<()> {
    let url = &config.site_url;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(RecipebookError::Config(format!(
            "site_url must start with http:// or https://: {}", url
        )).into());
    }
    Ok(())
}

fn validate_collections(config: &Config) -> BoxResult<()> {
    if config.collections.is_empty() {
        warn!("No collections configured");
    }

    for name in &config.collections {
        if !path::is_url_safe(name) {
            return Err(RecipebookError::Config(format!(
                "Collection name '{}' is not URL-safe", name
            )).into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        Config { source: dir.path().to_path_buf(), ..Config::default() }
    }

    #[test]
    fn test_defaults_are_valid() {
        let dir = TempDir::new().unwrap();
        assert!(validate_config(&config_in(&dir)).is_ok());
    }

    #[test]
    fn test_missing_source_is_error() {
        let config = Config { source: PathBuf::from("/definitely/not/here"), ..Config::default() };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejected_values() {
        let dir = TempDir::new().unwrap();

        let config = Config { content_dir: PathBuf::new(), ..config_in(&dir) };
        assert!(validate_config(&config).is_err());

        let config = Config { extensions: Vec::new(), ..config_in(&dir) };
        assert!(validate_config(&config).is_err());

        let config = Config { site_url: "excel-cookbook.com".to_string(), ..config_in(&dir) };
        assert!(validate_config(&config).is_err());

        let config = Config { collections: vec!["My Recipes".to_string()], ..config_in(&dir) };
        assert!(validate_config(&config).is_err());
    }
}
