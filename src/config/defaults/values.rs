use std::path::PathBuf;

use crate::collections::DEFAULT_EXTENSIONS;

/// Collection used when none is configured or named
pub const DEFAULT_COLLECTION: &str = "recipes";

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default content directory
pub fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

/// Default collections
pub fn default_collections() -> Vec<String> {
    vec![DEFAULT_COLLECTION.to_string(), "insights".to_string()]
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("_site")
}

/// Default public URL
pub fn default_site_url() -> String {
    "https://excel-cookbook.com".to_string()
}

/// Default site name
pub fn default_site_name() -> String {
    "Excel Cookbook".to_string()
}

/// Default product named in questions
pub fn default_product() -> String {
    crate::structured::DEFAULT_PRODUCT.to_string()
}

/// Default HowTo tool
pub fn default_tool_name() -> String {
    "Microsoft Excel".to_string()
}

/// Default HowTo duration
pub fn default_total_time() -> String {
    "PT5M".to_string()
}

/// Default related-entry count
pub fn default_related_limit() -> usize {
    3
}

/// Default content extensions
pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}
