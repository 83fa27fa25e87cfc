use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::collections::ContentDir;
use crate::config::defaults;
use crate::structured::SchemaSite;

/// Site configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site root; relative paths below are resolved against it
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Directory holding one sub-directory per collection
    #[serde(default = "defaults::default_content_dir")]
    pub content_dir: PathBuf,

    /// Collection names, each a sub-directory of `content_dir`
    #[serde(default = "defaults::default_collections")]
    pub collections: Vec<String>,

    /// Export directory
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Public base URL, used in JSON-LD
    #[serde(default = "defaults::default_site_url")]
    pub site_url: String,

    #[serde(default = "defaults::default_site_name")]
    pub site_name: String,

    /// Application named in FAQ questions
    #[serde(default = "defaults::default_product")]
    pub product: String,

    /// Tool listed on HowTo documents
    #[serde(default = "defaults::default_tool_name")]
    pub tool_name: String,

    /// ISO-8601 duration listed on HowTo documents
    #[serde(default = "defaults::default_total_time")]
    pub total_time: String,

    /// Maximum number of related entries
    #[serde(default = "defaults::default_related_limit")]
    pub related_limit: usize,

    /// Content file extensions, most preferred first
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            content_dir: defaults::default_content_dir(),
            collections: defaults::default_collections(),
            destination: defaults::default_destination(),
            site_url: defaults::default_site_url(),
            site_name: defaults::default_site_name(),
            product: defaults::default_product(),
            tool_name: defaults::default_tool_name(),
            total_time: defaults::default_total_time(),
            related_limit: defaults::default_related_limit(),
            extensions: defaults::default_extensions(),
        }
    }
}

impl Config {
    /// `content_dir` resolved against the site root
    pub fn content_root(&self) -> PathBuf {
        self.source.join(&self.content_dir)
    }

    /// `destination` resolved against the site root
    pub fn destination_dir(&self) -> PathBuf {
        self.source.join(&self.destination)
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.iter().any(|c| c == name)
    }

    /// Loader handle for one collection
    pub fn collection_dir(&self, name: &str) -> ContentDir {
        ContentDir::new(self.content_root().join(name), &self.extensions)
    }

    /// The first configured collection, used when a command names none
    pub fn default_collection(&self) -> &str {
        self.collections.first().map(String::as_str).unwrap_or(defaults::DEFAULT_COLLECTION)
    }

    pub fn schema_site<'a>(&'a self, collection: &'a str) -> SchemaSite<'a> {
        SchemaSite {
            site_url: &self.site_url,
            site_name: &self.site_name,
            collection,
            tool_name: &self.tool_name,
            total_time: &self.total_time,
        }
    }
}
