use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use super::deserializers::{deserialize_lenient_string, deserialize_tag_list};

/// Metadata block at the top of a content file.
///
/// Every recognised field is optional and decoded leniently; defaults are
/// applied by the collection loader, not here.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FrontMatter {
    /// Display title
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub title: Option<String>,

    /// Short summary
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub description: Option<String>,

    /// Publication date, in whatever form the author wrote it
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub date: Option<String>,

    /// Category labels
    #[serde(default, deserialize_with = "deserialize_tag_list")]
    pub tags: Option<Vec<String>>,

    /// Keys this crate does not interpret
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Create a new empty front matter
    pub fn new() -> Self {
        FrontMatter::default()
    }

    /// Whether the block carried none of the recognised keys
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.date.is_none() && self.tags.is_none()
    }
}
