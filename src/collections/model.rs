use std::fmt;
use chrono::NaiveDate;
use serde::Serialize;

/// Listing view of an entry: everything except the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryMeta {
    /// Identifier derived from the file name; also the URL segment
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Publication date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub tags: Vec<String>,
}

/// One published content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(flatten)]
    pub meta: EntryMeta,
    /// Body text with the metadata block removed
    pub content: String,
}

impl Entry {
    pub fn slug(&self) -> &str {
        &self.meta.slug
    }

    /// Drop the body, keeping the listing fields
    pub fn into_meta(self) -> EntryMeta {
        self.meta
    }
}

/// A recoverable problem noticed while building an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryIssue {
    /// The metadata block could not be split or decoded; defaults were used
    MalformedMetadata(String),
    /// No usable title; the upper-cased slug was used
    MissingTitle,
    /// A date was present but not recognised; today's date was used
    UnparseableDate(String),
}

impl fmt::Display for EntryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryIssue::MalformedMetadata(msg) => write!(f, "malformed metadata ({}), using defaults", msg),
            EntryIssue::MissingTitle => write!(f, "no title found, using the slug"),
            EntryIssue::UnparseableDate(raw) => write!(f, "unrecognised date {:?}, using today", raw),
        }
    }
}

/// An entry together with the issues recovered while building it
#[derive(Debug, Clone)]
pub struct LoadedEntry {
    pub entry: Entry,
    pub issues: Vec<EntryIssue>,
}
