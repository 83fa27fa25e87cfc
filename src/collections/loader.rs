use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, warn};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::collections::date::{parse_date, today};
use crate::collections::model::{Entry, EntryIssue, EntryMeta, LoadedEntry};
use crate::front_matter::{self, clean_source, FrontMatter};
use crate::utils::{fs, path};

/// Extensions tried by default, in preference order
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// A directory of content files, one entry per file
#[derive(Debug, Clone)]
pub struct ContentDir {
    root: PathBuf,
    extensions: Vec<String>,
}

impl ContentDir {
    /// Create a handle over `root`, resolving slugs against `extensions` in order
    pub fn new<P: AsRef<Path>>(root: P, extensions: &[String]) -> Self {
        ContentDir {
            root: root.as_ref().to_path_buf(),
            extensions: extensions.to_vec(),
        }
    }

    pub fn with_default_extensions<P: AsRef<Path>>(root: P) -> Self {
        let extensions: Vec<String> = DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();
        Self::new(root, &extensions)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every content file with the slug it derives, in directory enumeration
    /// order. Two files may derive the same slug.
    pub fn files(&self) -> Vec<(String, PathBuf)> {
        if !fs::is_directory(&self.root) {
            debug!("Content directory does not exist: {}", self.root.display());
            return Vec::new();
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", self.root.display(), e);
                    continue;
                }
            };

            let file = entry.path();
            if !entry.file_type().is_file() || !path::has_any_extension(file, &self.extensions) {
                continue;
            }

            if let Some(slug) = path::get_stem(file) {
                files.push((slug, file.to_path_buf()));
            }
        }

        files
    }

    /// Every slug with a backing file, in directory enumeration order.
    ///
    /// A missing directory yields no slugs. When two files derive the same
    /// slug it is listed once, at its first position, and a warning is logged.
    pub fn list_slugs(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut slugs = Vec::new();

        for (slug, file) in self.files() {
            if seen.insert(slug.clone()) {
                slugs.push(slug);
            } else {
                warn!(
                    "Duplicate slug '{}': {} shadows another file in {}",
                    slug,
                    file.display(),
                    self.root.display()
                );
            }
        }

        slugs
    }

    /// Slugs derived by more than one file, each reported once
    pub fn duplicate_slugs(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for (slug, _) in self.files() {
            if !seen.insert(slug.clone()) && !duplicates.contains(&slug) {
                duplicates.push(slug);
            }
        }

        duplicates
    }

    /// The file backing `slug`, trying each extension in preference order
    pub fn resolve(&self, slug: &str) -> Option<PathBuf> {
        if slug.is_empty() || slug.contains(&['/', '\\'][..]) || slug.starts_with('.') {
            return None;
        }

        self.extensions
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", slug, ext)))
            .find(|candidate| fs::is_file(candidate))
    }

    /// Load an entry along with any issues recovered while parsing it
    pub fn load(&self, slug: &str) -> Option<LoadedEntry> {
        let file = self.resolve(slug)?;

        let raw = match fs::read_file(&file) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read {}: {}", file.display(), e);
                return None;
            }
        };

        Some(parse_entry(slug, &raw, today()))
    }

    /// Resolve a slug to a full entry; `None` when no file backs it
    pub fn get_by_slug(&self, slug: &str) -> Option<Entry> {
        let loaded = self.load(slug)?;

        for issue in &loaded.issues {
            warn!("[{}] {}", slug, issue);
        }

        Some(loaded.entry)
    }

    /// Every entry's listing fields, newest first; equal dates fall back to slug order
    pub fn list_all(&self) -> Vec<EntryMeta> {
        let mut entries: Vec<EntryMeta> = self
            .list_slugs()
            .par_iter()
            .filter_map(|slug| self.get_by_slug(slug))
            .map(Entry::into_meta)
            .collect();

        sort_newest_first(&mut entries);
        entries
    }
}

/// Sort listings by date descending, then slug ascending
pub fn sort_newest_first(entries: &mut [EntryMeta]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}

/// Build an entry from raw file text. Never fails: every problem is
/// recovered with a default and reported in `issues`.
pub fn parse_entry(slug: &str, raw: &str, today: NaiveDate) -> LoadedEntry {
    let cleaned = clean_source(raw);
    let mut issues = Vec::new();

    let (front_matter, content) = match front_matter::parse(&cleaned) {
        Ok(parsed) => parsed,
        Err(e) => {
            issues.push(EntryIssue::MalformedMetadata(e.to_string()));
            (FrontMatter::default(), cleaned.clone())
        }
    };

    let title = match front_matter.title {
        Some(title) => title,
        None => {
            if !matches!(issues.first(), Some(EntryIssue::MalformedMetadata(_))) {
                issues.push(EntryIssue::MissingTitle);
            }
            slug.to_uppercase()
        }
    };

    let date = match front_matter.date {
        Some(raw_date) => parse_date(&raw_date).unwrap_or_else(|| {
            issues.push(EntryIssue::UnparseableDate(raw_date.clone()));
            today
        }),
        None => today,
    };

    let entry = Entry {
        meta: EntryMeta {
            slug: slug.to_string(),
            title,
            description: front_matter.description.unwrap_or_default(),
            date,
            tags: front_matter.tags.unwrap_or_default(),
        },
        content,
    };

    LoadedEntry { entry, issues }
}
