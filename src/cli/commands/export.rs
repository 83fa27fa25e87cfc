use std::path::Path;

use log::{error, info};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::cli::commands::Page;
use crate::collections::{EntryMeta, RenderCache};
use crate::config::Config;
use crate::markdown::render_body;
use crate::structured::{FaqItem, HowToStep};
use crate::utils::error::{BoxResult, RecipebookError};
use crate::utils::fs;

/// Per-entry export record
#[derive(Serialize)]
struct ExportedEntry<'a> {
    #[serde(flatten)]
    meta: &'a EntryMeta,
    html: String,
    steps: &'a [HowToStep],
    faqs: &'a [FaqItem],
    jsonld: Vec<Value>,
}

fn export_entry(
    config: &Config,
    collection: &str,
    cache: &RenderCache<'_>,
    slug: &str,
    out_dir: &Path,
) -> BoxResult<()> {
    let entry = cache.get_by_slug(slug).ok_or_else(|| {
        RecipebookError::Content(format!("'{}' disappeared during export", slug))
    })?;

    let page = Page::assemble(&entry, &config.product);
    let record = ExportedEntry {
        meta: &page.meta,
        html: render_body(&entry.content),
        steps: page.steps.items(),
        faqs: page.faqs.items(),
        jsonld: page.documents(&config.schema_site(collection)),
    };

    fs::write_file(out_dir.join(format!("{}.json", slug)), &serde_json::to_string_pretty(&record)?)
}

/// Entry files live apart from the listing so no slug can overwrite it
const ENTRIES_DIR: &str = "entries";

/// Write `index.json` plus `entries/<slug>.json` per entry; returns the entry count
fn export_collection(config: &Config, collection: &str, destination: &Path) -> BoxResult<usize> {
    let dir = config.collection_dir(collection);
    let cache = RenderCache::new(&dir);
    let out_dir = destination.join(collection);
    let entries_dir = out_dir.join(ENTRIES_DIR);

    let listing = cache.list_all();
    fs::write_file(out_dir.join("index.json"), &serde_json::to_string_pretty(listing)?)?;

    // Errors are flattened to strings so they can cross threads
    let failures: Vec<String> = listing
        .par_iter()
        .filter_map(|meta| {
            export_entry(config, collection, &cache, &meta.slug, &entries_dir)
                .err()
                .map(|e| format!("{}/{}: {}", collection, meta.slug, e))
        })
        .collect();

    for failure in &failures {
        error!("Failed to export {}", failure);
    }

    if !failures.is_empty() {
        return Err(RecipebookError::Generic(format!(
            "{} of {} entries in '{}' failed to export",
            failures.len(),
            listing.len(),
            collection
        )).into());
    }

    Ok(listing.len())
}

/// Handle the export command
pub fn handle_export_command(config: &Config, destination: Option<&Path>) -> BoxResult<()> {
    let destination = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.destination_dir());

    info!("Exporting to {}", destination.display());
    fs::create_directory(&destination)?;

    for collection in &config.collections {
        let count = export_collection(config, collection, &destination)?;
        info!("Exported {} entries from '{}'", count, collection);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    const RECIPE: &str = "\
---
title: SUM basics
date: 2024-02-01
tags: [math]
---
## The Recipe
1. **Select:** Click the cell below your numbers.
2. **Type:** Enter =SUM(A1:A3) and press Enter.

## Troubleshooting
### #VALUE! Error
**How to fix it:** Make sure the range holds numbers, not text.
";

    #[test]
    fn test_export_writes_index_and_entries() {
        let site = TempDir::new().unwrap();
        let recipes = site.path().join("content").join("recipes");
        stdfs::create_dir_all(&recipes).unwrap();
        stdfs::write(recipes.join("sum.md"), RECIPE).unwrap();
        stdfs::write(recipes.join("older.md"), "---\ntitle: Older\ndate: 2023-01-01\n---\nText").unwrap();

        let config = Config { source: site.path().to_path_buf(), ..Config::default() };
        let out = TempDir::new().unwrap();
        handle_export_command(&config, Some(out.path())).unwrap();

        let index: Value = serde_json::from_str(
            &stdfs::read_to_string(out.path().join("recipes").join("index.json")).unwrap(),
        ).unwrap();
        assert_eq!(index[0]["slug"], "sum");
        assert_eq!(index[1]["slug"], "older");

        let entry: Value = serde_json::from_str(
            &stdfs::read_to_string(out.path().join("recipes").join("entries").join("sum.json")).unwrap(),
        ).unwrap();
        assert_eq!(entry["title"], "SUM basics");
        assert_eq!(entry["date"], "2024-02-01");
        assert_eq!(entry["steps"].as_array().unwrap().len(), 2);
        assert_eq!(entry["faqs"].as_array().unwrap().len(), 1);
        assert_eq!(entry["jsonld"].as_array().unwrap().len(), 3);
        assert!(entry["html"].as_str().unwrap().contains("<ol>"));

        assert!(!out.path().join("recipes").join("sum.json").exists());

        // A missing collection directory exports an empty index
        let insights = stdfs::read_to_string(out.path().join("insights").join("index.json")).unwrap();
        assert_eq!(insights.trim(), "[]");
    }

    #[test]
    fn test_entry_named_index_keeps_listing() {
        let site = TempDir::new().unwrap();
        let recipes = site.path().join("content").join("recipes");
        stdfs::create_dir_all(&recipes).unwrap();
        stdfs::write(recipes.join("index.md"), "---\ntitle: INDEX function\ndate: 2024-05-01\n---\nText").unwrap();
        stdfs::write(recipes.join("sum.md"), RECIPE).unwrap();

        let config = Config { source: site.path().to_path_buf(), ..Config::default() };
        let out = TempDir::new().unwrap();
        handle_export_command(&config, Some(out.path())).unwrap();

        let index: Value = serde_json::from_str(
            &stdfs::read_to_string(out.path().join("recipes").join("index.json")).unwrap(),
        ).unwrap();
        assert!(index.is_array());
        assert_eq!(index.as_array().unwrap().len(), 2);

        let entry: Value = serde_json::from_str(
            &stdfs::read_to_string(out.path().join("recipes").join("entries").join("index.json")).unwrap(),
        ).unwrap();
        assert_eq!(entry["title"], "INDEX function");
    }
}
