use log::info;

use crate::cli::commands::resolve_collection;
use crate::collections::{related, RenderCache};
use crate::config::Config;
use crate::utils::error::{BoxResult, RecipebookError};

/// Handle the related command
pub fn handle_related_command(config: &Config, slug: &str, collection: Option<&str>) -> BoxResult<()> {
    let collection = resolve_collection(config, collection)?;
    let dir = config.collection_dir(collection);
    let cache = RenderCache::new(&dir);

    let entry = cache.get_by_slug(slug).ok_or_else(|| {
        RecipebookError::Content(format!("No entry '{}' in collection '{}'", slug, collection))
    })?;

    let matches = related(cache.list_all(), slug, &entry.meta.tags, config.related_limit);
    if matches.is_empty() {
        info!("No other entries in collection '{}'", collection);
    }

    for meta in matches {
        println!("{}  {:<40}  {}", meta.date, meta.slug, meta.title);
    }
    Ok(())
}
