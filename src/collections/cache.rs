use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::collections::loader::ContentDir;
use crate::collections::model::{Entry, EntryMeta};

/// Memoises lookups against one content directory for the length of a single
/// render pass. Not-found results are remembered too.
pub struct RenderCache<'a> {
    dir: &'a ContentDir,
    entries: Mutex<HashMap<String, Option<Arc<Entry>>>>,
    listing: OnceLock<Vec<EntryMeta>>,
}

impl<'a> RenderCache<'a> {
    pub fn new(dir: &'a ContentDir) -> Self {
        RenderCache {
            dir,
            entries: Mutex::new(HashMap::new()),
            listing: OnceLock::new(),
        }
    }

    pub fn dir(&self) -> &ContentDir {
        self.dir
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<Arc<Entry>> {
        if let Some(cached) = self.lock().get(slug) {
            return cached.clone();
        }

        // Loaded outside the lock; a racing thread may load the same slug, which is harmless.
        let loaded = self.dir.get_by_slug(slug).map(Arc::new);
        self.lock()
            .entry(slug.to_string())
            .or_insert(loaded)
            .clone()
    }

    pub fn list_all(&self) -> &[EntryMeta] {
        self.listing.get_or_init(|| self.dir.list_all())
    }

    /// Number of distinct slugs looked up so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Option<Arc<Entry>>>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
