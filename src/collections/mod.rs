pub mod model;
pub mod date;
pub mod loader;
pub mod cache;
pub mod related;

pub use model::{Entry, EntryIssue, EntryMeta, LoadedEntry};
pub use loader::{parse_entry, ContentDir, DEFAULT_EXTENSIONS};
pub use cache::RenderCache;
pub use related::related;
