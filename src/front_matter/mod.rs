pub mod types;
pub mod utils;
pub mod parser;
pub mod repair;

// Re-export the most common items for convenience
pub use types::FrontMatter;
pub use parser::{parse, split_front_matter};
pub use utils::{clean_source, strip_wrapping_fence};
pub use repair::{quote_risky_scalars, Repair};
