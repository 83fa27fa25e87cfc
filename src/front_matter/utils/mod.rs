pub mod content;

pub use content::{clean_source, strip_wrapping_fence};
