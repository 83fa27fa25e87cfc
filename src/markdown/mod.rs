pub mod engine;
pub mod utils;

pub use engine::comrak::render_body;
pub use utils::{clean_text, strip_emphasis};
