mod defaults;
mod loader;
mod types;
mod validation;

pub use defaults::DEFAULT_COLLECTION;
pub use loader::load_config;
pub use types::*;
