pub mod front_matter;
pub mod deserializers;

pub use front_matter::FrontMatter;
