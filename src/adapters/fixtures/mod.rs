//! Fixture source adapters.

mod static_source;
mod yaml_file;

pub use static_source::StaticFixtureSource;
pub use yaml_file::YamlFixtureSource;
