//! Adapters - Implementations of port interfaces.
//!
//! - `events` - Event bus implementations
//! - `fixtures` - Baseline sources (built-in constants, YAML files)

pub mod events;
pub mod fixtures;

pub use events::InMemoryEventBus;
pub use fixtures::{StaticFixtureSource, YamlFixtureSource};
