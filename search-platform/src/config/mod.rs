//! Configuration and dependency wiring for the search platform.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::PlatformConfig;
