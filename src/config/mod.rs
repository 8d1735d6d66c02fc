//! Engine configuration.
//!
//! Configuration is TOML; every field has a default so an empty file is a
//! valid configuration. [`load_config_from_path`] is the only function in the
//! crate that touches the filesystem.

mod core;
mod loader;
pub mod presets;
mod sections;

pub use self::core::EngineConfig;
pub use loader::{load_config_from_path, parse_config};
pub use presets::ConfigPreset;
pub use sections::{
    default_canton_max_area, default_renovations_per_hour, CompartmentConfig, OccupancyConfig,
    SmokeConfig,
};
