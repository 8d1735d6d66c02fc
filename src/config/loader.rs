use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use super::core::EngineConfig;
use crate::errors::{Error, Result};

/// Read a config file into a string
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(contents: &str) -> Result<EngineConfig> {
    let config = toml::from_str::<EngineConfig>(contents)?;
    validate_config(&config)?;
    Ok(config)
}

pub(crate) fn validate_config(config: &EngineConfig) -> Result<()> {
    if config.smoke.default_renovations_per_hour == 0 {
        return Err(Error::configuration(
            "smoke.default_renovations_per_hour must be greater than 0",
        ));
    }
    let max_area = config.smoke.canton_max_area;
    if !max_area.is_finite() || max_area <= 0.0 {
        return Err(Error::configuration(format!(
            "smoke.canton_max_area must be a positive number, got {max_area}"
        )));
    }
    Ok(())
}

/// Load configuration from a TOML file
pub fn load_config_from_path(path: &Path) -> Result<EngineConfig> {
    let contents = read_config_file(path).map_err(|source| Error::ConfigFile {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "Loaded engine config");
    Ok(config)
}
