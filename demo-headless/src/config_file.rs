//! Loading a run configuration from TOML
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! width = 80
//! height = 60
//! density = 0.65
//! probability_of_spread = 55
//! south_wind_speed = -4
//! west_wind_speed = 12
//! big_jumps = true
//! horizon = 50
//! seed = 1234
//! activation = "snapshot"
//! ```

use forest_fire_core::{ConfigError, ForestConfig};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Parse a TOML document into a configuration
pub fn parse_config(text: &str, path: &Path) -> Result<ForestConfig, CliError> {
    toml::from_str(text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the TOML file at `path`
pub fn load_config(path: &Path) -> Result<ForestConfig, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forest_fire_core::ActivationMode;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_config("density = 0.8\nwest_wind_speed = -6\n", Path::new("t.toml"))
            .expect("valid toml");
        assert_eq!(config.density, 0.8);
        assert_eq!(config.west_wind_speed, -6);
        assert_eq!(config.width, 50);
        assert_eq!(config.probability_of_spread, 69);
        assert!(config.big_jumps);
    }

    #[test]
    fn reads_activation_and_seed() {
        let config = parse_config("activation = \"snapshot\"\nseed = 9\n", Path::new("t.toml"))
            .expect("valid toml");
        assert_eq!(config.activation, ActivationMode::Snapshot);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn bad_types_are_reported_with_path() {
        let err = parse_config("density = \"thick\"\n", Path::new("forest.toml")).unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
        assert!(err.to_string().contains("forest.toml"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/forest.toml")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
