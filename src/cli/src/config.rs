use std::{
    fs, io,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "cubereplay.toml";

/// Global configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub oracle: OracleConfig,
    pub display: DisplayConfig,
}

/// How to run the two-phase solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// The solver executable, looked up on `PATH` if it is not a path
    pub program: PathBuf,
    /// The longest solution the solver may return
    pub max_length: u32,
    /// Solver threads; defaults to the available parallelism
    pub threads: Option<usize>,
    /// Where the solver dumps its tables; defaults to a directory in the
    /// user's cache
    pub table_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Terminal columns per sticker
    pub sticker_width: usize,
    /// Print a sentence describing each face turn below the status
    pub describe_moves: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            program: PathBuf::from("twophase"),
            max_length: 30,
            threads: None,
            table_dir: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            sticker_width: 2,
            describe_moves: true,
        }
    }
}

impl ReplayConfig {
    /// Read the configuration from `path`, or from the default location when
    /// no path was given. Only a missing default file falls back to the
    /// default configuration.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<ReplayConfig> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
                debug!(target: "config", "No {path:?}, using the default configuration");
                return Ok(ReplayConfig::default());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("Failed to read {path:?}"));
            }
        };

        let config = toml::from_str::<ReplayConfig>(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {path:?}"))?;

        debug!(target: "config", "Loaded {path:?}: {config:?}");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_keep_defaults() {
        let config = toml::from_str::<ReplayConfig>(
            r#"
            [oracle]
            program = "/opt/twophase/twophase"
            threads = 4

            [display]
            describe_moves = false
            "#,
        )
        .unwrap();

        assert_eq!(config.oracle.program, PathBuf::from("/opt/twophase/twophase"));
        assert_eq!(config.oracle.max_length, 30);
        assert_eq!(config.oracle.threads, Some(4));
        assert_eq!(config.oracle.table_dir, None);
        assert_eq!(config.display.sticker_width, 2);
        assert!(!config.display.describe_moves);
    }

    #[test]
    fn empty_file_is_default() {
        let config = toml::from_str::<ReplayConfig>("").unwrap();
        assert_eq!(config.oracle.program, PathBuf::from("twophase"));
        assert!(config.display.describe_moves);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(ReplayConfig::load(Some(Path::new("/nonexistent/cubereplay.toml"))).is_err());
    }
}
