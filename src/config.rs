use crate::error::{DeclensionError, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "declension.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Substitution list for given names.
    pub names_list: PathBuf,
    /// Substitution list for surnames.
    pub surnames_list: PathBuf,
    /// Where to write the JSON bucket report, if anywhere.
    pub report_path: Option<PathBuf>,
    /// Where malformed addressee cells go; stderr when unset.
    pub warnings_path: Option<PathBuf>,
    /// Directory holding engine snapshots between runs.
    pub state_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names_list: PathBuf::from("exc/names.txt"),
            surnames_list: PathBuf::from("exc/surnames.txt"),
            report_path: None,
            warnings_path: None,
            state_dir: None,
        }
    }
}

/// Reads the config file. A missing file is not an error: defaults apply.
pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    match fs::read_to_string(file_path) {
        Ok(contents) => toml::from_str::<Config>(&contents).map_err(|source| DeclensionError::Config {
            path: file_path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %file_path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(DeclensionError::io(file_path, e)),
    }
}
