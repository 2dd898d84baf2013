use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default config file, consulted when no `--config` flag is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Optional JSON config file: the lowest-precedence configuration source,
/// below flags and environment variables. Keys use the flag spellings.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FileConfig {
    pub models_path: Option<PathBuf>,
    pub samples_path: Option<PathBuf>,
    pub input_image_name: Option<PathBuf>,
    pub passport_image_name: Option<String>,
    pub output_path: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub confidence: Option<f64>,
}

impl FileConfig {
    /// Loads the config file.
    ///
    /// An explicitly named file must exist and parse; the implicit
    /// default file is optional and silently skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let json = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
