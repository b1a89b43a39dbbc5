use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open config file {path}")]
    Open {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
    #[error("cannot parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },
}

/// How a loaded table is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Only the first `max_rows` rows are rendered. `None` renders the whole table.
    pub max_rows: Option<usize>,
    /// Print the column names and types after the table.
    pub show_schema: bool,
    /// Print the row count of every record batch.
    pub show_batches: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_rows: None,
            show_schema: false,
            show_batches: false,
        }
    }
}

impl DisplayConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("from_json_file: path={}", path.display());
        let file = File::open(path).map_err(|error| ConfigError::Open {
            path: path.to_path_buf(),
            error,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }
}
