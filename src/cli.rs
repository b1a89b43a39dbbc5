use clap::Parser;
use ipcview_config::{ConfigError, DisplayConfig};
use std::path::PathBuf;

/// Print the contents of an Arrow IPC stream as a table.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Stream file to read, `-` reads standard input
    pub input: PathBuf,
    /// JSON file with display settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Render only the first N rows
    #[arg(short = 'n', long)]
    pub max_rows: Option<usize>,
    /// Print column names and types
    #[arg(long)]
    pub schema: bool,
    /// Print the row count of every record batch
    #[arg(long)]
    pub batches: bool,
}

impl Args {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    /// Settings from `--config`, overridden by the flags given on the command line.
    pub fn display_config(&self) -> Result<DisplayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DisplayConfig::from_json_file(path)?,
            None => DisplayConfig::default(),
        };
        if self.max_rows.is_some() {
            config.max_rows = self.max_rows;
        }
        config.show_schema |= self.schema;
        config.show_batches |= self.batches;
        Ok(config)
    }
}
