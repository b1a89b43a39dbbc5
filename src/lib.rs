pub mod cli;

use crate::cli::Args;
use anyhow::Context as _;
use ipcview_config::DisplayConfig;
use ipcview_data_type::StreamTable;
use ipcview_loader::{load_all, load_stdin};
use itertools::Itertools;
use polars::frame::DataFrame;
use std::fmt::Write as _;

/// Loads the stream named by `args` and returns its rendering.
pub fn run(args: &Args) -> anyhow::Result<String> {
    let config = args.display_config()?;

    let table = if args.reads_stdin() {
        load_stdin()?
    } else {
        load_all(&args.input)?
    };

    render(&table, &config)
}

pub fn render(table: &StreamTable, config: &DisplayConfig) -> anyhow::Result<String> {
    let df = DataFrame::try_from(table).context("cannot convert the table for display")?;
    let df = match config.max_rows {
        Some(n) => df.head(Some(n)),
        None => df,
    };
    log::debug!("render: height={}, width={}", df.height(), df.width());

    let mut out = String::new();
    writeln!(out, "{}", df)?;

    if config.show_schema {
        writeln!(out, "schema:")?;
        for (name, dtype) in df.schema().iter() {
            writeln!(out, "  {}: {}", name, dtype)?;
        }
    }
    if config.show_batches {
        writeln!(
            out,
            "batches: {} [{}]",
            table.num_batches(),
            table.batch_row_counts().iter().join(", ")
        )?;
    }

    Ok(out)
}
