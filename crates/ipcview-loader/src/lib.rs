mod error;
mod watched;

pub use crate::error::{ErrorKind, LoadError};

use crate::watched::WatchedReader;
use ipcview_data_type::StreamTable;
use polars::arrow::io::ipc::read::{
    read_stream_metadata, StreamMetadata, StreamReader, StreamState,
};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Reads every record batch of the IPC stream at `path` into one table.
///
/// The file is open only for the duration of the call. On error nothing of
/// the stream is returned.
pub fn load_all(path: impl AsRef<Path>) -> Result<StreamTable, LoadError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    log::info!("load_all: path={}", origin);

    let file = File::open(path).map_err(|error| LoadError::Io {
        origin: origin.clone(),
        error,
    })?;

    load_from_reader(BufReader::new(file), &origin)
}

/// Reads a stream piped on standard input.
pub fn load_stdin() -> Result<StreamTable, LoadError> {
    log::info!("load_stdin");
    load_from_reader(io::stdin().lock(), "<stdin>")
}

/// Same as [`load_all`] for an arbitrary byte source. `origin` names the
/// source in errors. The reader is dropped before this returns.
pub fn load_from_reader<R: Read>(reader: R, origin: &str) -> Result<StreamTable, LoadError> {
    let mut reader = WatchedReader::new(reader);

    let decoded = decode(&mut reader, origin);

    // a read failure on the source wins over whatever the decoder made of it
    match (decoded, reader.take_failure()) {
        (Ok(table), _) => Ok(table),
        (Err(_), Some(error)) => Err(LoadError::Io {
            origin: origin.to_string(),
            error,
        }),
        (Err(e), None) => Err(e),
    }
}

fn decode<R: Read>(
    reader: &mut WatchedReader<R>,
    origin: &str,
) -> Result<StreamTable, LoadError> {
    let metadata = read_stream_metadata(reader).map_err(|error| LoadError::Header {
        origin: origin.to_string(),
        error,
    })?;
    log::debug!(
        "{}: stream schema has {} fields",
        origin,
        metadata.schema.fields.len()
    );

    let mut table = StreamTable::new(metadata.schema.clone());
    read_batches(reader, metadata, origin, &mut table)?;

    log::info!(
        "{}: loaded {} rows in {} batches",
        origin,
        table.num_rows(),
        table.num_batches()
    );
    Ok(table)
}

fn read_batches<R: Read>(
    reader: &mut WatchedReader<R>,
    metadata: StreamMetadata,
    origin: &str,
    table: &mut StreamTable,
) -> Result<(), LoadError> {
    let consumed = reader.consumed();
    // offset just past the last complete message
    let mut boundary = consumed.get();
    let stream = StreamReader::new(reader, metadata, None);

    for (batch, state) in stream.enumerate() {
        let state = state.map_err(|error| LoadError::Batch {
            origin: origin.to_string(),
            batch,
            error,
        })?;

        match state {
            StreamState::Some(chunk) => {
                log::debug!("{}: batch {} has {} rows", origin, batch, chunk.len());
                table
                    .push_batch(chunk.into_arrays())
                    .map_err(|error| LoadError::SchemaMismatch {
                        origin: origin.to_string(),
                        batch,
                        error,
                    })?;
                boundary = consumed.get();
            }
            // end of file without an end-of-stream marker
            StreamState::Waiting if consumed.get() == boundary => break,
            StreamState::Waiting => {
                return Err(LoadError::Truncated {
                    origin: origin.to_string(),
                    batch,
                    offset: boundary,
                })
            }
        }
    }

    Ok(())
}
