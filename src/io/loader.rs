use std::fs::File;
use std::io::Read;
use std::path::Path;
use log::{info, warn};

use crate::graph::{Graph, NamedGraph};
use crate::io::EdgeRecord;
use crate::{Error, Result};

/// What to do with a row that cannot become an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRowPolicy {
    /// Fail the whole load on the first bad row
    #[default]
    Abort,
    /// Log a warning and continue with the next row
    Skip,
}

/// Loader settings
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    pub invalid_rows: InvalidRowPolicy,
}

impl LoaderConfig {
    pub fn skipping_invalid_rows() -> Self {
        LoaderConfig {
            invalid_rows: InvalidRowPolicy::Skip,
        }
    }
}

/// Reads a `From,To,Length` edge list and builds the graph from it.
///
/// Fields are trimmed and may be quoted. Rows that fail to parse ([`Error::LoadParse`]) or
/// describe an invalid edge are handled according to `config.invalid_rows`; an aborting
/// invalid edge is reported as [`Error::InvalidRow`] with its line. I/O errors always abort.
/// A list without any edge is rejected with [`Error::EmptyInput`].
pub fn load_edges<R: Read>(reader: R, config: &LoaderConfig) -> Result<NamedGraph<f64>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = NamedGraph::new();
    let mut skipped = 0usize;

    for (row, record) in csv_reader.deserialize::<EdgeRecord>().enumerate() {
        // Header is line 1
        let line = row as u64 + 2;
        let outcome = record
            .map_err(|err| convert_csv_error(err, line))
            .and_then(|record| graph.register_edge(&record.from, &record.to, record.length));

        if let Err(err) = outcome {
            if matches!(err, Error::Io(_)) {
                return Err(err);
            }
            if config.invalid_rows == InvalidRowPolicy::Abort {
                return Err(match err {
                    Error::LoadParse { .. } => err,
                    err => Error::InvalidRow {
                        line,
                        source: Box::new(err),
                    },
                });
            }
            warn!("Skipping line {}: {}", line, err);
            skipped += 1;
        }
    }

    if graph.edge_count() == 0 {
        return Err(Error::EmptyInput);
    }

    info!(
        "Loaded {} edges over {} vertices ({} rows skipped)",
        graph.edge_count(),
        graph.vertex_count(),
        skipped
    );
    Ok(graph)
}

/// Opens `path` and loads it with [`load_edges`]
pub fn load_from_path(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<NamedGraph<f64>> {
    let file = File::open(path.as_ref())?;
    load_edges(file, config)
}

pub(crate) fn convert_csv_error(err: csv::Error, fallback_line: u64) -> Error {
    let line = err.position().map_or(fallback_line, |pos| pos.line());
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        _ => Error::LoadParse { line, message },
    }
}
