//! Bucket SSSP - bucketed fixed-point single-source shortest paths
//!
//! This library resolves shortest path lengths from the unique zero in-degree vertex of a
//! named, weighted, directed graph. Instead of a topological sort or a priority queue it
//! sweeps vertices grouped by their incoming-edge count, relaxing lengths pass after pass
//! until nothing changes (converged) or nothing more can be reached (stalled).
//!
//! The usual pipeline is:
//!
//! 1. Load edges into a [`NamedGraph`] (see [`io::loader`]).
//! 2. Seed the source with [`find_and_seed_source`].
//! 3. Build a [`BucketIndex`] and run the [`RelaxationEngine`].
//! 4. Reconstruct paths with [`path_to`].
//!
//! [`solve`] runs steps 2 and 3 in one call.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod report;

/// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::Dijkstra,
    path::path_to,
    relaxation::{ConvergenceRule, PassMode, PassStats, RelaxationEngine, RelaxationOutcome},
    source::find_and_seed_source,
};
pub use data_structures::BucketIndex;
pub use graph::{Edge, NamedGraph, Vertex, VertexId};

use num_traits::Float;
use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid edge {from:?} -> {to:?} (length {length}): {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        length: f64,
        reason: &'static str,
    },

    #[error("Rejected edge list row at line {line}: {source}")]
    InvalidRow { line: u64, source: Box<Error> },

    #[error("Malformed edge list at line {line}: {message}")]
    LoadParse { line: u64, message: String },

    #[error("Edge list contained no edges")]
    EmptyInput,

    #[error("No vertex with zero incoming edges found")]
    NoSourceFound,

    #[error("Only one vertex can have zero incoming edges, found {}: {}", .sources.len(), .sources.join(", "))]
    MultipleSourcesFound { sources: Vec<String> },

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Vertex {0} has no resolved length")]
    UnresolvedVertex(String),

    #[error("Predecessor chain from {0} does not reach the source")]
    PredecessorCycle(String),

    #[error("Stalled after {passes} passes with {} unresolved vertices: {}", .unresolved.len(), .unresolved.join(", "))]
    PartiallyUnreachable {
        unresolved: Vec<String>,
        passes: usize,
    },

    #[error("No convergence within {limit} passes")]
    PassLimitExceeded { limit: usize },

    #[error("Lengths disagree with the reference solver for: {}", .mismatches.join(", "))]
    VerificationFailed { mismatches: Vec<String> },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Seeds the source, builds the bucket schedule and relaxes `graph` to termination.
///
/// On a stall the graph keeps every length resolved so far, so callers can still report
/// partial results after receiving [`Error::PartiallyUnreachable`].
pub fn solve<W>(graph: &mut NamedGraph<W>, engine: &RelaxationEngine) -> Result<RelaxationOutcome>
where
    W: Float + Debug + Send + Sync,
{
    find_and_seed_source(graph)?;
    let buckets = BucketIndex::build(graph);
    engine.run(graph, &buckets)
}
