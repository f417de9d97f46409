//! Diagnostic summary of a relaxation run.

use std::fmt;
use std::time::Duration;
use num_traits::Float;
use serde::Serialize;

use crate::algorithm::path_to;
use crate::graph::NamedGraph;
use crate::{Error, Result};

/// How the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Converged,
    Stalled,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Converged => write!(f, "converged"),
            RunStatus::Stalled => write!(f, "stalled"),
        }
    }
}

/// Result line for one vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexReport {
    pub name: String,
    /// `None` for unresolved vertices
    pub length: Option<f64>,
    /// Source-to-vertex path; `None` for unresolved vertices
    pub path: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub elapsed_seconds: f64,
    pub passes: usize,
    pub status: RunStatus,
    /// One entry per vertex, sorted by name
    pub vertices: Vec<VertexReport>,
}

impl Report {
    /// Collects lengths and reconstructed paths for every vertex of `graph`
    pub fn new<W>(graph: &NamedGraph<W>, passes: usize, status: RunStatus, elapsed: Duration) -> Result<Self>
    where
        W: Float + fmt::Debug,
    {
        let mut vertices = Vec::new();
        for (name, vertex) in graph.vertices() {
            let path = match path_to(graph, name) {
                Ok(path) => Some(path),
                Err(Error::UnresolvedVertex(_)) => None,
                Err(err) => return Err(err),
            };
            vertices.push(VertexReport {
                name: name.to_owned(),
                length: vertex.accumulated_length().and_then(|length| length.to_f64()),
                path,
            });
        }

        Ok(Report {
            elapsed_seconds: elapsed.as_secs_f64(),
            passes,
            status,
            vertices,
        })
    }

    /// Pretty-printed JSON rendering
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| Error::Io(err.into()))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elapsed time: {:.6}s", self.elapsed_seconds)?;
        writeln!(f, "Passes: {} ({})", self.passes, self.status)?;
        for vertex in &self.vertices {
            match (&vertex.length, &vertex.path) {
                (Some(length), Some(path)) => {
                    writeln!(f, "{} {} [{}]", vertex.name, length, path.join(" -> "))?
                }
                _ => writeln!(f, "{} unresolved", vertex.name)?,
            }
        }
        Ok(())
    }
}
