use std::fmt::Debug;
use log::warn;
use num_traits::Float;

use crate::data_structures::MinLengthQueue;
use crate::graph::{Graph, NamedGraph, VertexId};
use crate::{Error, Result};

/// Shortest path lengths and predecessors indexed by vertex id
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<VertexId>>,

    /// Source vertex ID
    pub source: VertexId,
}

/// Classic Dijkstra's algorithm, used as a reference for the relaxation engine
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    pub fn name(&self) -> &'static str {
        "Dijkstra"
    }

    /// Compute shortest paths from `source` to all other vertices
    pub fn compute_shortest_paths<W, G>(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::NoSourceFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut queue = MinLengthQueue::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Skip stale queue entries
            if let Some(current_dist) = distances[u] {
                if current_dist < dist_u {
                    continue;
                }
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u + weight;

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }

    /// Checks the lengths stored in a relaxed `graph` against a fresh Dijkstra run.
    ///
    /// Lengths match when they differ by at most `tolerance` (relative to the larger of the
    /// two, or absolute below 1.0) or when both are unresolved. Returns
    /// [`Error::VerificationFailed`] listing every mismatching vertex in name order.
    pub fn verify<W>(&self, graph: &NamedGraph<W>, tolerance: W) -> Result<()>
    where
        W: Float + Debug,
    {
        let source = graph.source().ok_or(Error::NoSourceFound)?;
        let reference = self.compute_shortest_paths(graph, source)?;

        let mismatches: Vec<String> = graph
            .ids_by_name()
            .filter_map(|id| {
                let vertex = graph.vertex_by_id(id)?;
                let agrees = match (vertex.accumulated_length(), reference.distances[id]) {
                    (None, None) => true,
                    (Some(ours), Some(theirs)) => {
                        let scale = ours.abs().max(theirs.abs()).max(W::one());
                        (ours - theirs).abs() <= tolerance * scale
                    }
                    _ => false,
                };
                if agrees {
                    None
                } else {
                    warn!(
                        "{}: relaxed length {:?}, reference {:?}",
                        vertex.name(),
                        vertex.accumulated_length(),
                        reference.distances[id]
                    );
                    Some(vertex.name().to_owned())
                }
            })
            .collect();

        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(Error::VerificationFailed { mismatches })
        }
    }
}
