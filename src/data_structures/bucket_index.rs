use std::collections::BTreeMap;
use std::fmt::Debug;
use num_traits::Float;

use crate::graph::{NamedGraph, VertexId};

/// Vertices grouped by incoming-edge count, iterated in ascending count order.
///
/// Vertices with fewer incoming edges tend to depend on fewer unresolved vertices, so
/// sweeping them first usually cuts the number of relaxation passes. The order is only a
/// heuristic: it is not a topological order and one sweep is not enough in general.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketIndex {
    buckets: BTreeMap<usize, Vec<VertexId>>,
}

impl BucketIndex {
    /// Builds the index with one scan over `graph` in sorted-by-name order.
    ///
    /// Within a bucket vertices keep that name order, so the schedule is deterministic.
    pub fn build<W>(graph: &NamedGraph<W>) -> Self
    where
        W: Float + Debug,
    {
        let mut buckets: BTreeMap<usize, Vec<VertexId>> = BTreeMap::new();
        for id in graph.ids_by_name() {
            if let Some(vertex) = graph.vertex_by_id(id) {
                buckets.entry(vertex.incoming_count()).or_default().push(id);
            }
        }
        BucketIndex { buckets }
    }

    /// Iterates over `(incoming_count, vertices)` in ascending count order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[VertexId])> + '_ {
        self.buckets.iter().map(|(&count, ids)| (count, ids.as_slice()))
    }

    /// Every scheduled vertex, bucket by bucket
    pub fn schedule(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.buckets.values().flatten().copied()
    }

    /// Vertices that have exactly `count` incoming edges
    pub fn bucket(&self, count: usize) -> Option<&[VertexId]> {
        self.buckets.get(&count).map(Vec::as_slice)
    }

    /// Number of distinct incoming counts
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of scheduled vertices
    pub fn vertex_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
