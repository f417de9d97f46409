use std::fmt::Debug;
use num_traits::Float;

use crate::graph::VertexId;

/// Read-only view of a weighted directed graph with named vertices
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Looks up the id of a vertex by name
    fn vertex_id(&self, name: &str) -> Option<VertexId>;

    /// Returns the name of a vertex, if the id belongs to this graph
    fn vertex_name(&self, vertex: VertexId) -> Option<&str>;

    /// Returns an iterator over the outgoing edges from a vertex as `(target, length)`
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns an iterator over the incoming edges to a vertex as `(source, length)`
    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count()
    }
}
