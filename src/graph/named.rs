use crate::graph::traits::Graph;
use crate::graph::{Edge, Vertex, VertexId};
use crate::{Error, Result};
use num_traits::Float;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A directed graph whose vertices are identified by name.
///
/// This is the single owned registry for one batch computation: vertices are created on
/// first reference, never removed, and iterate in sorted-by-name order so that every
/// output derived from the graph is reproducible.
#[derive(Debug, Clone)]
pub struct NamedGraph<W = f64> {
    /// Name -> dense id, sorted by name
    index: BTreeMap<String, VertexId>,

    /// Vertices in creation order, addressed by id
    vertices: Vec<Vertex<W>>,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, length)]
    outgoing: Vec<Vec<(VertexId, W)>>,

    edge_count: usize,

    /// Set once the single source has been seeded
    source: Option<VertexId>,
}

impl<W> Default for NamedGraph<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> NamedGraph<W>
where
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        NamedGraph {
            index: BTreeMap::new(),
            vertices: Vec::new(),
            outgoing: Vec::new(),
            edge_count: 0,
            source: None,
        }
    }

    /// Returns the id for `name`, creating an unresolved vertex on first reference
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = self.vertices.len();
        self.index.insert(name.to_owned(), id);
        self.vertices.push(Vertex::new(name));
        self.outgoing.push(Vec::new());
        id
    }

    /// Registers the edge `from -> to`, creating either endpoint if needed.
    ///
    /// The edge is validated before any vertex is created, so a rejected edge leaves the
    /// graph untouched. Returns the id of the target vertex.
    pub fn register_edge(&mut self, from: &str, to: &str, length: W) -> Result<VertexId> {
        let edge = Edge::new(from, to, length)?;
        self.insert_edge(edge)
    }

    /// Registers an already validated edge
    pub fn insert_edge(&mut self, edge: Edge<W>) -> Result<VertexId> {
        if self.source.is_some() {
            return Err(Error::InvalidEdge {
                from: edge.from().to_owned(),
                to: edge.to().to_owned(),
                length: edge.length().to_f64().unwrap_or(f64::NAN),
                reason: "graph has already been seeded",
            });
        }

        let source = self.add_vertex(edge.from());
        let target = self.add_vertex(edge.to());
        let length = edge.length();

        self.vertices[target].add_incoming_edge(source, edge);
        self.outgoing[source].push((target, length));
        self.edge_count += 1;

        Ok(target)
    }

    /// Returns the vertex with the given name
    pub fn vertex(&self, name: &str) -> Option<&Vertex<W>> {
        self.index.get(name).map(|&id| &self.vertices[id])
    }

    /// Returns the vertex with the given id
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex<W>> {
        self.vertices.get(id)
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex<W> {
        &mut self.vertices[id]
    }

    /// Iterates over `(name, vertex)` pairs sorted by name
    pub fn vertices(&self) -> impl Iterator<Item = (&str, &Vertex<W>)> + '_ {
        self.index
            .iter()
            .map(move |(name, &id)| (name.as_str(), &self.vertices[id]))
    }

    /// Iterates over vertex ids in sorted-by-name order
    pub fn ids_by_name(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.index.values().copied()
    }

    /// Iterates over vertex names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.keys().map(String::as_str)
    }

    /// The seeded source vertex, if any
    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    pub(crate) fn set_source(&mut self, id: VertexId) {
        self.source = Some(id);
        let vertex = &mut self.vertices[id];
        vertex.accumulated_length = Some(W::zero());
        vertex.predecessor = None;
    }

    /// Best known length from the source to `name`
    pub fn accumulated_length(&self, name: &str) -> Result<Option<W>> {
        self.vertex(name)
            .map(Vertex::accumulated_length)
            .ok_or_else(|| Error::UnknownVertex(name.to_owned()))
    }

    /// Name of the vertex preceding `name` on its best known path
    pub fn predecessor(&self, name: &str) -> Result<Option<&str>> {
        let vertex = self
            .vertex(name)
            .ok_or_else(|| Error::UnknownVertex(name.to_owned()))?;
        Ok(vertex.predecessor().map(|id| self.vertices[id].name()))
    }

    /// Names of all vertices without a resolved length, sorted
    pub fn unresolved(&self) -> Vec<String> {
        self.vertices()
            .filter(|(_, vertex)| !vertex.is_resolved())
            .map(|(name, _)| name.to_owned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<W> Graph<W> for NamedGraph<W>
where
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    fn vertex_name(&self, vertex: VertexId) -> Option<&str> {
        self.vertices.get(vertex).map(Vertex::name)
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        if let Some(edges) = self.outgoing.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        if let Some(v) = self.vertices.get(vertex) {
            Box::new(v.incoming.iter().map(|(source, edge)| (*source, edge.length())))
        } else {
            Box::new(std::iter::empty())
        }
    }
}
