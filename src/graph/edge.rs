use std::fmt::Debug;
use num_traits::Float;

use crate::graph::VertexId;
use crate::{Error, Result};

/// A directed edge between two named vertices with a positive length
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W> {
    from: String,
    to: String,
    length: W,
}

impl<W> Edge<W>
where
    W: Float + Debug,
{
    /// Creates a validated edge.
    ///
    /// Both endpoint names must be non-empty and `length` must be finite and strictly
    /// positive. NaN lengths are rejected as well.
    pub fn new(from: impl Into<String>, to: impl Into<String>, length: W) -> Result<Self> {
        let from = from.into();
        let to = to.into();

        let reason = if from.is_empty() {
            Some("source vertex name is empty")
        } else if to.is_empty() {
            Some("target vertex name is empty")
        } else if length.is_nan() || length <= W::zero() || !length.is_finite() {
            Some("length must be positive and finite")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidEdge {
                length: length.to_f64().unwrap_or(f64::NAN),
                from,
                to,
                reason,
            }),
            None => Ok(Edge { from, to, length }),
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn length(&self) -> W {
        self.length
    }
}

/// A vertex of a [`NamedGraph`](crate::NamedGraph) together with its relaxation state
#[derive(Debug, Clone)]
pub struct Vertex<W> {
    name: String,

    /// Incoming edges paired with the id of their source vertex, in insertion order
    pub(crate) incoming: Vec<(VertexId, Edge<W>)>,

    /// Cached `incoming.len()`, updated on every insertion
    incoming_count: usize,

    /// Best known length from the source; `None` while unresolved
    pub(crate) accumulated_length: Option<W>,

    /// Vertex preceding this one on the best known path
    pub(crate) predecessor: Option<VertexId>,
}

impl<W> Vertex<W>
where
    W: Float + Debug,
{
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Vertex {
            name: name.into(),
            incoming: Vec::new(),
            incoming_count: 0,
            accumulated_length: None,
            predecessor: None,
        }
    }

    /// Appends an incoming edge and returns the new incoming count
    pub(crate) fn add_incoming_edge(&mut self, source: VertexId, edge: Edge<W>) -> usize {
        self.incoming.push((source, edge));
        self.incoming_count += 1;
        self.incoming_count
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Incoming edges in the order they were registered
    pub fn incoming(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.incoming.iter().map(|(_, edge)| edge)
    }

    pub fn incoming_count(&self) -> usize {
        self.incoming_count
    }

    pub fn accumulated_length(&self) -> Option<W> {
        self.accumulated_length
    }

    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    pub fn is_resolved(&self) -> bool {
        self.accumulated_length.is_some()
    }
}
