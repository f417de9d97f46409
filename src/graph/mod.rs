pub mod traits;
pub mod edge;
pub mod named;
pub mod generators;

pub use traits::Graph;
pub use edge::{Edge, Vertex};
pub use named::NamedGraph;

/// Dense index of a vertex inside the [`NamedGraph`] that created it
pub type VertexId = usize;
