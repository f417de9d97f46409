use std::fmt::Debug;
use log::debug;
use num_traits::Float;

use crate::graph::{NamedGraph, VertexId};
use crate::{Error, Result};

/// Finds the single vertex with no incoming edges and seeds its length to zero.
///
/// Every vertex is scanned, so when several candidates exist all of them are named in
/// [`Error::MultipleSourcesFound`]. The graph is only modified on success.
pub fn find_and_seed_source<W>(graph: &mut NamedGraph<W>) -> Result<VertexId>
where
    W: Float + Debug,
{
    let candidates: Vec<VertexId> = graph
        .ids_by_name()
        .filter(|&id| {
            graph
                .vertex_by_id(id)
                .map_or(false, |vertex| vertex.incoming_count() == 0)
        })
        .collect();

    match candidates.as_slice() {
        [] => Err(Error::NoSourceFound),
        [source] => {
            graph.set_source(*source);
            debug!(
                "Seeded source {}",
                graph.vertex_by_id(*source).map_or("?", |v| v.name())
            );
            Ok(*source)
        }
        _ => Err(Error::MultipleSourcesFound {
            sources: candidates
                .iter()
                .filter_map(|&id| graph.vertex_by_id(id).map(|v| v.name().to_owned()))
                .collect(),
        }),
    }
}
