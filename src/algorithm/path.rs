use std::fmt::Debug;
use num_traits::Float;

use crate::graph::{Graph, NamedGraph};
use crate::{Error, Result};

/// Reconstructs the best known path from the source to `name`, both ends inclusive.
///
/// The walk follows predecessor links until it reaches a vertex without one. It takes at
/// most one step per vertex; a longer chain can only come from corrupted predecessors and
/// is reported as [`Error::PredecessorCycle`].
pub fn path_to<W>(graph: &NamedGraph<W>, name: &str) -> Result<Vec<String>>
where
    W: Float + Debug,
{
    let target = graph
        .vertex_id(name)
        .ok_or_else(|| Error::UnknownVertex(name.to_owned()))?;

    let mut current = graph
        .vertex_by_id(target)
        .ok_or_else(|| Error::UnknownVertex(name.to_owned()))?;
    if !current.is_resolved() {
        return Err(Error::UnresolvedVertex(name.to_owned()));
    }

    let mut path = vec![current.name().to_owned()];
    while let Some(pred) = current.predecessor() {
        if path.len() > graph.vertex_count() {
            return Err(Error::PredecessorCycle(name.to_owned()));
        }
        current = graph
            .vertex_by_id(pred)
            .ok_or_else(|| Error::PredecessorCycle(name.to_owned()))?;
        path.push(current.name().to_owned());
    }
    path.reverse();

    Ok(path)
}

/// Sums the shortest edge length along each hop of `path`.
///
/// Returns `None` if some hop has no edge or a name is unknown. The empty path and a
/// single-vertex path both have length zero.
pub fn path_length<W>(graph: &NamedGraph<W>, path: &[String]) -> Option<W>
where
    W: Float + Debug,
{
    let mut total = W::zero();
    for hop in path.windows(2) {
        let from = graph.vertex_id(&hop[0])?;
        let to = graph.vertex_id(&hop[1])?;
        let length = graph
            .outgoing_edges(from)
            .filter(|&(target, _)| target == to)
            .map(|(_, length)| length)
            .reduce(W::min)?;
        total = total + length;
    }
    Some(total)
}
