use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::graph::VertexId;

/// Min-priority queue of vertices keyed by tentative path length.
///
/// Float lengths are wrapped in [`OrderedFloat`] so any `W: Float` can be used as a key;
/// ties are broken by the smaller vertex id.
#[derive(Debug)]
pub struct MinLengthQueue<W>
where
    W: Float + Debug,
{
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, VertexId)>>,
}

impl<W> Default for MinLengthQueue<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> MinLengthQueue<W>
where
    W: Float + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        MinLengthQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `vertex` with tentative length `length`; stale entries are left for the caller to skip
    pub fn push(&mut self, vertex: VertexId, length: W) {
        self.heap.push(Reverse((OrderedFloat(length), vertex)));
    }

    /// Removes the vertex with the smallest length
    pub fn pop(&mut self) -> Option<(VertexId, W)> {
        self.heap
            .pop()
            .map(|Reverse((length, vertex))| (vertex, length.into_inner()))
    }
}
