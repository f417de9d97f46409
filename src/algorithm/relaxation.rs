use std::fmt::Debug;
use log::{debug, info, warn};
use num_traits::Float;
use rayon::prelude::*;

use crate::data_structures::BucketIndex;
use crate::graph::{Graph, NamedGraph, Vertex, VertexId};
use crate::{Error, Result};

/// Decides when a pass without unsatisfied edges ends the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvergenceRule {
    /// Stop only after a pass that changes nothing.
    ///
    /// Lengths are minimal on exit. A vertex relaxed early in a pass may read a value that
    /// an upstream update later in the same pass makes stale; the extra pass picks it up.
    #[default]
    FixedPoint,
    /// Stop as soon as a pass finds every incoming edge's source resolved
    AllSatisfied,
}

/// How a single pass reads and writes lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassMode {
    /// Update lengths in place, bucket by bucket; later vertices see earlier writes
    #[default]
    Sequential,
    /// Read a snapshot taken at the start of the pass, relax all vertices in parallel and
    /// apply the buffered writes afterwards
    Snapshot,
}

/// Counters collected during one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassStats {
    /// Number of length/predecessor updates
    pub changed: usize,
    /// Number of incoming edges whose source was still unresolved
    pub unsatisfied: usize,
}

impl PassStats {
    fn merge(&mut self, other: PassStats) {
        self.changed += other.changed;
        self.unsatisfied += other.unsatisfied;
    }
}

/// Summary of a converged run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaxationOutcome {
    /// Number of passes executed, including the final one
    pub passes: usize,
    /// Per-pass counters in execution order
    pub history: Vec<PassStats>,
}

impl RelaxationOutcome {
    /// Total number of updates over the whole run
    pub fn total_changes(&self) -> usize {
        self.history.iter().map(|stats| stats.changed).sum()
    }
}

/// Bucketed fixed-point relaxation of accumulated path lengths.
///
/// Each pass walks the [`BucketIndex`] in ascending incoming-count order and, for every
/// incoming edge of every vertex, replaces the vertex's length when the edge offers a
/// strictly shorter one. Ties keep the predecessor found first.
#[derive(Debug, Clone, Default)]
pub struct RelaxationEngine {
    convergence: ConvergenceRule,
    pass_mode: PassMode,
    /// Upper bound on passes; `None` runs until convergence or stall
    max_passes: Option<usize>,
}

impl RelaxationEngine {
    /// Create a new engine with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence rule
    pub fn with_convergence(mut self, rule: ConvergenceRule) -> Self {
        self.convergence = rule;
        self
    }

    /// Set how passes read and write lengths
    pub fn with_pass_mode(mut self, mode: PassMode) -> Self {
        self.pass_mode = mode;
        self
    }

    /// Limit the number of passes
    pub fn with_max_passes(mut self, limit: Option<usize>) -> Self {
        self.max_passes = limit;
        self
    }

    pub fn convergence(&self) -> ConvergenceRule {
        self.convergence
    }

    pub fn pass_mode(&self) -> PassMode {
        self.pass_mode
    }

    /// Runs passes until the graph converges or stalls.
    ///
    /// The graph must already have a seeded source. A stall returns
    /// [`Error::PartiallyUnreachable`] naming every unresolved vertex; lengths resolved up
    /// to that point stay in the graph.
    pub fn run<W>(&self, graph: &mut NamedGraph<W>, buckets: &BucketIndex) -> Result<RelaxationOutcome>
    where
        W: Float + Debug + Send + Sync,
    {
        if graph.source().is_none() {
            return Err(Error::NoSourceFound);
        }

        debug!(
            "Relaxing {} buckets with {:?} convergence and {:?} passes",
            buckets.len(),
            self.convergence(),
            self.pass_mode()
        );
        let mut history = Vec::new();
        loop {
            if let Some(limit) = self.max_passes {
                if history.len() >= limit {
                    return Err(Error::PassLimitExceeded { limit });
                }
            }

            let stats = self.run_pass(graph, buckets);
            history.push(stats);
            debug!(
                "Pass {}: {} changed, {} unsatisfied",
                history.len(),
                stats.changed,
                stats.unsatisfied
            );

            let converged = match self.convergence {
                ConvergenceRule::FixedPoint => stats.changed == 0 && stats.unsatisfied == 0,
                ConvergenceRule::AllSatisfied => stats.unsatisfied == 0,
            };
            if converged {
                info!(
                    "Converged after {} passes over {} vertices",
                    history.len(),
                    graph.vertex_count()
                );
                return Ok(RelaxationOutcome {
                    passes: history.len(),
                    history,
                });
            }

            if stats.changed == 0 {
                let unresolved = graph.unresolved();
                warn!(
                    "Stalled after {} passes, {} vertices unresolved",
                    history.len(),
                    unresolved.len()
                );
                return Err(Error::PartiallyUnreachable {
                    unresolved,
                    passes: history.len(),
                });
            }
        }
    }

    /// Executes exactly one pass in the configured mode
    pub fn run_pass<W>(&self, graph: &mut NamedGraph<W>, buckets: &BucketIndex) -> PassStats
    where
        W: Float + Debug + Send + Sync,
    {
        match self.pass_mode {
            PassMode::Sequential => sequential_pass(graph, buckets),
            PassMode::Snapshot => snapshot_pass(graph, buckets),
        }
    }
}

fn improves<W: Float>(current: Option<W>, candidate: W) -> bool {
    current.map_or(true, |length| candidate < length)
}

fn sequential_pass<W>(graph: &mut NamedGraph<W>, buckets: &BucketIndex) -> PassStats
where
    W: Float + Debug,
{
    let mut stats = PassStats::default();

    for (_, bucket) in buckets.iter() {
        for &v in bucket {
            // Detach the edge list so the other vertices stay readable while `v` is written
            let incoming = std::mem::take(&mut graph.vertex_mut(v).incoming);

            for (source, edge) in &incoming {
                match graph.vertex_by_id(*source).and_then(Vertex::accumulated_length) {
                    None => stats.unsatisfied += 1,
                    Some(base) => {
                        let candidate = base + edge.length();
                        let target = graph.vertex_mut(v);
                        if improves(target.accumulated_length, candidate) {
                            target.accumulated_length = Some(candidate);
                            target.predecessor = Some(*source);
                            stats.changed += 1;
                        }
                    }
                }
            }

            graph.vertex_mut(v).incoming = incoming;
        }
    }

    stats
}

fn snapshot_pass<W>(graph: &mut NamedGraph<W>, buckets: &BucketIndex) -> PassStats
where
    W: Float + Debug + Send + Sync,
{
    let snapshot: Vec<Option<W>> = (0..graph.vertex_count())
        .map(|id| graph.vertex_by_id(id).and_then(Vertex::accumulated_length))
        .collect();
    let schedule: Vec<VertexId> = buckets.schedule().collect();

    let reader: &NamedGraph<W> = graph;
    let updates: Vec<(VertexId, Option<(W, VertexId)>, PassStats)> = schedule
        .par_iter()
        .map(|&v| {
            let mut stats = PassStats::default();
            let mut best = snapshot[v];
            let mut update = None;

            if let Some(vertex) = reader.vertex_by_id(v) {
                for (source, edge) in &vertex.incoming {
                    match snapshot[*source] {
                        None => stats.unsatisfied += 1,
                        Some(base) => {
                            let candidate = base + edge.length();
                            if improves(best, candidate) {
                                best = Some(candidate);
                                update = Some((candidate, *source));
                                stats.changed += 1;
                            }
                        }
                    }
                }
            }

            (v, update, stats)
        })
        .collect();

    let mut total = PassStats::default();
    for (v, update, stats) in updates {
        total.merge(stats);
        if let Some((length, predecessor)) = update {
            let target = graph.vertex_mut(v);
            target.accumulated_length = Some(length);
            target.predecessor = Some(predecessor);
        }
    }

    total
}
