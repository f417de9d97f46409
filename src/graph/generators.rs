use crate::graph::NamedGraph;
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Name used for vertex `i` by the generators; zero-padded so name order matches index order
pub fn vertex_name(i: usize) -> String {
    format!("v{:06}", i)
}

/// Generates a random single-source DAG with `n` vertices.
///
/// Vertex 0 is the only vertex without incoming edges. Every other vertex `i` receives one
/// edge from a random earlier vertex, which keeps the graph connected from the source,
/// plus roughly `edge_factor - 1` extra edges from earlier vertices. Lengths are drawn
/// from `1.0..100.0`. The same seed always produces the same graph.
pub fn generate_random_dag(n: usize, edge_factor: f64, seed: u64) -> Result<NamedGraph<f64>> {
    let mut graph = NamedGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    if n == 0 {
        return Ok(graph);
    }
    graph.add_vertex(&vertex_name(0));

    let extra = (edge_factor - 1.0).max(0.0);

    for i in 1..n {
        let to = vertex_name(i);
        let mut sources = HashSet::new();

        sources.insert(rng.gen_range(0..i));

        // Fractional part of `extra` is applied as a probability
        let mut wanted = extra.floor() as usize;
        if rng.gen_bool(extra.fract()) {
            wanted += 1;
        }
        for _ in 0..wanted.min(i.saturating_sub(1)) {
            sources.insert(rng.gen_range(0..i));
        }

        let mut sources: Vec<usize> = sources.into_iter().collect();
        sources.sort_unstable();
        for from in sources {
            let length = rng.gen_range(1.0..100.0);
            graph.register_edge(&vertex_name(from), &to, length)?;
        }
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid DAG where each cell links right and down.
///
/// The top-left cell is the source. Right edges have length 1.0 and down edges 1.5.
pub fn generate_grid_dag(width: usize, height: usize) -> Result<NamedGraph<f64>> {
    let mut graph = NamedGraph::new();
    let cell = |x: usize, y: usize| format!("r{:04}c{:04}", y, x);

    if width == 0 || height == 0 {
        return Ok(graph);
    }
    graph.add_vertex(&cell(0, 0));

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.register_edge(&cell(x, y), &cell(x + 1, y), 1.0)?;
            }
            if y + 1 < height {
                graph.register_edge(&cell(x, y), &cell(x, y + 1), 1.5)?;
            }
        }
    }

    Ok(graph)
}
