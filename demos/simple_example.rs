use bucket_sssp::algorithm::path_to;
use bucket_sssp::graph::Graph;
use bucket_sssp::{solve, Dijkstra, NamedGraph, RelaxationEngine};

fn main() -> bucket_sssp::Result<()> {
    // Create a simple directed graph
    let mut graph = NamedGraph::new();

    // Add edges with lengths
    graph.register_edge("A", "B", 1.0)?;
    graph.register_edge("A", "C", 2.0)?;
    graph.register_edge("B", "D", 1.0)?;
    graph.register_edge("C", "D", 0.5)?;
    graph.register_edge("D", "E", 3.0)?;
    graph.register_edge("B", "E", 5.0)?;

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let outcome = solve(&mut graph, &RelaxationEngine::new())?;
    println!("\nConverged after {} passes:", outcome.passes);

    for (name, vertex) in graph.vertices() {
        match vertex.accumulated_length() {
            None => println!("  No path to {}", name),
            Some(length) => println!(
                "  Vertex {}: length = {:.1}, path = {:?}",
                name,
                length,
                path_to(&graph, name)?
            ),
        }
    }

    // Compare with classic Dijkstra's algorithm
    Dijkstra::new().verify(&graph, 1e-12)?;
    println!("\n{} agrees with every length", Dijkstra::new().name());

    Ok(())
}
