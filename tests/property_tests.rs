//! Property-based tests for the relaxation engine.
//!
//! Random single-source DAGs are built from proptest strategies and every result is
//! compared against Dijkstra's algorithm.

use proptest::prelude::*;
use proptest::sample::Index;

use bucket_sssp::algorithm::{path_length, path_to};
use bucket_sssp::graph::generators::{generate_random_dag, vertex_name};
use bucket_sssp::{solve, BucketIndex, Dijkstra, Error, NamedGraph, PassMode, RelaxationEngine};

/// Strategy for single-source DAGs: vertex `i > 0` always has an edge from some `j < i`,
/// and every extra edge points from the lower index to the higher one.
fn single_source_dag() -> impl Strategy<Value = NamedGraph<f64>> {
    (2usize..30)
        .prop_flat_map(|n| {
            (
                prop::collection::vec((any::<Index>(), 0.1f64..50.0), n - 1),
                prop::collection::vec((any::<Index>(), any::<Index>(), 0.1f64..50.0), 0..3 * n),
                Just(n),
            )
        })
        .prop_map(|(parents, extra, n)| {
            let mut graph = NamedGraph::new();
            for (i, (parent, length)) in parents.into_iter().enumerate() {
                let child = i + 1;
                graph
                    .register_edge(&vertex_name(parent.index(child)), &vertex_name(child), length)
                    .unwrap();
            }
            for (a, b, length) in extra {
                let (a, b) = (a.index(n), b.index(n));
                if a != b {
                    graph
                        .register_edge(&vertex_name(a.min(b)), &vertex_name(a.max(b)), length)
                        .unwrap();
                }
            }
            graph
        })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn lengths_are_minimal(mut graph in single_source_dag()) {
        solve(&mut graph, &RelaxationEngine::new()).unwrap();
        prop_assert!(graph.unresolved().is_empty());
        prop_assert!(Dijkstra::new().verify(&graph, 1e-9).is_ok());
    }

    #[test]
    fn paths_sum_to_lengths(mut graph in single_source_dag()) {
        solve(&mut graph, &RelaxationEngine::new()).unwrap();
        let names: Vec<String> = graph.names().map(str::to_owned).collect();
        let source = vertex_name(0);

        for name in names {
            let path = path_to(&graph, &name).unwrap();
            prop_assert_eq!(path.first(), Some(&source));
            prop_assert_eq!(path.last(), Some(&name));

            let expected = graph.accumulated_length(&name).unwrap().unwrap();
            let walked = path_length(&graph, &path).unwrap();
            prop_assert!(close(expected, walked), "{}: {} vs {}", name, expected, walked);
        }
    }

    #[test]
    fn converged_graph_is_a_fixed_point(mut graph in single_source_dag()) {
        let engine = RelaxationEngine::new();
        solve(&mut graph, &engine).unwrap();

        let buckets = BucketIndex::build(&graph);
        let stats = engine.run_pass(&mut graph, &buckets);
        prop_assert_eq!(stats.changed, 0);
        prop_assert_eq!(stats.unsatisfied, 0);
    }

    #[test]
    fn snapshot_mode_agrees_with_sequential(graph in single_source_dag()) {
        let mut sequential = graph.clone();
        let mut snapshot = graph;
        solve(&mut sequential, &RelaxationEngine::new()).unwrap();
        solve(&mut snapshot, &RelaxationEngine::new().with_pass_mode(PassMode::Snapshot)).unwrap();

        for ((name, ours), (_, theirs)) in sequential.vertices().zip(snapshot.vertices()) {
            let (ours, theirs) = (ours.accumulated_length().unwrap(), theirs.accumulated_length().unwrap());
            prop_assert!(close(ours, theirs), "{}: {} vs {}", name, ours, theirs);
        }
    }

    #[test]
    fn unreachable_cycles_stall(mut graph in single_source_dag(), cycle_len in 1usize..5) {
        let cycle: Vec<String> = (0..cycle_len).map(|i| format!("zz{}", i)).collect();
        for i in 0..cycle_len {
            graph.register_edge(&cycle[i], &cycle[(i + 1) % cycle_len], 1.0).unwrap();
        }

        match solve(&mut graph, &RelaxationEngine::new()) {
            Err(Error::PartiallyUnreachable { unresolved, .. }) => prop_assert_eq!(unresolved, cycle),
            other => prop_assert!(false, "expected PartiallyUnreachable, got {:?}", other),
        }
    }

    #[test]
    fn duplicated_source_is_rejected(mut graph in single_source_dag()) {
        graph.register_edge("extra-source", &vertex_name(1), 1.0).unwrap();

        match solve(&mut graph, &RelaxationEngine::new()) {
            Err(Error::MultipleSourcesFound { sources }) => {
                prop_assert_eq!(sources, vec!["extra-source".to_string(), vertex_name(0)]);
            }
            other => prop_assert!(false, "expected MultipleSourcesFound, got {:?}", other),
        }
        prop_assert!(graph.vertices().all(|(_, v)| !v.is_resolved()));
    }
}

#[test]
fn test_generated_dags_agree_with_dijkstra() {
    for seed in 0..5 {
        let mut graph = generate_random_dag(500, 2.5, seed).unwrap();
        let outcome = solve(&mut graph, &RelaxationEngine::new()).unwrap();

        assert!(outcome.passes >= 2);
        Dijkstra::new().verify(&graph, 1e-9).unwrap();
    }
}
