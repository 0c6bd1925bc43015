use std::collections::HashMap;

use hampath_core::{find_paths, find_paths_with, BestPath, Graph, GraphError, Recorder};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

fn random_symmetric(n: usize, rng: &mut Xoshiro256PlusPlus) -> Vec<Vec<f64>> {
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = f64::from(rng.gen_range(1..100u32));
            rows[i][j] = d;
            rows[j][i] = d;
        }
    }
    rows
}

fn load_fixture() -> Graph {
    let raw = include_str!("fixtures/8n_distances.json");
    let rows: Vec<Vec<f64>> = serde_json::from_str(raw).unwrap();
    Graph::new(rows).unwrap()
}

/// Cheapest Hamiltonian path from `start`, by exhaustive enumeration.
fn exhaustive_best(graph: &Graph, start: usize) -> f64 {
    fn go(graph: &Graph, path: &mut Vec<usize>, cost: f64, best: &mut f64) {
        if path.len() == graph.vertex_count() {
            *best = best.min(cost);
            return;
        }
        let last = path[path.len() - 1];
        for v in 0..graph.vertex_count() {
            if path.contains(&v) {
                continue;
            }
            path.push(v);
            go(graph, path, cost + graph.distance(last, v), best);
            path.pop();
        }
    }

    let mut best = f64::INFINITY;
    go(graph, &mut vec![start], 0.0, &mut best);
    best
}

fn assert_hamiltonian(n: usize, start: usize, best: &BestPath) {
    assert_eq!(best.path.len(), n);
    assert_eq!(best.path[0], start);
    let mut seen = vec![false; n];
    for &v in &best.path {
        assert!(!seen[v], "vertex {v} visited twice in {:?}", best.path);
        seen[v] = true;
    }
}

#[test]
fn every_start_ends_with_a_hamiltonian_path() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for n in 1..=7 {
        let graph = Graph::new(random_symmetric(n, &mut rng)).unwrap();
        let outcome = find_paths(&graph);

        assert_eq!(outcome.results.len(), n);
        for (start, slot) in outcome.results.iter().enumerate() {
            let best = slot.as_ref().expect("complete graph always yields a path");
            assert_hamiltonian(n, start, best);
            assert_eq!(best.cost, graph.path_cost(&best.path));
        }
    }
}

#[test]
fn pruning_bounds_never_increase() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
    let graph = Graph::new(random_symmetric(6, &mut rng)).unwrap();
    let mut recorder = Recorder::default();
    find_paths_with(&graph, &mut recorder);

    let mut bounds: HashMap<(usize, usize), f64> = HashMap::new();
    for event in &recorder.events {
        let key = (event.start, event.path.len());
        if let Some(&previous) = bounds.get(&key) {
            assert!(event.cost <= previous, "{key:?} rose from {previous} to {}", event.cost);
        }
        bounds.insert(key, event.cost);
    }
}

#[test]
fn retained_path_is_the_last_complete_acceptance() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    let graph = Graph::new(random_symmetric(6, &mut rng)).unwrap();
    let mut recorder = Recorder::default();
    let outcome = find_paths_with(&graph, &mut recorder);

    for (start, slot) in outcome.results.iter().enumerate() {
        let last = recorder
            .events
            .iter()
            .filter(|e| e.start == start && e.path.len() == 6)
            .last()
            .unwrap();
        let best = slot.as_ref().unwrap();
        assert_eq!(best.path, last.path);
        assert_eq!(best.cost, last.cost);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let graph = load_fixture();

    let mut first = Recorder::default();
    let a = find_paths_with(&graph, &mut first);
    let mut second = Recorder::default();
    let b = find_paths_with(&graph, &mut second);

    assert_eq!(first.events, second.events);
    assert_eq!(a.results, b.results);
    assert_eq!(a.stats, b.stats);
}

#[test]
fn eight_vertex_fixture() {
    let graph = load_fixture();
    let mut recorder = Recorder::default();
    let outcome = find_paths_with(&graph, &mut recorder);

    let expected: [(&[usize], f64); 8] = [
        (&[0, 3, 7, 4, 2, 6, 1, 5], 141.8),
        (&[1, 0, 3, 7, 4, 2, 6, 5], 131.7),
        (&[2, 4, 5, 0, 3, 7, 1, 6], 141.7),
        (&[3, 7, 4, 2, 6, 0, 5, 1], 113.2),
        (&[4, 2, 6, 0, 3, 7, 1, 5], 130.1),
        (&[5, 0, 3, 7, 4, 2, 6, 1], 105.3),
        (&[6, 2, 4, 5, 0, 3, 7, 1], 94.7),
        (&[7, 1, 0, 3, 6, 2, 4, 5], 134.9),
    ];
    for (start, (path, cost)) in expected.iter().enumerate() {
        let best = outcome.results[start].as_ref().unwrap();
        assert_eq!(best.path.as_slice(), *path, "start {start}");
        assert!((best.cost - cost).abs() < 1e-9, "start {start}: {}", best.cost);
    }

    assert_eq!(recorder.events.len(), 430);
    assert_eq!(outcome.stats.accepted, 430);
    assert_eq!(outcome.stats.cache_entries, 1101);
}

#[test]
fn finds_the_optimum_when_no_prefix_misleads() {
    let graph = Graph::new(vec![
        vec![0.0, 1.0, 4.0, 6.0],
        vec![1.0, 0.0, 2.0, 5.0],
        vec![4.0, 2.0, 0.0, 3.0],
        vec![6.0, 5.0, 3.0, 0.0],
    ])
    .unwrap();
    let outcome = find_paths(&graph);

    let zero = outcome.results[0].as_ref().unwrap();
    assert_eq!(zero.path, vec![0, 1, 2, 3]);
    assert_eq!(zero.cost, 6.0);
    assert_eq!(zero.cost, exhaustive_best(&graph, 0));

    let costs: Vec<f64> = outcome
        .results
        .iter()
        .map(|slot| slot.as_ref().unwrap().cost)
        .collect();
    assert_eq!(costs, vec![6.0, 8.0, 9.0, 6.0]);
}

#[test]
fn shared_length_bound_can_miss_the_optimum() {
    // [0,3] costs 2 but the bound for length 2 is already 1 from [0,2],
    // so the optimal [0,3,2,1] (cost 5) is never explored.
    let graph = Graph::new(vec![
        vec![0.0, 5.0, 1.0, 2.0],
        vec![5.0, 0.0, 2.0, 9.0],
        vec![1.0, 2.0, 0.0, 1.0],
        vec![2.0, 9.0, 1.0, 0.0],
    ])
    .unwrap();
    let outcome = find_paths(&graph);

    let zero = outcome.results[0].as_ref().unwrap();
    assert_eq!(zero.path, vec![0, 1, 2, 3]);
    assert_eq!(zero.cost, 8.0);
    assert_eq!(exhaustive_best(&graph, 0), 5.0);

    let paths: Vec<Vec<usize>> = outcome
        .results
        .into_iter()
        .map(|slot| slot.unwrap().path)
        .collect();
    assert_eq!(
        paths,
        vec![vec![0, 1, 2, 3], vec![1, 2, 3, 0], vec![2, 3, 0, 1], vec![3, 0, 2, 1]]
    );
}

#[test]
fn malformed_matrices_fail_at_construction() {
    assert_eq!(Graph::new(Vec::new()).unwrap_err(), GraphError::Empty);
    assert!(matches!(
        Graph::new(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0]]),
        Err(GraphError::NotSquare { row: 0, len: 3, expected: 2 })
    ));
}
