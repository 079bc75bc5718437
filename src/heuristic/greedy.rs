use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{graph::*, hypergraph::ReducedHypergraph, utils::DominatingSet};

/// # The basic Greedy-Approximation
///
/// Repeatedly adds the uncovered vertex whose closed neighborhood contains the most uncovered
/// vertices (ties broken by the smallest id) until every vertex is covered.
/// Vertex states of the graph are ignored, i.e. the whole graph is dominated.
///
/// Returns the solution
pub fn greedy_approximation(graph: &ReducedGraph) -> DominatingSet {
    let mut solution = DominatingSet::new(graph.number_of_nodes());
    greedy_extend(graph, &mut solution);
    solution
}

/// Completes a partial solution greedily, see [`greedy_approximation`].
/// Vertices already in `solution` are kept.
pub fn greedy_extend(graph: &ReducedGraph, solution: &mut DominatingSet) {
    let mut covered = solution.compute_covered(graph);

    let score_of = |covered: &[bool], u: Node| {
        graph
            .closed_neighbors_of(u)
            .filter(|&v| !covered[v as usize])
            .count() as NumNodes
    };

    // scores only ever decrease, so outdated entries are fixed lazily when they surface
    let mut heap: BinaryHeap<(NumNodes, Reverse<Node>)> = graph
        .vertices()
        .filter(|&u| !covered[u as usize])
        .map(|u| (score_of(&covered, u), Reverse(u)))
        .collect();

    while let Some((score, Reverse(u))) = heap.pop() {
        if covered[u as usize] {
            continue;
        }

        let current = score_of(&covered, u);
        if current < score {
            heap.push((current, Reverse(u)));
            continue;
        }

        solution.add_node(u);
        for v in graph.closed_neighbors_of(u) {
            covered[v as usize] = true;
        }
    }
}

/// Greedily hits the remaining open constraints of `hypergraph` with usable elements, always
/// picking the element contained in the most open constraints (ties broken by the smallest id).
/// The picks are appended to `solution`; the hypergraph itself is left untouched.
///
/// Returns false if some open constraint cannot be hit.
pub fn greedy_complete(hypergraph: &ReducedHypergraph, solution: &mut DominatingSet) -> bool {
    let mut residual = hypergraph.clone();

    let score_of = |residual: &ReducedHypergraph, e: Node| {
        residual.open_hyperedges_of(e).count() as NumNodes
    };

    let mut heap: BinaryHeap<(NumNodes, Reverse<Node>)> = residual
        .usable_variables()
        .map(|e| (score_of(&residual, e), Reverse(e)))
        .filter(|&(score, _)| score > 0)
        .collect();

    while let Some((score, Reverse(e))) = heap.pop() {
        let current = score_of(&residual, e);
        if current == 0 {
            continue;
        }

        if current < score {
            heap.push((current, Reverse(e)));
            continue;
        }

        residual.select(e);
        solution.insert_node(e);
    }

    residual.number_of_open_constraints() == 0
}
