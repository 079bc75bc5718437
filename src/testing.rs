use super::{
    errors::InvariantCheck,
    graph::*,
    hypergraph::ReducedHypergraph,
    reduction::ReductionRule,
    utils::DominatingSet,
};
use itertools::Itertools as _;
use rand::Rng;

pub fn path_graph(n: NumNodes) -> ReducedGraph {
    ReducedGraph::from_edges(n, (1..n).map(|u| (u - 1, u)))
}

/// Vertex 0 is the center, vertices `1..=leaves` the leaves
pub fn star_graph(leaves: NumNodes) -> ReducedGraph {
    ReducedGraph::from_edges(leaves + 1, (1..=leaves).map(|u| (0, u)))
}

/// Random sparse graphs together with their closed-neighborhood hypergraph, in which a few
/// elements have already been selected or excluded. Instances that cannot be completed
/// anymore are skipped.
pub fn generate_random_graph_stream(
    rng: &mut impl Rng,
    n: NumNodes,
) -> impl Iterator<Item = (ReducedGraph, ReducedHypergraph)> {
    assert!(n > 0);

    (0..).filter_map(move |i| {
        let graph = ReducedGraph::random_gnp(rng, n, 3. / n as f64);
        let mut hypergraph = ReducedHypergraph::from_closed_neighborhoods(&graph);

        for _ in 0..i % 3 {
            let e = rng.gen_range(0..n);
            if hypergraph.is_usable(e) {
                hypergraph.select(e);
            }
        }

        for _ in 0..i % 4 {
            let e = rng.gen_range(0..n);
            if hypergraph.is_usable(e) {
                hypergraph.exclude(e);
            }
        }

        // reject if infeasible
        if hypergraph
            .open_constraints()
            .any(|i| hypergraph.usable_elements_of(i).next().is_none())
        {
            return None;
        }

        Some((graph, hypergraph))
    })
}

/// Smallest set of usable elements hitting every open constraint, found by enumerating all
/// subsets. Returns `None` if some open constraint has no usable element.
pub fn brute_force_hitting_set(hypergraph: &ReducedHypergraph) -> Option<Vec<Node>> {
    let usable = hypergraph.usable_variables().collect_vec();
    assert!(usable.len() < 24, "instance too large for brute force");

    let masks = hypergraph
        .open_constraints()
        .map(|i| {
            hypergraph.usable_elements_of(i).fold(0u32, |mask, e| {
                mask | (1 << usable.binary_search(&e).unwrap_or_default())
            })
        })
        .collect_vec();

    if masks.contains(&0) {
        return None;
    }

    let best = (0u32..(1 << usable.len()))
        .filter(|&subset| masks.iter().all(|&m| m & subset != 0))
        .min_by_key(|subset| subset.count_ones())?;

    Some(
        usable
            .iter()
            .enumerate()
            .filter(|&(k, _)| best & (1 << k) != 0)
            .map(|(_, &e)| e)
            .collect(),
    )
}

/// Size of a minimum dominating set of the whole graph, ignoring vertex states
pub fn brute_force_domset_size(graph: &ReducedGraph) -> usize {
    brute_force_hitting_set(&ReducedHypergraph::from_closed_neighborhoods(graph))
        .map_or(0, |solution| solution.len())
}

/// Applies `R` once to random instances and checks that the forced elements together with an
/// optimal solution of the residual instance form an optimal solution of the input.
/// Stops after the rule changed `attempts` instances; fails if it never applied.
pub fn test_before_and_after_rule<R: ReductionRule<ReducedHypergraph>>(
    rng: &mut impl Rng,
    nodes: NumNodes,
    attempts: u32,
) {
    let mut num_applicable = 0;
    let max_attempts = attempts * 50;

    for (_, mut hypergraph) in generate_random_graph_stream(rng, nodes).take(max_attempts as usize)
    {
        let original = hypergraph.clone();
        let optimum = brute_force_hitting_set(&hypergraph).unwrap();

        let mut solution = DominatingSet::new(nodes);
        let reductions = R::apply_rule(&mut hypergraph, &mut solution);
        num_applicable += (reductions > 0) as u32;

        assert!(hypergraph.is_correct().is_ok());
        assert!(!hypergraph.is_infeasible(), "{}", R::NAME);
        assert!(solution.iter().all(|e| original.is_usable(e)));

        let residual = brute_force_hitting_set(&hypergraph).unwrap();
        assert_eq!(
            optimum.len(),
            solution.len() + residual.len(),
            "{}: optimum {:?}, forced {:?}, residual {:?}\n before: {original}\n after: {hypergraph}",
            R::NAME,
            optimum,
            solution.iter().collect_vec(),
            residual,
        );

        if num_applicable >= attempts {
            break;
        }
    }

    assert!(num_applicable > 0, "{} never applied", R::NAME);
}
