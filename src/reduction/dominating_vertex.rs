use super::*;
use itertools::Itertools;
use log::debug;
use std::cmp::Reverse;

/// A vertex `u` dominates its neighbor `v` if every other active neighbor of `v` is adjacent
/// to `u` as well; then `v` is deactivated.
///
/// Vertices are processed in descending order of their total degree (ties broken by
/// ascending id). Per vertex `u` at most one neighbor is removed in each pass, so the rule
/// has to be applied repeatedly to reach a fixpoint.
pub struct RuleDominatingVertex;

impl RuleDominatingVertex {
    /// True if all active neighbors of `v` besides `u` occur in the full neighbor list of `u`
    fn dominates(graph: &ReducedGraph, u: Node, v: Node) -> bool {
        let candidates = graph.neighborhood(u);
        graph
            .active_neighbors_of(v)
            .all(|w| w == u || candidates.contains(w))
    }
}

impl ReductionRule<ReducedGraph> for RuleDominatingVertex {
    const NAME: &str = "RuleDominatingVertex";

    fn apply_rule(graph: &mut ReducedGraph, _solution: &mut DominatingSet) -> NumNodes {
        let order = graph
            .active_vertices()
            .sorted_unstable_by_key(|&u| (Reverse(graph.degree_of(u)), u))
            .collect_vec();

        let mut reductions = 0;

        for u in order {
            if !graph.is_active(u) {
                continue;
            }

            let degree = graph.degree_of(u);
            let dominated = graph
                .active_neighbors_of(u)
                .find(|&v| graph.degree_of(v) <= degree && Self::dominates(graph, u, v));

            if let Some(v) = dominated {
                debug!("{}: {u} dominates {v}", Self::NAME);
                graph.deactivate(v);
                reductions += 1;
            }
        }

        reductions
    }
}
