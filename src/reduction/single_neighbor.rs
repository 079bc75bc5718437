use super::*;
use itertools::Itertools;
use log::debug;

/// An uncovered vertex `u` with a single active neighbor `v` has to be dominated by `u` or `v`,
/// and `v` dominates a superset of what `u` dominates. Hence `v` is selected, both are
/// deactivated and the remaining active neighbors of `v` are marked covered.
pub struct RuleSingleNeighbor;

impl RuleSingleNeighbor {
    /// Applies the rule at vertex `u` only. Returns the selected neighbor if the rule fired.
    pub fn try_apply_at(
        graph: &mut ReducedGraph,
        solution: &mut DominatingSet,
        u: Node,
    ) -> Option<Node> {
        if graph.state_of(u) != VertexState::Active || graph.active_degree_of(u) != 1 {
            return None;
        }

        let v = graph.active_neighbors_of(u).next()?;
        let dominated = graph.active_neighbors_of(v).filter(|&w| w != u).collect_vec();

        debug!("{}: select {v} for leaf {u}", Self::NAME);
        solution.add_node(v);
        graph.deactivate(v);
        graph.deactivate(u);

        for w in dominated {
            graph.mark_covered(w);
        }

        Some(v)
    }
}

impl ReductionRule<ReducedGraph> for RuleSingleNeighbor {
    const NAME: &str = "RuleSingleNeighbor";

    fn apply_rule(graph: &mut ReducedGraph, solution: &mut DominatingSet) -> NumNodes {
        graph
            .vertices()
            .filter(|&u| Self::try_apply_at(graph, solution, u).is_some())
            .count() as NumNodes
    }
}
