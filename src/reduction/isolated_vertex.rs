use super::*;
use log::debug;

/// An active vertex without active neighbors can only be dominated by itself.
/// Uncovered vertices of this kind are added to the solution; covered ones are simply dropped.
pub struct RuleIsolatedVertex;

impl ReductionRule<ReducedGraph> for RuleIsolatedVertex {
    const NAME: &str = "RuleIsolatedVertex";

    fn apply_rule(graph: &mut ReducedGraph, solution: &mut DominatingSet) -> NumNodes {
        let mut reductions = 0;

        for u in graph.vertices() {
            if !graph.is_active(u) || graph.active_degree_of(u) > 0 {
                continue;
            }

            if !graph.is_covered(u) {
                debug!("{}: select isolated vertex {u}", Self::NAME);
                solution.add_node(u);
            }

            graph.deactivate(u);
            reductions += 1;
        }

        reductions
    }
}
