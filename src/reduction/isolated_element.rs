use super::*;
use log::warn;

/// An open constraint without any usable element can never be satisfied; it is marked
/// infeasible so that the instance reports [`ReducedHypergraph::is_infeasible`].
pub struct RuleIsolatedElement;

impl ReductionRule<ReducedHypergraph> for RuleIsolatedElement {
    const NAME: &str = "RuleIsolatedElement";

    fn apply_rule(graph: &mut ReducedHypergraph, _solution: &mut DominatingSet) -> NumNodes {
        let isolated: Vec<_> = graph
            .open_constraints()
            .filter(|&i| graph.usable_elements_of(i).next().is_none())
            .collect();

        for &i in &isolated {
            warn!("{}: hyperedge {i} cannot be hit by any usable element", Self::NAME);
            graph.mark_infeasible(i);
        }

        isolated.len() as NumNodes
    }
}
