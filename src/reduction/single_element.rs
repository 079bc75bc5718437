use super::*;
use log::debug;

/// An open constraint with exactly one usable element forces that element into the solution.
pub struct RuleSingleElement;

impl RuleSingleElement {
    /// The only usable element of hyperedge `i`, if there is exactly one
    fn single_usable_element(graph: &ReducedHypergraph, i: Node) -> Option<Node> {
        let mut usable = graph.usable_elements_of(i);
        let first = usable.next()?;
        usable.all(|e| e == first).then_some(first)
    }
}

impl ReductionRule<ReducedHypergraph> for RuleSingleElement {
    const NAME: &str = "RuleSingleElement";

    fn apply_rule(graph: &mut ReducedHypergraph, solution: &mut DominatingSet) -> NumNodes {
        let mut reductions = 0;

        for i in 0..graph.number_of_hyperedges() {
            // earlier selections in this pass may have satisfied `i` already
            if !graph.is_open(i) {
                continue;
            }

            if let Some(e) = Self::single_usable_element(graph, i) {
                debug!("{}: hyperedge {i} forces {e}", Self::NAME);
                graph.select(e);
                solution.insert_node(e);
                reductions += 1;
            }
        }

        reductions
    }
}
