use super::{dominating_edge::is_sorted_subset, *};
use itertools::Itertools;
use log::debug;

/// If every open constraint containing the usable element `j` also contains another usable
/// element `i`, then `i` is at least as useful as `j` and `j` is excluded. Usable elements
/// without any open constraint are excluded as well.
///
/// Among elements hitting identical sets of constraints, the one with the smallest id survives.
pub struct RuleDominatingElement;

impl ReductionRule<ReducedHypergraph> for RuleDominatingElement {
    const NAME: &str = "RuleDominatingElement";

    fn apply_rule(graph: &mut ReducedHypergraph, _solution: &mut DominatingSet) -> NumNodes {
        // constraint states do not change during this rule
        let open: Vec<Vec<Node>> = (0..graph.number_of_elements())
            .map(|e| graph.open_hyperedges_of(e).sorted_unstable().dedup().collect())
            .collect();

        let mut reductions = 0;

        for e in 0..graph.number_of_elements() {
            if graph.is_usable(e) && open[e as usize].is_empty() {
                debug!("{}: {e} hits no open hyperedge", Self::NAME);
                graph.exclude(e);
                reductions += 1;
            }
        }

        for i in 0..graph.number_of_elements() {
            if !graph.is_usable(i) {
                continue;
            }

            let superset = &open[i as usize];
            let dominated = superset
                .iter()
                .flat_map(|&c| graph.usable_elements_of(c))
                .filter(|&j| j != i && is_sorted_subset(&open[j as usize], superset))
                .unique()
                .collect_vec();

            for j in dominated {
                debug!("{}: {i} dominates {j}", Self::NAME);
                graph.exclude(j);
                reductions += 1;
            }
        }

        reductions
    }
}
