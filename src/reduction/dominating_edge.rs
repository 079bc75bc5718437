use super::*;
use itertools::Itertools;
use log::debug;

/// If the usable elements of an open constraint `j` form a subset of those of another open
/// constraint `i`, every solution hitting `j` also hits `i`, and `i` becomes redundant.
/// Among constraints with identical element sets, the one with the largest id survives.
pub struct RuleDominatingEdge;

/// True if the sorted, duplicate free `small` is contained in the sorted `large`
pub(super) fn is_sorted_subset(small: &[Node], large: &[Node]) -> bool {
    if small.len() > large.len() {
        return false;
    }

    let mut large = large.iter();
    small.iter().all(|x| large.any(|y| y == x))
}

impl ReductionRule<ReducedHypergraph> for RuleDominatingEdge {
    const NAME: &str = "RuleDominatingEdge";

    fn apply_rule(graph: &mut ReducedHypergraph, _solution: &mut DominatingSet) -> NumNodes {
        // element usability does not change during this rule
        let usable: Vec<Vec<Node>> = (0..graph.number_of_hyperedges())
            .map(|i| graph.usable_elements_of(i).sorted_unstable().dedup().collect())
            .collect();

        let mut last_checked_for = vec![Node::MAX; usable.len()];
        let mut reductions = 0;

        for i in 0..graph.number_of_hyperedges() {
            if !graph.is_open(i) || usable[i as usize].is_empty() {
                continue;
            }

            let superset = &usable[i as usize];
            let mut witness = None;

            'search: for &e in superset {
                for &j in graph.hyperedges_of(e) {
                    if j == i || last_checked_for[j as usize] == i || !graph.is_open(j) {
                        continue;
                    }
                    last_checked_for[j as usize] = i;

                    if is_sorted_subset(&usable[j as usize], superset) {
                        witness = Some(j);
                        break 'search;
                    }
                }
            }

            if let Some(j) = witness {
                debug!("{}: hyperedge {i} is implied by {j}", Self::NAME);
                graph.mark_redundant(i);
                reductions += 1;
            }
        }

        reductions
    }
}
