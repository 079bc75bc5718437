use super::*;
use fxhash::FxHashSet;
use itertools::Itertools;
use log::debug;

/// Counting argument for a usable element `x`.
///
/// Let `R` be the open constraints containing `x` and `P` the distinct partners `y` of `x`
/// in constraints of `R` with exactly two usable elements `{x, y}`. Any solution avoiding `x`
/// contains all of `P`. Swapping `P` for `x` leaves only the open constraints outside of `R`
/// that contain a partner unhit; if there are `q < |P|` of them, patching each one costs
/// less than the swap saved, so some optimal solution contains `x`.
///
/// The quantities are recomputed from the current state for every element.
pub struct RuleCounting;

impl RuleCounting {
    /// Returns `(|P|, q)` for element `x`
    pub fn counts(graph: &ReducedHypergraph, x: Node) -> (NumNodes, NumNodes) {
        let around_x: FxHashSet<Node> = graph.open_hyperedges_of(x).collect();

        let partners = around_x
            .iter()
            .filter_map(|&c| {
                let usable = graph.usable_elements_of(c).unique().collect_vec();
                match usable[..] {
                    [a, b] => Some(if a == x { b } else { a }),
                    _ => None,
                }
            })
            .unique()
            .collect_vec();

        let outside: FxHashSet<Node> = partners
            .iter()
            .flat_map(|&y| graph.open_hyperedges_of(y))
            .filter(|c| !around_x.contains(c))
            .collect();

        (partners.len() as NumNodes, outside.len() as NumNodes)
    }
}

impl ReductionRule<ReducedHypergraph> for RuleCounting {
    const NAME: &str = "RuleCounting";

    fn apply_rule(graph: &mut ReducedHypergraph, solution: &mut DominatingSet) -> NumNodes {
        let mut reductions = 0;

        for x in 0..graph.number_of_elements() {
            if !graph.is_usable(x) {
                continue;
            }

            let (pairs, outside) = Self::counts(graph, x);
            if pairs > 0 && outside < pairs {
                debug!("{}: select {x} (pairs: {pairs}, outside: {outside})", Self::NAME);
                graph.select(x);
                solution.insert_node(x);
                reductions += 1;
            }
        }

        reductions
    }
}
