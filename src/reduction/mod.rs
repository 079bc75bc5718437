//! Safe reduction rules for both instance models and the fixpoint driver applying them.
//!
//! Rules on the [`ReducedGraph`] only deactivate vertices or mark them covered; rules on the
//! [`ReducedHypergraph`] select or exclude elements and close constraints. Every vertex or
//! element forced into the solution is appended to a [`DominatingSet`].

pub mod counting;
pub use counting::RuleCounting;
pub mod dominating_edge;
pub use dominating_edge::RuleDominatingEdge;
pub mod dominating_element;
pub use dominating_element::RuleDominatingElement;
pub mod dominating_vertex;
pub use dominating_vertex::RuleDominatingVertex;
pub mod isolated_element;
pub use isolated_element::RuleIsolatedElement;
pub mod isolated_vertex;
pub use isolated_vertex::RuleIsolatedVertex;
pub mod reducer;
pub use reducer::{Reducer, ReductionStats, RuleUsage};
pub mod single_element;
pub use single_element::RuleSingleElement;
pub mod single_neighbor;
pub use single_neighbor::RuleSingleNeighbor;

use crate::{
    graph::{Node, NumNodes, ReducedGraph, VertexState},
    hypergraph::ReducedHypergraph,
    utils::DominatingSet,
};

pub trait ReductionRule<G> {
    const NAME: &str;

    /// Applies the rule in a single pass over the instance and appends every forced
    /// vertex to `solution`. Returns the number of reductions carried out; zero
    /// signals that the rule found nothing to do.
    fn apply_rule(graph: &mut G, solution: &mut DominatingSet) -> NumNodes;
}

/// The two quantities the [`Reducer`] reports before and after each rule
pub trait RemainingSize {
    const LABELS: [&str; 2];

    fn remaining_size(&self) -> [NumNodes; 2];
}

impl RemainingSize for ReducedGraph {
    const LABELS: [&str; 2] = ["active", "covered"];

    fn remaining_size(&self) -> [NumNodes; 2] {
        [
            self.number_of_active_vertices(),
            self.number_of_covered_vertices(),
        ]
    }
}

impl RemainingSize for ReducedHypergraph {
    const LABELS: [&str; 2] = ["open", "usable"];

    fn remaining_size(&self) -> [NumNodes; 2] {
        [
            self.number_of_open_constraints(),
            self.number_of_usable_variables(),
        ]
    }
}
