//! Hitting-set view of the dominating set problem.
//!
//! Each hyperedge is a *constraint* (at least one of its elements must be chosen) and each
//! element is a *variable* (it may be chosen). For a graph, hyperedge `u` is the closed
//! neighborhood of `u`, so constraints and variables share the id space of the vertices.

use std::fmt;

use crate::{
    errors::{InputError, InvariantCheck, InvariantError},
    graph::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ConstraintState {
    /// Still needs some chosen element
    #[default]
    Open,
    /// Contains a selected element
    Satisfied,
    /// Implied by another open constraint
    Redundant,
    /// No usable element is left to satisfy it
    Infeasible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VariableState {
    #[default]
    Usable,
    /// Part of the solution
    Selected,
    /// Some optimal solution avoids it
    Excluded,
}

#[derive(Clone, Debug)]
pub struct ReducedHypergraph {
    hyperedges: Vec<Vec<Node>>,
    element_to_hyperedges: Vec<Vec<Node>>,
    constraints: Vec<ConstraintState>,
    variables: Vec<VariableState>,
}

impl ReducedHypergraph {
    /// Creates `num_hyperedges` empty hyperedges over a universe of `num_elements` elements
    pub fn new(num_hyperedges: NumNodes, num_elements: NumNodes) -> Self {
        Self {
            hyperedges: vec![Vec::new(); num_hyperedges as usize],
            element_to_hyperedges: vec![Vec::new(); num_elements as usize],
            constraints: vec![ConstraintState::Open; num_hyperedges as usize],
            variables: vec![VariableState::Usable; num_elements as usize],
        }
    }

    /// One hyperedge per vertex: the vertex itself followed by its neighbors.
    /// The activation state of `graph` is ignored.
    pub fn from_closed_neighborhoods(graph: &ReducedGraph) -> Self {
        let n = graph.number_of_nodes();
        let mut result = Self::new(n, n);

        for u in graph.vertices() {
            result.hyperedges[u as usize].extend(graph.closed_neighbors_of(u));
        }
        result.rebuild_reverse_index();

        result
    }

    /// Creates one hyperedge per element containing only the element itself; neighborhoods are
    /// then grown with [`ReducedHypergraph::add_edge`] and the reverse index built with
    /// [`ReducedHypergraph::rebuild_reverse_index`].
    pub fn with_singleton_hyperedges(n: NumNodes) -> Self {
        let mut result = Self::new(n, n);
        for u in 0..n {
            result.hyperedges[u as usize].push(u);
        }
        result.rebuild_reverse_index();
        result
    }

    /// Adds the 1-based graph edge {u, v} to both closed neighborhoods.
    /// The reverse index is stale until [`ReducedHypergraph::rebuild_reverse_index`] is called.
    pub fn add_edge(&mut self, u: Node, v: Node) {
        assert!(u > 0 && v > 0, "ids are 1-based");
        self.hyperedges[u as usize - 1].push(v - 1);
        self.hyperedges[v as usize - 1].push(u - 1);
    }

    /// Builds the instance from explicit sets over `0..num_elements` and derives the reverse index.
    pub fn from_sets(num_elements: NumNodes, sets: Vec<Vec<Node>>) -> Result<Self, InputError> {
        if let Some(&id) = sets.iter().flatten().find(|&&e| e >= num_elements) {
            return Err(InputError::NodeOutOfRange {
                id,
                number_of_nodes: num_elements,
            });
        }

        let mut result = Self::new(sets.len() as NumNodes, num_elements);
        result.hyperedges = sets;
        result.rebuild_reverse_index();
        Ok(result)
    }

    /// Builds the instance from sets together with an explicitly given reverse index
    /// `part_of[e]`, which must list exactly the hyperedges containing `e`.
    pub fn with_reverse_index(
        sets: Vec<Vec<Node>>,
        part_of: Vec<Vec<Node>>,
    ) -> Result<Self, InputError> {
        let inconsistent = InputError::InconsistentReverseIndex {
            hyperedges: sets.len() as NumNodes,
            elements: part_of.len() as NumNodes,
        };

        let mut result = Self::from_sets(part_of.len() as NumNodes, sets)?;

        if part_of.iter().flatten().any(|&i| i as usize >= result.hyperedges.len()) {
            return Err(inconsistent);
        }

        result.element_to_hyperedges = part_of;
        result.is_correct().map_err(|_| inconsistent)?;

        Ok(result)
    }

    /// Recomputes `element -> hyperedges` from the hyperedges
    pub fn rebuild_reverse_index(&mut self) {
        for list in &mut self.element_to_hyperedges {
            list.clear();
        }

        for (i, edge) in self.hyperedges.iter().enumerate() {
            for &e in edge {
                self.element_to_hyperedges[e as usize].push(i as Node);
            }
        }
    }

    pub fn number_of_hyperedges(&self) -> NumNodes {
        self.hyperedges.len() as NumNodes
    }

    pub fn number_of_elements(&self) -> NumNodes {
        self.element_to_hyperedges.len() as NumNodes
    }

    pub fn hyperedge(&self, i: Node) -> &[Node] {
        &self.hyperedges[i as usize]
    }

    pub fn hyperedges_of(&self, e: Node) -> &[Node] {
        &self.element_to_hyperedges[e as usize]
    }

    pub fn constraint_state(&self, i: Node) -> ConstraintState {
        self.constraints[i as usize]
    }

    pub fn variable_state(&self, e: Node) -> VariableState {
        self.variables[e as usize]
    }

    pub fn is_open(&self, i: Node) -> bool {
        self.constraints[i as usize] == ConstraintState::Open
    }

    pub fn is_usable(&self, e: Node) -> bool {
        self.variables[e as usize] == VariableState::Usable
    }

    pub fn open_constraints(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.number_of_hyperedges()).filter(|&i| self.is_open(i))
    }

    pub fn usable_variables(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.number_of_elements()).filter(|&e| self.is_usable(e))
    }

    pub fn number_of_open_constraints(&self) -> NumNodes {
        self.open_constraints().count() as NumNodes
    }

    pub fn number_of_usable_variables(&self) -> NumNodes {
        self.usable_variables().count() as NumNodes
    }

    /// Elements of hyperedge `i` that may still be chosen
    pub fn usable_elements_of(&self, i: Node) -> impl Iterator<Item = Node> + '_ {
        self.hyperedge(i).iter().copied().filter(|&e| self.is_usable(e))
    }

    /// Hyperedges containing `e` that still need to be satisfied
    pub fn open_hyperedges_of(&self, e: Node) -> impl Iterator<Item = Node> + '_ {
        self.hyperedges_of(e).iter().copied().filter(|&i| self.is_open(i))
    }

    /// True if some constraint was found to be unsatisfiable
    pub fn is_infeasible(&self) -> bool {
        self.constraints.contains(&ConstraintState::Infeasible)
    }

    /// Chooses `e`; every open hyperedge containing it becomes satisfied.
    /// ** Panics if `e` is not usable **
    pub fn select(&mut self, e: Node) {
        assert!(self.is_usable(e), "element {e} cannot be selected");
        self.variables[e as usize] = VariableState::Selected;

        for &i in &self.element_to_hyperedges[e as usize] {
            if self.constraints[i as usize] == ConstraintState::Open {
                self.constraints[i as usize] = ConstraintState::Satisfied;
            }
        }
    }

    /// ** Panics if `e` is not usable **
    pub fn exclude(&mut self, e: Node) {
        assert!(self.is_usable(e), "element {e} is already unusable");
        self.variables[e as usize] = VariableState::Excluded;
    }

    /// ** Panics if `i` is not open **
    pub fn mark_redundant(&mut self, i: Node) {
        assert!(self.is_open(i), "hyperedge {i} is not open");
        self.constraints[i as usize] = ConstraintState::Redundant;
    }

    /// ** Panics if `i` is not open **
    pub fn mark_infeasible(&mut self, i: Node) {
        assert!(self.is_open(i), "hyperedge {i} is not open");
        self.constraints[i as usize] = ConstraintState::Infeasible;
    }
}

impl InvariantCheck<InvariantError> for ReducedHypergraph {
    /// Verifies that `hyperedges` and `element_to_hyperedges` describe the same incidences
    fn is_correct(&self) -> Result<(), InvariantError> {
        let mut forward: Vec<(Node, Node)> = self
            .hyperedges
            .iter()
            .enumerate()
            .flat_map(|(i, edge)| edge.iter().map(move |&e| (e, i as Node)))
            .collect();

        let mut backward: Vec<(Node, Node)> = self
            .element_to_hyperedges
            .iter()
            .enumerate()
            .flat_map(|(e, list)| list.iter().map(move |&i| (e as Node, i)))
            .collect();

        forward.sort_unstable();
        backward.sort_unstable();

        if forward == backward {
            return Ok(());
        }

        let (element, hyperedge) = forward
            .iter()
            .zip(&backward)
            .find(|(a, b)| a != b)
            .map(|(a, b)| *a.min(b))
            .or_else(|| {
                forward
                    .get(backward.len())
                    .or(backward.get(forward.len()))
                    .copied()
            })
            .unwrap_or_default();

        Err(InvariantError::ReverseIndexMismatch { element, hyperedge })
    }
}

/// Lists every hyperedge (1-based); non-open constraints are prefixed with `C`,
/// unusable variables with `V`.
impl fmt::Display for ReducedHypergraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hypergraph:")?;
        for (i, edge) in self.hyperedges.iter().enumerate() {
            if !self.is_open(i as Node) {
                write!(f, "C ")?;
            }
            if (i as NumNodes) < self.number_of_elements() && !self.is_usable(i as Node) {
                write!(f, "V ")?;
            }

            write!(f, "Edge {}:", i + 1)?;
            for v in edge {
                write!(f, " {}", v + 1)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
