use std::{fmt, ops::Range};

use super::*;
use crate::errors::{InputError, InvariantCheck, InvariantError};

/// # ReducedGraph
///
/// An undirected graph whose vertices can be logically removed ("deactivated")
/// without touching the edge set. Each neighbor list is kept partitioned into
/// neighbors that are still active and those that are not, see [`ActivePartitionSet`].
///
/// The graph is built once by adding edges and afterwards only mutated through
/// [`ReducedGraph::deactivate`], [`ReducedGraph::activate`] and [`ReducedGraph::mark_covered`].
#[derive(Clone, Debug)]
pub struct ReducedGraph {
    partition: ActivePartitionSet,
    states: Vec<VertexState>,
    number_of_edges: NumEdges,
}

impl ReducedGraph {
    /// Creates a graph with `n` isolated, active vertices
    pub fn new(n: NumNodes) -> Self {
        Self {
            partition: ActivePartitionSet::new(n),
            states: vec![VertexState::Active; n as usize],
            number_of_edges: 0,
        }
    }

    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    /// Builds a graph from edges with 1-based endpoints, as stored in `.gr` files.
    /// Rejects endpoints outside of `1..=n` and self loops.
    pub fn try_from_one_based_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self, InputError> {
        let mut graph = Self::new(n);

        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            let edge = Edge::from_one_based(u, v)
                .filter(|Edge(a, b)| *a < n && *b < n)
                .ok_or(InputError::NodeOutOfRange {
                    id: if (1..=n).contains(&u) { v } else { u },
                    number_of_nodes: n,
                })?;

            if edge.is_loop() {
                return Err(InputError::SelfLoop(edge.0));
            }

            graph.add_edge(edge.0, edge.1);
        }

        Ok(graph)
    }

    /// Adds the undirected edge {u, v}; parallel edges are kept as such.
    /// ** Panics if u == v, u, v >= n, or if an endpoint is not active **
    pub fn add_edge(&mut self, u: Node, v: Node) {
        assert!(self.is_active(u) && self.is_active(v));
        self.partition.add_pair(u, v);
        self.number_of_edges += 1;
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v);
        }
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.states.len() as NumNodes
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    pub fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    pub fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Each edge reported once, as (u, v) with u < v; parallel edges are repeated
    pub fn ordered_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&v| u < v)
                .map(move |v| Edge(u, v))
        })
    }

    pub fn state_of(&self, u: Node) -> VertexState {
        self.states[u as usize]
    }

    pub fn is_active(&self, u: Node) -> bool {
        self.states[u as usize].is_active()
    }

    pub fn is_covered(&self, u: Node) -> bool {
        self.states[u as usize].is_covered()
    }

    pub fn active_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.is_active(u))
    }

    pub fn number_of_active_vertices(&self) -> NumNodes {
        self.states.iter().filter(|s| s.is_active()).count() as NumNodes
    }

    pub fn number_of_covered_vertices(&self) -> NumNodes {
        self.states.iter().filter(|s| s.is_covered()).count() as NumNodes
    }

    pub fn neighborhood(&self, u: Node) -> &PartitionedNeighborhood {
        self.partition.neighborhood(u)
    }

    /// All neighbors, active or not
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighborhood(u).nodes()
    }

    pub fn active_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighborhood(u).active_nodes()
    }

    pub fn inactive_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighborhood(u).inactive_nodes()
    }

    /// `u` followed by all of its neighbors
    pub fn closed_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        std::iter::once(u).chain(self.neighbors_of(u))
    }

    /// Total degree, i.e. counting inactive neighbors as well
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.neighborhood(u).len()
    }

    pub fn active_degree_of(&self, u: Node) -> NumNodes {
        self.neighborhood(u).active_len()
    }

    pub fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    pub fn has_neighbor(&self, u: Node, v: Node) -> bool {
        self.neighborhood(u).contains(v)
    }

    /// Removes `u` logically: it moves into the inactive segment of every neighbor.
    /// ** Panics if `u` is already inactive **
    pub fn deactivate(&mut self, u: Node) {
        assert!(self.is_active(u), "node {u} is already inactive");
        self.partition.hide(u);
        self.states[u as usize] = VertexState::Deactivated;
    }

    /// Exact inverse of [`ReducedGraph::deactivate`]; the vertex comes back uncovered.
    /// ** Panics if `u` is active **
    pub fn activate(&mut self, u: Node) {
        assert!(!self.is_active(u), "node {u} is already active");
        self.states[u as usize] = VertexState::Active;

        let states = &self.states;
        self.partition.reveal(u, |v| states[v as usize].is_active());
    }

    /// Records that the domination constraint of `u` is already satisfied.
    /// ** Panics if `u` is inactive **
    pub fn mark_covered(&mut self, u: Node) {
        assert!(self.is_active(u), "cannot cover inactive node {u}");
        self.states[u as usize] = VertexState::Covered;
    }
}

impl InvariantCheck<InvariantError> for ReducedGraph {
    fn is_correct(&self) -> Result<(), InvariantError> {
        self.partition
            .mirrors_are_consistent()
            .map_err(|(node, position)| InvariantError::BrokenMirror { node, position })?;

        for u in self.vertices() {
            let list = self.neighborhood(u);

            if let Some(neighbor) = list
                .active_nodes()
                .find(|&v| !self.is_active(v))
                .or_else(|| list.inactive_nodes().find(|&v| self.is_active(v)))
            {
                return Err(InvariantError::WrongSide { node: u, neighbor });
            }
        }

        Ok(())
    }
}

/// Dumps every neighbor list (1-based) with a `|` at its split offset;
/// inactive vertices are prefixed with `//`.
impl fmt::Display for ReducedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Vertices: {}", self.number_of_nodes())?;
        writeln!(f, "Total Edges: {}", self.number_of_edges())?;

        for u in self.vertices() {
            let list = self.neighborhood(u);

            if !self.is_active(u) {
                write!(f, "// ")?;
            }
            write!(f, "Node {} (Offset: {}):", u + 1, list.offset())?;

            for v in list.inactive_nodes() {
                write!(f, " {}", v + 1)?;
            }
            write!(f, " |")?;
            for v in list.active_nodes() {
                write!(f, " {}", v + 1)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
