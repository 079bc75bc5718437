use std::error::Error;

use thiserror::Error;

use crate::graph::{Node, NumEdges, NumNodes};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("half-edge {position} of node {node} has no matching twin")]
    BrokenMirror { node: Node, position: NumNodes },

    #[error("node {node} lists neighbor {neighbor} on the wrong side of its split offset")]
    WrongSide { node: Node, neighbor: Node },

    #[error("element {element} and hyperedge {hyperedge} disagree on membership")]
    ReverseIndexMismatch { element: Node, hyperedge: Node },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("node id {id} is out of range for a graph with {number_of_nodes} nodes")]
    NodeOutOfRange { id: Node, number_of_nodes: NumNodes },

    #[error("self loop at node {0} is not supported")]
    SelfLoop(Node),

    #[error("header announces {expected} edges, but {found} were read")]
    EdgeCountMismatch { expected: NumEdges, found: NumEdges },

    #[error("reverse index over {elements} elements disagrees with the {hyperedges} hyperedges")]
    InconsistentReverseIndex {
        hyperedges: NumNodes,
        elements: NumNodes,
    },
}
