pub mod active_partition;
pub mod analytics;
pub mod connectivity;
pub mod edge;
#[cfg(test)]
pub mod gnp;
pub mod reduced_graph;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;

pub use active_partition::*;
pub use analytics::*;
pub use connectivity::*;
pub use edge::*;
#[cfg(test)]
pub use gnp::*;
pub use reduced_graph::*;

/// Lifecycle of a vertex during one kernelization run.
///
/// The only transitions taken by reduction rules are `Active -> Covered`,
/// `Active -> Deactivated` and `Covered -> Deactivated`. A covered vertex
/// is still structurally active (it may be chosen and it still shows up in
/// the active segments of its neighbors), but its own domination constraint
/// is already satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VertexState {
    #[default]
    Active,
    Covered,
    Deactivated,
}

impl VertexState {
    pub fn is_active(self) -> bool {
        self != VertexState::Deactivated
    }

    pub fn is_covered(self) -> bool {
        self == VertexState::Covered
    }
}
