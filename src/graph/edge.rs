use super::*;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Converts an edge given with 1-based ids (as found in `.gr` files) into 0-based ids.
    /// Returns `None` if one of the endpoints is zero.
    pub fn from_one_based(u: Node, v: Node) -> Option<Self> {
        Some(Edge(u.checked_sub(1)?, v.checked_sub(1)?))
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
