use crate::graph::*;
use std::io::Write;

/// Accumulates the vertices chosen by reduction rules and heuristics, in the order they
/// were chosen.
#[derive(Clone, Debug)]
pub struct DominatingSet {
    number_of_nodes: NumNodes,
    set: Vec<Node>,
    in_set: Vec<bool>,
}

impl DominatingSet {
    pub fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            number_of_nodes,
            set: Vec::new(),
            in_set: vec![false; number_of_nodes as usize],
        }
    }

    /// Appends a node to the dominating set, even if it is already contained.
    ///
    /// # Example
    /// ```
    /// use dskern::utils::DominatingSet;
    /// let mut domset = DominatingSet::new(5);
    /// domset.add_node(0);
    /// domset.add_node(0);
    /// assert_eq!(domset.len(), 2);
    /// ```
    pub fn add_node(&mut self, node: Node) {
        assert!(node < self.number_of_nodes);
        self.set.push(node);
        self.in_set[node as usize] = true;
    }

    /// Adds multiple nodes to the dominating set.
    ///
    /// # Example
    /// ```
    /// use dskern::utils::DominatingSet;
    /// let mut domset = DominatingSet::new(5);
    /// domset.add_nodes([0, 1, 2]);
    /// assert_eq!(domset.len(), 3);
    /// ```
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for u in nodes {
            self.add_node(u);
        }
    }

    /// Adds a node unless it is already contained; returns true if it was added.
    ///
    /// # Example
    /// ```
    /// use dskern::utils::DominatingSet;
    /// let mut domset = DominatingSet::new(5);
    /// assert!(domset.insert_node(3));
    /// assert!(!domset.insert_node(3));
    /// assert_eq!(domset.len(), 1);
    /// ```
    pub fn insert_node(&mut self, node: Node) -> bool {
        if self.is_in_domset(node) {
            return false;
        }
        self.add_node(node);
        true
    }

    pub fn is_in_domset(&self, node: Node) -> bool {
        self.in_set[node as usize]
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns true if the dominating set is empty.
    ///
    /// # Example
    /// ```
    /// use dskern::utils::DominatingSet;
    /// let mut domset = DominatingSet::new(5);
    /// assert!(domset.is_empty());
    /// domset.add_node(0);
    /// assert!(!domset.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns an iterator over the nodes in the order they were added.
    ///
    /// # Example
    /// ```
    /// use dskern::utils::DominatingSet;
    /// let mut domset = DominatingSet::new(5);
    /// domset.add_nodes([4, 1, 2]);
    /// let mut iter = domset.iter();
    /// assert_eq!(iter.next(), Some(4));
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.set.iter().copied()
    }

    /// Writes the dominating set to a writer using 1-based indexing,
    /// as required by the PACE competition.
    ///
    /// ```
    /// use dskern::utils::DominatingSet;
    /// let mut domset = DominatingSet::new(5);
    /// domset.add_node(2);
    /// domset.add_node(4);
    ///
    /// let mut buffer: Vec<u8> = Vec::new(); // implements Write
    /// domset.write(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"2\n3\n5\n");
    /// ```
    pub fn write<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(&mut writer, "{}", self.set.len())?;
        for u in &self.set {
            writeln!(&mut writer, "{}", u + 1)?;
        }
        Ok(())
    }

    /// Computes the set of nodes covered by the dominating set.
    pub fn compute_covered(&self, graph: &ReducedGraph) -> Vec<bool> {
        let mut covered = vec![false; graph.len()];

        for &u in &self.set {
            for v in graph.closed_neighbors_of(u) {
                covered[v as usize] = true;
            }
        }

        covered
    }

    /// Returns true if the dominating set is valid, i.e. it covers all nodes.
    pub fn is_valid(&self, graph: &ReducedGraph) -> bool {
        self.compute_covered(graph).into_iter().all(|x| x)
    }
}
