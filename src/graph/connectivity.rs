use super::*;

/// The connected components of a graph, each relabeled to `0..size` as a graph of its own.
/// `original_index[i][j]` is the id in the original graph of vertex `j` of `components[i]`.
#[derive(Clone, Debug)]
pub struct ComponentDecomposition {
    pub components: Vec<ReducedGraph>,
    pub original_index: Vec<Vec<Node>>,
}

impl ComponentDecomposition {
    pub fn number_of_components(&self) -> usize {
        self.components.len()
    }

    /// Maps vertex `u` of component `component` back to its original id
    pub fn original_id(&self, component: usize, u: Node) -> Node {
        self.original_index[component][u as usize]
    }
}

impl ReducedGraph {
    /// Splits the graph (including inactive vertices and all edges) into connected components
    /// using a depth-first traversal started at every unvisited vertex in increasing order.
    /// Within a component, vertices are numbered in the order they were visited.
    pub fn connected_components(&self) -> ComponentDecomposition {
        const UNASSIGNED: Node = Node::MAX;

        let mut new_id = vec![UNASSIGNED; self.len()];
        let mut original_index = Vec::new();
        let mut stack = Vec::new();

        for root in self.vertices() {
            if new_id[root as usize] != UNASSIGNED {
                continue;
            }

            let mut members: Vec<Node> = Vec::new();
            stack.push(root);

            while let Some(u) = stack.pop() {
                if new_id[u as usize] != UNASSIGNED {
                    continue;
                }

                new_id[u as usize] = members.len() as Node;
                members.push(u);

                // reversed, so that neighbors are visited in list order
                let neighbors: Vec<Node> = self.neighbors_of(u).collect();
                stack.extend(
                    neighbors
                        .into_iter()
                        .rev()
                        .filter(|&v| new_id[v as usize] == UNASSIGNED),
                );
            }

            original_index.push(members);
        }

        let components = original_index
            .iter()
            .map(|members| {
                let edges = members.iter().flat_map(|&u| {
                    let new_id = &new_id;
                    self.neighbors_of(u)
                        .filter(move |&v| u < v)
                        .map(move |v| Edge(new_id[u as usize], new_id[v as usize]))
                });

                ReducedGraph::from_edges(members.len() as NumNodes, edges)
            })
            .collect();

        ComponentDecomposition {
            components,
            original_index,
        }
    }
}
