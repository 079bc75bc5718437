use super::*;

/// One half-edge: the neighbor and the position of the twin half-edge within
/// the neighbor's own list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeWithCrossPos {
    pub node: Node,
    pub cross_pos: NumNodes,
}

/// The neighbor list of a single owner, split at `offset`:
///  - `entries[..offset]` are neighbors that are currently inactive,
///  - `entries[offset..]` are neighbors that are currently active.
///
/// Entries are never removed; toggling only moves them across the split point.
#[derive(Debug, Clone, Default)]
pub struct PartitionedNeighborhood {
    entries: Vec<NodeWithCrossPos>,
    offset: NumNodes,
}

impl PartitionedNeighborhood {
    pub fn len(&self) -> NumNodes {
        self.entries.len() as NumNodes
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the first active entry
    pub fn offset(&self) -> NumNodes {
        self.offset
    }

    pub fn active_len(&self) -> NumNodes {
        self.len() - self.offset
    }

    pub fn entries(&self) -> &[NodeWithCrossPos] {
        &self.entries
    }

    pub fn active_entries(&self) -> &[NodeWithCrossPos] {
        &self.entries[self.offset as usize..]
    }

    pub fn inactive_entries(&self) -> &[NodeWithCrossPos] {
        &self.entries[..self.offset as usize]
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.entries.iter().map(|x| x.node)
    }

    pub fn active_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.active_entries().iter().map(|x| x.node)
    }

    pub fn inactive_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.inactive_entries().iter().map(|x| x.node)
    }

    pub fn contains(&self, v: Node) -> bool {
        self.nodes().any(|u| u == v)
    }

    pub fn contains_active(&self, v: Node) -> bool {
        self.active_nodes().any(|u| u == v)
    }

    fn push(&mut self, entry: NodeWithCrossPos) -> NumNodes {
        self.entries.push(entry);
        self.len() - 1
    }
}

/// # ActivePartitionSet
///
/// Arena of [`PartitionedNeighborhood`]s, one per owner, for an undirected multigraph.
/// Every half-edge knows where its twin lives, so moving an owner's entry
/// across the split point of a neighbor's list costs O(1) and hiding/revealing
/// an owner costs O(deg).
///
/// Invariant (checked by [`ActivePartitionSet::mirrors_are_consistent`]): for every owner `u` and
/// position `p` with `entries[p] = (v, c)`, the list of `v` has `(u, p)` at position `c`.
#[derive(Debug, Clone, Default)]
pub struct ActivePartitionSet {
    lists: Vec<PartitionedNeighborhood>,
}

impl ActivePartitionSet {
    pub fn new(number_of_owners: NumNodes) -> Self {
        Self {
            lists: vec![Default::default(); number_of_owners as usize],
        }
    }

    pub fn number_of_owners(&self) -> NumNodes {
        self.lists.len() as NumNodes
    }

    pub fn neighborhood(&self, u: Node) -> &PartitionedNeighborhood {
        &self.lists[u as usize]
    }

    /// Appends `v` to the active segment of `u` and vice versa.
    /// Both endpoints must currently be active, otherwise the appended entries
    /// would sit on the wrong side of the split.
    /// ** Panics if u == v **
    pub fn add_pair(&mut self, u: Node, v: Node) {
        assert_ne!(u, v, "self loops are not supported");

        let pos_in_u = self.lists[u as usize].len();
        let pos_in_v = self.lists[v as usize].len();

        self.lists[u as usize].push(NodeWithCrossPos {
            node: v,
            cross_pos: pos_in_v,
        });
        self.lists[v as usize].push(NodeWithCrossPos {
            node: u,
            cross_pos: pos_in_u,
        });
    }

    /// Moves `u` into the inactive segment of each of its neighbors.
    /// The list of `u` itself is left untouched.
    pub fn hide(&mut self, u: Node) {
        for i in 0..self.lists[u as usize].len() {
            let NodeWithCrossPos { node: v, cross_pos } = self.lists[u as usize].entries[i as usize];

            let boundary = self.lists[v as usize].offset;
            debug_assert!(cross_pos >= boundary, "{u} is already hidden from {v}");

            self.relocate(v, cross_pos, boundary);
            self.lists[v as usize].offset = boundary + 1;
        }
    }

    /// Inverse of [`ActivePartitionSet::hide`]: readmits `u` into the active segment of each
    /// neighbor and rebuilds the split of `u`'s own list from scratch, moving all neighbors
    /// for which `is_active` fails into the inactive segment.
    pub fn reveal(&mut self, u: Node, is_active: impl Fn(Node) -> bool) {
        self.lists[u as usize].offset = 0;

        for i in 0..self.lists[u as usize].len() {
            let NodeWithCrossPos { node: v, cross_pos } = self.lists[u as usize].entries[i as usize];

            let v_offset = self.lists[v as usize].offset;
            assert!(v_offset > 0 && cross_pos < v_offset, "{u} is not hidden from {v}");

            self.relocate(v, cross_pos, v_offset - 1);
            self.lists[v as usize].offset = v_offset - 1;

            if !is_active(v) {
                let boundary = self.lists[u as usize].offset;
                self.relocate(u, i, boundary);
                self.lists[u as usize].offset = boundary + 1;
            }
        }
    }

    /// Swaps two entries of `owner` and repairs the cross positions of their twins.
    /// This is the only place where entries change their position.
    fn relocate(&mut self, owner: Node, from: NumNodes, to: NumNodes) {
        if from == to {
            return;
        }

        let list = &mut self.lists[owner as usize].entries;
        list.swap(from as usize, to as usize);

        let at_from = list[from as usize];
        let at_to = list[to as usize];

        self.lists[at_from.node as usize].entries[at_from.cross_pos as usize].cross_pos = from;
        self.lists[at_to.node as usize].entries[at_to.cross_pos as usize].cross_pos = to;
    }

    /// Returns the first half-edge whose twin does not point back, if any
    pub fn mirrors_are_consistent(&self) -> Result<(), (Node, NumNodes)> {
        for (u, list) in self.lists.iter().enumerate() {
            if list.offset > list.len() {
                return Err((u as Node, list.offset));
            }

            for (p, entry) in list.entries.iter().enumerate() {
                let twin = self.lists[entry.node as usize]
                    .entries
                    .get(entry.cross_pos as usize)
                    .copied();

                if twin
                    != Some(NodeWithCrossPos {
                        node: u as Node,
                        cross_pos: p as NumNodes,
                    })
                {
                    return Err((u as Node, p as NumNodes));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn build(n: NumNodes, edges: &[(Node, Node)]) -> ActivePartitionSet {
        let mut set = ActivePartitionSet::new(n);
        for &(u, v) in edges {
            set.add_pair(u, v);
        }
        set
    }

    fn assert_matches_brute_force(set: &ActivePartitionSet, edges: &[(Node, Node)], active: &[bool]) {
        assert!(set.mirrors_are_consistent().is_ok());

        for u in 0..set.number_of_owners() {
            let expected_active = edges
                .iter()
                .filter_map(|&(a, b)| {
                    if a == u {
                        Some(b)
                    } else if b == u {
                        Some(a)
                    } else {
                        None
                    }
                })
                .filter(|&v| active[v as usize])
                .sorted()
                .collect_vec();

            let expected_inactive_count = edges
                .iter()
                .filter(|&&(a, b)| (a == u && !active[b as usize]) || (b == u && !active[a as usize]))
                .count();

            let list = set.neighborhood(u);
            assert_eq!(list.active_nodes().sorted().collect_vec(), expected_active);
            assert_eq!(list.inactive_entries().len(), expected_inactive_count);
        }
    }

    #[test]
    fn construction() {
        let edges = [(0, 1), (0, 2), (1, 2), (2, 3)];
        let set = build(4, &edges);

        assert_eq!(set.neighborhood(2).len(), 3);
        assert_eq!(set.neighborhood(2).offset(), 0);
        assert_eq!(set.neighborhood(2).active_nodes().collect_vec(), [0, 1, 3]);
        assert!(set.neighborhood(3).contains(2));
        assert!(!set.neighborhood(3).contains(0));
        assert_matches_brute_force(&set, &edges, &[true; 4]);
    }

    #[test]
    fn hide_and_reveal() {
        let edges = [(0, 1), (0, 2), (1, 2), (2, 3)];
        let mut set = build(4, &edges);
        let mut active = [true; 4];

        set.hide(2);
        active[2] = false;
        assert_eq!(set.neighborhood(0).inactive_nodes().collect_vec(), [2]);
        assert_eq!(set.neighborhood(3).active_len(), 0);
        assert!(!set.neighborhood(1).contains_active(2));
        assert_matches_brute_force(&set, &edges, &active);

        set.hide(0);
        active[0] = false;
        assert_matches_brute_force(&set, &edges, &active);

        set.reveal(2, |v| active[v as usize]);
        active[2] = true;
        assert_eq!(set.neighborhood(2).inactive_nodes().collect_vec(), [0]);
        assert_matches_brute_force(&set, &edges, &active);
    }

    #[test]
    fn random_toggles() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x5eed);

        for _ in 0..50 {
            let n = rng.gen_range(2..30);
            let edges = (0..rng.gen_range(0..4 * n))
                .filter_map(|_| {
                    let u = rng.gen_range(0..n);
                    let v = rng.gen_range(0..n);
                    (u != v).then_some((u, v))
                })
                .collect_vec();

            let mut set = build(n, &edges);
            let mut active = vec![true; n as usize];

            for _ in 0..200 {
                let u = rng.gen_range(0..n);
                if active[u as usize] {
                    set.hide(u);
                    active[u as usize] = false;
                } else {
                    active[u as usize] = true;
                    set.reveal(u, |v| active[v as usize]);
                }

                assert_matches_brute_force(&set, &edges, &active);
            }
        }
    }

    #[test]
    fn parallel_edges() {
        let edges = [(0, 1), (0, 1), (1, 2)];
        let mut set = build(3, &edges);
        let mut active = [true; 3];

        set.hide(0);
        active[0] = false;
        assert_eq!(set.neighborhood(1).offset(), 2);
        assert_matches_brute_force(&set, &edges, &active);

        active[0] = true;
        set.reveal(0, |v| active[v as usize]);
        assert_eq!(set.neighborhood(1).offset(), 0);
        assert_matches_brute_force(&set, &edges, &active);
    }

    #[test]
    #[should_panic]
    fn self_loop() {
        ActivePartitionSet::new(2).add_pair(1, 1);
    }
}
