//! Read-only structural statistics of a [`ReducedGraph`].
//!
//! All quantities are computed over the complete graph as constructed, i.e. they ignore
//! which vertices were deactivated by reduction rules.

use itertools::Itertools;
use serde::Serialize;

use super::*;

#[cfg(feature = "par")]
use rayon::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphStats {
    pub nodes: NumNodes,
    pub edges: NumEdges,
    pub active_nodes: NumNodes,
    pub avg_degree: f64,
    pub std_dev_degree: f64,
    pub max_degree: NumNodes,
    pub triangles: u64,
    pub density: f64,
    pub lower_bound: f64,
}

impl ReducedGraph {
    pub fn degree_sequence(&self) -> Vec<NumNodes> {
        self.degrees().collect()
    }

    pub fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Mean and (population) standard deviation of the degrees; both are 0 for the empty graph
    pub fn degree_stats(&self) -> (f64, f64) {
        if self.is_empty() {
            return (0.0, 0.0);
        }

        let n = self.len() as f64;
        let avg = self.degrees().map(|d| d as f64).sum::<f64>() / n;
        let variance = self
            .degrees()
            .map(|d| (d as f64 - avg) * (d as f64 - avg))
            .sum::<f64>()
            / n;

        (avg, variance.sqrt())
    }

    /// `2m / (n(n-1))`; graphs with fewer than two vertices have density 0
    pub fn density(&self) -> f64 {
        let n = self.number_of_nodes() as f64;
        if n < 2.0 {
            return 0.0;
        }

        2.0 * self.number_of_edges() as f64 / (n * (n - 1.0))
    }

    /// Counts unordered triples `u < v < w` that are pairwise adjacent; parallel edges do not
    /// contribute additional triangles.
    pub fn count_triangles(&self) -> u64 {
        let adj = self.sorted_simple_adjacency();

        let count_at = |u: usize| -> u64 {
            let mut count = 0;
            for &v in adj[u].iter().filter(|&&v| v as usize > u) {
                for &w in adj[v as usize].iter().filter(|&&w| w > v) {
                    count += adj[u].binary_search(&w).is_ok() as u64;
                }
            }
            count
        };

        #[cfg(feature = "par")]
        return (0..adj.len()).into_par_iter().map(count_at).sum();

        #[cfg(not(feature = "par"))]
        return (0..adj.len()).map(count_at).sum();
    }

    /// Returns `Σ_u 1 / max{deg(v) + 1 : v ∈ N[u]}`.
    ///
    /// Every vertex of a dominating set `D` covers at most `deg + 1` vertices; charging each
    /// vertex `u` to one of its dominators shows that the sum is at most `|D|`. The bound is
    /// cheap and valid, but far from tight on irregular graphs.
    pub fn efficiency_lower_bound(&self) -> f64 {
        let contribution = |u: Node| -> f64 {
            let max_deg = self
                .closed_neighbors_of(u)
                .map(|v| self.degree_of(v) + 1)
                .max()
                .unwrap_or(1);
            1.0 / max_deg as f64
        };

        #[cfg(feature = "par")]
        return self.vertices().into_par_iter().map(contribution).sum();

        #[cfg(not(feature = "par"))]
        return self.vertices().map(contribution).sum();
    }

    pub fn stats(&self) -> GraphStats {
        let (avg_degree, std_dev_degree) = self.degree_stats();

        GraphStats {
            nodes: self.number_of_nodes(),
            edges: self.number_of_edges(),
            active_nodes: self.number_of_active_vertices(),
            avg_degree,
            std_dev_degree,
            max_degree: self.max_degree(),
            triangles: self.count_triangles(),
            density: self.density(),
            lower_bound: self.efficiency_lower_bound(),
        }
    }

    fn sorted_simple_adjacency(&self) -> Vec<Vec<Node>> {
        self.vertices()
            .map(|u| self.neighbors_of(u).sorted_unstable().dedup().collect())
            .collect()
    }
}
