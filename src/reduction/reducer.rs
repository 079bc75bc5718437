use super::*;

use log::info;
use serde::Serialize;
use std::marker::PhantomData;

/// How often a single rule was invoked and how many reductions it produced in total
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleUsage {
    pub rule: &'static str,
    pub calls: u32,
    pub reductions: u64,
}

/// Accounting of one kernelization run; rules appear in the order of their first call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReductionStats {
    pub rounds: u32,
    pub rules: Vec<RuleUsage>,
}

impl ReductionStats {
    fn record(&mut self, rule: &'static str, reductions: NumNodes) {
        if let Some(usage) = self.rules.iter_mut().find(|r| r.rule == rule) {
            usage.calls += 1;
            usage.reductions += reductions as u64;
        } else {
            self.rules.push(RuleUsage {
                rule,
                calls: 1,
                reductions: reductions as u64,
            });
        }
    }

    pub fn reductions_of(&self, rule: &str) -> u64 {
        self.rules
            .iter()
            .find(|r| r.rule == rule)
            .map_or(0, |r| r.reductions)
    }

    pub fn total_reductions(&self) -> u64 {
        self.rules.iter().map(|r| r.reductions).sum()
    }

    /// `rounds` followed by the names of all rules, comma separated
    pub fn to_csv_header(&self) -> String {
        std::iter::once("rounds")
            .chain(self.rules.iter().map(|r| r.rule))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Number of rounds followed by the reductions per rule, matching [`ReductionStats::to_csv_header`]
    pub fn to_csv_row(&self) -> String {
        std::iter::once(self.rounds as u64)
            .chain(self.rules.iter().map(|r| r.reductions))
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub struct Reducer<G> {
    stats: ReductionStats,
    _graph: PhantomData<G>,
}

impl<G> Default for Reducer<G> {
    fn default() -> Self {
        Self {
            stats: Default::default(),
            _graph: Default::default(),
        }
    }
}

impl<G: RemainingSize> Reducer<G> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn stats(&self) -> &ReductionStats {
        &self.stats
    }

    pub fn into_stats(self) -> ReductionStats {
        self.stats
    }

    /// Apply the rule `R` once and print out some statistics.
    /// Returns the number of reductions the rule reported.
    pub fn apply_rule<R: ReductionRule<G>>(
        &mut self,
        graph: &mut G,
        solution: &mut DominatingSet,
    ) -> NumNodes {
        let before = graph.remaining_size();
        let before_in_domset = solution.len();

        let reductions = R::apply_rule(graph, solution);

        let after = graph.remaining_size();
        let delta_in_domset = solution.len() - before_in_domset;

        info!(
            "{} reductions: {reductions}, {}: {} -> {}, {}: {} -> {}, |D| += {delta_in_domset}",
            R::NAME,
            G::LABELS[0],
            before[0],
            after[0],
            G::LABELS[1],
            before[1],
            after[1],
        );

        self.stats.record(R::NAME, reductions);
        reductions
    }

    /// Apply the rule `R` until it reports that no more change is possible.
    /// Returns the number of applications of the rule
    pub fn apply_rule_exhaustively<R: ReductionRule<G>>(
        &mut self,
        graph: &mut G,
        solution: &mut DominatingSet,
    ) -> NumNodes {
        let mut iters = 1;

        while self.apply_rule::<R>(graph, solution) > 0 {
            iters += 1;
        }

        info!("{} applied exhaustively {iters} times", R::NAME);
        iters
    }

    /// Calls `round` until it reports zero reductions or `max_rounds` rounds were carried out.
    /// Returns the total number of reductions.
    fn run_rounds(
        &mut self,
        max_rounds: Option<u32>,
        mut round: impl FnMut(&mut Self) -> NumNodes,
    ) -> NumNodes {
        let mut total = 0;

        while max_rounds.is_none_or(|max| self.stats.rounds < max) {
            self.stats.rounds += 1;
            let reductions = round(self);
            total += reductions;

            if reductions == 0 {
                break;
            }
        }

        info!(
            "Kernelization stopped after {} rounds with {total} reductions",
            self.stats.rounds
        );
        total
    }
}

impl Reducer<ReducedGraph> {
    /// Applies the vertex rules in a fixed order until a full round changes nothing
    pub fn kernelize(
        &mut self,
        graph: &mut ReducedGraph,
        solution: &mut DominatingSet,
        max_rounds: Option<u32>,
    ) -> NumNodes {
        self.run_rounds(max_rounds, |reducer| {
            reducer.apply_rule::<RuleIsolatedVertex>(graph, solution)
                + reducer.apply_rule::<RuleSingleNeighbor>(graph, solution)
                + reducer.apply_rule::<RuleDominatingVertex>(graph, solution)
        })
    }
}

impl Reducer<ReducedHypergraph> {
    /// Applies the hitting-set rules in a fixed order until a full round changes nothing
    pub fn kernelize(
        &mut self,
        graph: &mut ReducedHypergraph,
        solution: &mut DominatingSet,
        max_rounds: Option<u32>,
    ) -> NumNodes {
        self.run_rounds(max_rounds, |reducer| {
            reducer.apply_rule::<RuleIsolatedElement>(graph, solution)
                + reducer.apply_rule::<RuleSingleElement>(graph, solution)
                + reducer.apply_rule::<RuleDominatingEdge>(graph, solution)
                + reducer.apply_rule::<RuleDominatingElement>(graph, solution)
                + reducer.apply_rule::<RuleCounting>(graph, solution)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn stats_accounting() {
        let mut stats = ReductionStats::default();
        stats.record("A", 3);
        stats.record("B", 0);
        stats.record("A", 2);
        stats.rounds = 2;

        assert_eq!(stats.reductions_of("A"), 5);
        assert_eq!(stats.reductions_of("B"), 0);
        assert_eq!(stats.reductions_of("C"), 0);
        assert_eq!(stats.total_reductions(), 5);
        assert_eq!(stats.rules[0].calls, 2);

        assert_eq!(stats.to_csv_header(), "rounds,A,B");
        assert_eq!(stats.to_csv_row(), "2,5,0");

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"rule\":\"A\""));
        assert!(json.contains("\"rounds\":2"));
    }

    #[test]
    fn kernelize_path_graph() {
        let mut graph = path_graph(6);
        let mut solution = DominatingSet::new(6);

        let mut reducer = Reducer::<ReducedGraph>::new();
        let reductions = reducer.kernelize(&mut graph, &mut solution, None);

        assert!(reductions > 0);
        assert_eq!(graph.number_of_active_vertices(), 0);
        assert!(solution.is_valid(&path_graph(6)));
        assert_eq!(solution.len(), 2);

        let stats = reducer.into_stats();
        assert!(stats.rounds >= 2);
        assert_eq!(
            stats.to_csv_header(),
            "rounds,RuleIsolatedVertex,RuleSingleNeighbor,RuleDominatingVertex"
        );
    }

    #[test]
    fn exhaustive_application() {
        let mut graph = star_graph(5);
        let mut solution = DominatingSet::new(6);

        let mut reducer = Reducer::<ReducedGraph>::new();
        let iters = reducer.apply_rule_exhaustively::<RuleDominatingVertex>(&mut graph, &mut solution);

        assert_eq!(iters, 6);
        assert_eq!(reducer.stats().reductions_of(RuleDominatingVertex::NAME), 5);
        assert_eq!(graph.number_of_active_vertices(), 1);
    }

    #[test]
    fn max_rounds_is_respected() {
        let mut graph = path_graph(30);
        let mut solution = DominatingSet::new(30);

        let mut reducer = Reducer::<ReducedGraph>::new();
        reducer.kernelize(&mut graph, &mut solution, Some(1));
        assert_eq!(reducer.stats().rounds, 1);
        assert_eq!(reducer.stats().rules.iter().map(|r| r.calls).max(), Some(1));
    }

    #[test]
    fn kernelize_hypergraph_is_exact() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x5eed_1234);

        for (graph, _) in generate_random_graph_stream(&mut rng, 12).take(200) {
            let mut hypergraph = ReducedHypergraph::from_closed_neighborhoods(&graph);
            let optimum = brute_force_hitting_set(&hypergraph).unwrap();

            let mut solution = DominatingSet::new(graph.number_of_nodes());
            Reducer::<ReducedHypergraph>::new().kernelize(
                &mut hypergraph,
                &mut solution,
                None,
            );

            assert!(!hypergraph.is_infeasible());
            let residual = brute_force_hitting_set(&hypergraph).unwrap();
            assert_eq!(solution.len() + residual.len(), optimum.len());

            let mut completed = solution.clone();
            completed.add_nodes(residual);
            assert!(completed.is_valid(&graph));
        }
    }
}
