use dskern::{log::build_pace_logger_for_verbosity, prelude::*};
use log::{LevelFilter, info, warn};
use serde::Serialize;
use std::{path::PathBuf, str::FromStr};
use structopt::StructOpt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Model {
    Graph,
    Hypergraph,
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graph" => Ok(Model::Graph),
            "hypergraph" => Ok(Model::Hypergraph),
            _ => Err(format!("unknown model {s:?}; expected graph or hypergraph")),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(about = "Kernelizes a minimum dominating set instance and exports the kernel")]
struct Opts {
    /// PACE `.gr` instance; read from stdin if missing
    #[structopt(short = "i", long, parse(from_os_str))]
    instance: Option<PathBuf>,

    /// Reduce the `graph` directly or its closed-neighborhood `hypergraph`
    #[structopt(long, default_value = "graph")]
    model: Model,

    #[structopt(long)]
    max_rounds: Option<u32>,

    /// Closed neighborhoods in the findminhs format (graph model)
    #[structopt(long, parse(from_os_str))]
    hypergraph: Option<PathBuf>,

    #[structopt(long, parse(from_os_str))]
    set_cover: Option<PathBuf>,

    #[structopt(long, parse(from_os_str))]
    lp: Option<PathBuf>,

    #[structopt(long, parse(from_os_str))]
    ilp: Option<PathBuf>,

    /// Feasibility program for a dominating set of at most this size (graph model)
    #[structopt(long)]
    ilp_check: Option<NumNodes>,

    /// Output path of `--ilp-check`
    #[structopt(long, parse(from_os_str))]
    ilp_check_output: Option<PathBuf>,

    /// Weighted MaxSAT encoding of the residual instance (hypergraph model)
    #[structopt(long, parse(from_os_str))]
    maxsat: Option<PathBuf>,

    /// Print statistics of the instance and the kernelization as JSON
    #[structopt(long)]
    stats: bool,

    /// Complete the forced vertices greedily and print the solution in PACE format
    #[structopt(long)]
    greedy: bool,

    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

#[derive(Serialize)]
struct Report {
    model: &'static str,
    instance: GraphStats,
    reduction: ReductionStats,
    forced: usize,
    remaining: [NumNodes; 2],
    greedy: Option<usize>,
}

fn load_graph(path: &Option<PathBuf>) -> anyhow::Result<ReducedGraph> {
    if let Some(path) = path {
        Ok(ReducedGraph::try_read_pace_file(path)?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(ReducedGraph::try_read_pace(stdin)?)
    }
}

struct Outcome {
    reduction: ReductionStats,
    remaining: [NumNodes; 2],
    forced: usize,
    greedy: Option<usize>,
}

fn not_supported(option: &str, model: Model) {
    warn!("--{option} is not available for the {model:?} model; skipped");
}

fn run_graph_model(
    opts: &Opts,
    mut graph: ReducedGraph,
    solution: &mut DominatingSet,
) -> anyhow::Result<Outcome> {
    let mut reducer = Reducer::<ReducedGraph>::new();
    reducer.kernelize(&mut graph, solution, opts.max_rounds);
    let forced = solution.len();

    if let Some(path) = &opts.hypergraph {
        graph.try_write_hypergraph_file(path)?;
    }
    if let Some(path) = &opts.set_cover {
        graph.try_write_set_cover_file(path)?;
    }
    if let Some(path) = &opts.lp {
        graph.try_write_lp_file(path, false)?;
    }
    if let Some(path) = &opts.ilp {
        graph.try_write_lp_file(path, true)?;
    }
    if let (Some(k), Some(path)) = (opts.ilp_check, &opts.ilp_check_output) {
        graph.try_write_ilp_check_file(path, k)?;
    }
    if opts.maxsat.is_some() {
        not_supported("maxsat", Model::Graph);
    }

    let greedy = opts.greedy.then(|| {
        greedy_extend(&graph, solution);
        solution.len()
    });

    Ok(Outcome {
        reduction: reducer.into_stats(),
        remaining: graph.remaining_size(),
        forced,
        greedy,
    })
}

fn run_hypergraph_model(
    opts: &Opts,
    graph: &ReducedGraph,
    solution: &mut DominatingSet,
) -> anyhow::Result<Outcome> {
    let mut hypergraph = ReducedHypergraph::from_closed_neighborhoods(graph);

    let mut reducer = Reducer::<ReducedHypergraph>::new();
    reducer.kernelize(&mut hypergraph, solution, opts.max_rounds);
    let forced = solution.len();

    if hypergraph.is_infeasible() {
        warn!("The residual hitting set instance contains a constraint that cannot be hit");
    }

    if let Some(path) = &opts.set_cover {
        hypergraph.try_write_set_cover_file(path)?;
    }
    if let Some(path) = &opts.lp {
        hypergraph.try_write_lp_file(path, false)?;
    }
    if let Some(path) = &opts.ilp {
        hypergraph.try_write_lp_file(path, true)?;
    }
    if let Some(path) = &opts.maxsat {
        hypergraph.try_write_maxsat_file(path)?;
    }
    if opts.hypergraph.is_some() {
        not_supported("hypergraph", Model::Hypergraph);
    }
    if opts.ilp_check.is_some() {
        not_supported("ilp-check", Model::Hypergraph);
    }

    let greedy = if opts.greedy {
        if !greedy_complete(&hypergraph, solution) {
            anyhow::bail!("greedy completion left constraints unhit");
        }
        Some(solution.len())
    } else {
        None
    };

    Ok(Outcome {
        reduction: reducer.into_stats(),
        remaining: hypergraph.remaining_size(),
        forced,
        greedy,
    })
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_pace_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    if opts.ilp_check.is_some() != opts.ilp_check_output.is_some() {
        anyhow::bail!("--ilp-check and --ilp-check-output have to be given together");
    }

    let graph = load_graph(&opts.instance)?;
    info!(
        "Read instance with n={} and m={}",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    let instance = graph.stats();
    let mut solution = DominatingSet::new(graph.number_of_nodes());

    let outcome = match opts.model {
        Model::Graph => run_graph_model(&opts, graph.clone(), &mut solution)?,
        Model::Hypergraph => run_hypergraph_model(&opts, &graph, &mut solution)?,
    };

    info!(
        "Kernelization forced {} vertices in {} rounds",
        outcome.forced, outcome.reduction.rounds
    );

    if let Some(size) = outcome.greedy {
        if !solution.is_valid(&graph) {
            anyhow::bail!("greedy solution of size {size} does not dominate the graph");
        }
        solution.write(std::io::stdout().lock())?;
    }

    if opts.stats {
        let report = Report {
            model: match opts.model {
                Model::Graph => "graph",
                Model::Hypergraph => "hypergraph",
            },
            instance,
            reduction: outcome.reduction,
            forced: outcome.forced,
            remaining: outcome.remaining,
            greedy: outcome.greedy,
        };
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}
