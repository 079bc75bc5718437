use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use crate::{
    errors::InputError,
    graph::{Edge, NumEdges, NumNodes, ReducedGraph},
    hypergraph::ReducedHypergraph,
};

pub type Result<T> = std::io::Result<T>;

/// Reads instances in the PACE `.gr` format: an optional number of comment lines starting
/// with `c`, a header `p ds <n> <m>` and `m` lines with one 1-based edge each.
pub trait GraphPaceReader: Sized {
    fn try_read_pace<R: BufRead>(reader: R) -> Result<Self>;

    fn try_read_pace_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_pace(buf_reader)
    }
}

impl GraphPaceReader for ReducedGraph {
    fn try_read_pace<R: BufRead>(reader: R) -> Result<Self> {
        let (n, edges) = read_edge_list(reader)?;
        ReducedGraph::try_from_one_based_edges(n, edges).map_err(invalid_input)
    }
}

/// Builds the closed-neighborhood hypergraph edge by edge
impl GraphPaceReader for ReducedHypergraph {
    fn try_read_pace<R: BufRead>(reader: R) -> Result<Self> {
        let (n, edges) = read_edge_list(reader)?;

        let mut hypergraph = ReducedHypergraph::with_singleton_hyperedges(n);
        for Edge(u, v) in edges {
            hypergraph.add_edge(u, v);
        }
        hypergraph.rebuild_reverse_index();

        Ok(hypergraph)
    }
}

/// Malformed input is reported as [`ErrorKind::InvalidData`] wrapping the [`InputError`]
pub fn invalid_input(error: InputError) -> std::io::Error {
    std::io::Error::new(ErrorKind::InvalidData, error)
}

/// Reads the whole edge list and checks it against the header. Edges stay 1-based.
fn read_edge_list<R: BufRead>(reader: R) -> Result<(NumNodes, Vec<Edge>)> {
    let pace_reader = PaceReader::try_new(reader)?;
    let n = pace_reader.number_of_nodes();
    let m = pace_reader.number_of_edges();

    let edges = pace_reader.collect::<Result<Vec<_>>>()?;

    if edges.len() as NumEdges != m {
        return Err(invalid_input(InputError::EdgeCountMismatch {
            expected: m,
            found: edges.len() as NumEdges,
        }));
    }

    for &Edge(u, v) in &edges {
        if let Some(&id) = [u, v].iter().find(|&&x| !(1..=n).contains(&x)) {
            return Err(invalid_input(InputError::NodeOutOfRange {
                id,
                number_of_nodes: n,
            }));
        }

        if u == v {
            return Err(invalid_input(InputError::SelfLoop(u - 1)));
        }
    }

    Ok((n, edges))
}

pub struct PaceReader<R> {
    lines: Lines<R>,
    number_of_nodes: NumNodes,
    number_of_edges: NumEdges,
}

impl<R: BufRead> PaceReader<R> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut pace_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_edges: 0,
        };

        (pace_reader.number_of_nodes, pace_reader.number_of_edges) = pace_reader.parse_header()?;
        Ok(pace_reader)
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

/// Yields the edges as stored in the file, i.e. 1-based
impl<R: BufRead> Iterator for PaceReader<R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name),
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid value found. Cannot parse {}.", $name),
                ));
            }
        }
    }};
}

impl<R: BufRead> PaceReader<R> {
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with('c') || line.trim().is_empty() => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_header(&mut self) -> Result<(NumNodes, NumEdges)> {
        let Some(line) = self.next_non_comment_line()? else {
            return Err(std::io::Error::new(ErrorKind::InvalidData, "No header found"));
        };

        let mut parts = line.split_whitespace();

        raise_error_unless!(
            parts.next().is_some_and(|t| t.starts_with('p')),
            ErrorKind::InvalidData,
            "Invalid header found; line should start with p"
        );

        raise_error_unless!(
            parts.next() == Some("ds"),
            ErrorKind::InvalidData,
            "Invalid header found; file type should be \"ds\""
        );

        let number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        let number_of_edges = parse_next_value!(parts, "Header>Number of edges");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid header found; expected end of line"
        );

        Ok((number_of_nodes, number_of_edges))
    }

    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();

        let from = parse_next_value!(parts, "Source node");
        let dest = parse_next_value!(parts, "Target node");

        Ok(Some(Edge(from, dest)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::InvariantCheck;
    use itertools::Itertools;
    use std::io::Write;

    const DEMO_FILE: &str =
        "c TEST\n p  ds 10  9 \n1 2\nc TEST\n2 3\n3 4\n4 5\n5 6\n6 7\n7 8\n8 9\n9 10";

    fn input_error(error: std::io::Error) -> Option<InputError> {
        assert_eq!(error.kind(), ErrorKind::InvalidData);
        error
            .into_inner()
            .and_then(|inner| inner.downcast::<InputError>().ok())
            .map(|boxed| *boxed)
    }

    #[test]
    fn test_success() {
        let pace_reader = PaceReader::try_new(DEMO_FILE.as_bytes()).unwrap();

        assert_eq!(pace_reader.number_of_nodes(), 10);
        assert_eq!(pace_reader.number_of_edges(), 9);

        let edges: Vec<_> = pace_reader.map(|e| e.unwrap()).collect();
        assert_eq!(edges, (1..10).map(|u| Edge(u, u + 1)).collect_vec());
    }

    #[test]
    fn read_graph() {
        let graph = ReducedGraph::try_read_pace(DEMO_FILE.as_bytes()).unwrap();

        assert_eq!(graph.number_of_nodes(), 10);
        assert_eq!(graph.number_of_edges(), 9);
        assert_eq!(
            graph.ordered_edges().collect_vec(),
            (0..9).map(|u| Edge(u, u + 1)).collect_vec()
        );
        assert!(graph.is_correct().is_ok());
    }

    #[test]
    fn read_hypergraph() {
        let hypergraph = ReducedHypergraph::try_read_pace(DEMO_FILE.as_bytes()).unwrap();
        let graph = ReducedGraph::try_read_pace(DEMO_FILE.as_bytes()).unwrap();
        let expected = ReducedHypergraph::from_closed_neighborhoods(&graph);

        assert_eq!(hypergraph.number_of_hyperedges(), 10);
        for i in 0..10 {
            assert_eq!(
                hypergraph.hyperedge(i).iter().sorted().collect_vec(),
                expected.hyperedge(i).iter().sorted().collect_vec()
            );
        }
        assert!(hypergraph.is_correct().is_ok());
    }

    #[test]
    fn read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEMO_FILE.as_bytes()).unwrap();
        file.flush().unwrap();

        let graph = ReducedGraph::try_read_pace_file(file.path()).unwrap();
        assert_eq!(graph.number_of_edges(), 9);

        assert!(ReducedGraph::try_read_pace_file(file.path().with_extension("missing")).is_err());
    }

    #[test]
    fn malformed_input() {
        let error = ReducedGraph::try_read_pace("p ds 3 3\n1 2\n2 3\n".as_bytes()).unwrap_err();
        assert_eq!(
            input_error(error),
            Some(InputError::EdgeCountMismatch {
                expected: 3,
                found: 2
            })
        );

        let error = ReducedGraph::try_read_pace("p ds 3 1\n1 4\n".as_bytes()).unwrap_err();
        assert_eq!(
            input_error(error),
            Some(InputError::NodeOutOfRange {
                id: 4,
                number_of_nodes: 3
            })
        );

        let error = ReducedHypergraph::try_read_pace("p ds 3 1\n0 1\n".as_bytes()).unwrap_err();
        assert_eq!(
            input_error(error),
            Some(InputError::NodeOutOfRange {
                id: 0,
                number_of_nodes: 3
            })
        );

        let error = ReducedGraph::try_read_pace("p ds 3 1\n2 2\n".as_bytes()).unwrap_err();
        assert_eq!(input_error(error), Some(InputError::SelfLoop(1)));
    }

    #[test]
    fn malformed_syntax() {
        for input in ["", "p td 3 1\n1 2\n", "p ds 3\n", "p ds 3 1 5\n", "p ds 3 1\n1 x\n"] {
            let error = ReducedGraph::try_read_pace(input.as_bytes()).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidData, "{input:?}");
            assert!(input_error(error).is_none());
        }
    }
}
