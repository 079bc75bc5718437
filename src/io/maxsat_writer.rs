use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::hypergraph::ReducedHypergraph;

/// Weighted MaxSAT encoding of the residual hitting set instance: a hard clause
/// `h <e+1> ... 0` for every open hyperedge over its usable elements, and a soft clause
/// `1 -<e+1> 0` of weight one for every element.
pub trait MaxSatWriter {
    fn try_write_maxsat<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;

    fn try_write_maxsat_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_maxsat(writer)
    }
}

impl MaxSatWriter for ReducedHypergraph {
    fn try_write_maxsat<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        for i in self.open_constraints() {
            write!(writer, "h")?;
            for e in self.usable_elements_of(i) {
                write!(writer, " {}", e + 1)?;
            }
            writeln!(writer, " 0")?;
        }

        for e in 0..self.number_of_elements() {
            writeln!(writer, "1 -{} 0", e + 1)?;
        }

        writer.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{graph::ReducedGraph, testing::*};
    use regex::Regex;

    #[test]
    fn hard_coded() {
        let mut hg = ReducedHypergraph::from_closed_neighborhoods(&path_graph(3));
        hg.exclude(0);
        hg.mark_redundant(1);

        let mut buffer: Vec<u8> = Vec::new();
        hg.try_write_maxsat(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "h 2 0\nh 3 2 0\n1 -1 0\n1 -2 0\n1 -3 0\n"
        );
    }

    #[test]
    fn one_hard_clause_per_open_hyperedge() {
        let graph = ReducedGraph::from_edges(5, [(0, 1), (1, 2), (3, 4)]);
        let mut hg = ReducedHypergraph::from_closed_neighborhoods(&graph);
        hg.select(4);

        let file = tempfile::NamedTempFile::new().unwrap();
        hg.try_write_maxsat_file(file.path()).unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();

        let hard = Regex::new(r"(?m)^h( \d+)+ 0$").unwrap();
        let soft = Regex::new(r"(?m)^1 -\d+ 0$").unwrap();
        assert_eq!(hard.find_iter(&content).count(), 3);
        assert_eq!(soft.find_iter(&content).count(), 5);
        assert_eq!(content.lines().count(), 8);
    }
}
