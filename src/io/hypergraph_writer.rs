use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::graph::*;

/// Writes the closed neighborhoods of all vertices in the text format of the `findminhs`
/// hitting set solver: a header `<vertices> <hyperedges>` and one line per vertex holding
/// the size of the hyperedge, the neighbors and finally the vertex itself (all 0-based).
///
/// The whole graph is written; vertex states are ignored.
pub trait HypergraphWriter {
    fn try_write_hypergraph<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;

    fn try_write_hypergraph_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_hypergraph(writer)
    }
}

impl HypergraphWriter for ReducedGraph {
    fn try_write_hypergraph<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(writer, "{} {}", self.number_of_nodes(), self.number_of_nodes())?;

        for u in self.vertices() {
            write!(writer, "{} ", self.degree_of(u) + 1)?;
            for v in self.neighbors_of(u) {
                write!(writer, "{v} ")?;
            }
            writeln!(writer, "{u}")?;
        }

        writer.flush()
    }
}
