use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{graph::*, hypergraph::ReducedHypergraph};

/// Weighted set cover format: a header `<items> <sets>`, a line with the weight of every
/// set (all `1`), then one line per item with the number of sets containing it followed
/// by those sets (1-based).
pub trait SetCoverWriter {
    fn try_write_set_cover<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;

    fn try_write_set_cover_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_set_cover(writer)
    }
}

fn write_unit_weights<W: Write>(writer: &mut W, sets: NumNodes) -> Result<(), std::io::Error> {
    for _ in 0..sets {
        write!(writer, "1 ")?;
    }
    writeln!(writer)
}

/// Every vertex is an item and a set; the line of `u` lists its neighbors and then `u`.
/// The whole graph is written; vertex states are ignored.
impl SetCoverWriter for ReducedGraph {
    fn try_write_set_cover<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        let n = self.number_of_nodes();
        writeln!(writer, "{n} {n}")?;
        write_unit_weights(&mut writer, n)?;

        for u in self.vertices() {
            write!(writer, "{} ", self.degree_of(u) + 1)?;
            for v in self.neighbors_of(u) {
                write!(writer, "{} ", v + 1)?;
            }
            writeln!(writer, "{}", u + 1)?;
        }

        writer.flush()
    }
}

/// Only the residual instance is written: usable elements become the sets, open constraints
/// the items, both numbered densely in increasing order of their ids.
impl SetCoverWriter for ReducedHypergraph {
    fn try_write_set_cover<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        let mut set_id = vec![None; self.number_of_elements() as usize];
        for (new_id, e) in self.usable_variables().enumerate() {
            set_id[e as usize] = Some(new_id as Node);
        }

        let sets = self.number_of_usable_variables();
        writeln!(writer, "{} {}", self.number_of_open_constraints(), sets)?;
        write_unit_weights(&mut writer, sets)?;

        for i in self.open_constraints() {
            let mut covering: Vec<Node> = self
                .usable_elements_of(i)
                .filter_map(|e| set_id[e as usize])
                .collect();
            covering.sort_unstable();
            covering.dedup();

            write!(writer, "{} ", covering.len())?;
            for s in covering {
                write!(writer, "{} ", s + 1)?;
            }
            writeln!(writer)?;
        }

        writer.flush()
    }
}
