use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;

use crate::{graph::*, hypergraph::ReducedHypergraph};

/// Hitting set relaxation (or, with `binary`, the integer program) in the CPLEX `.lp` format.
pub trait LpWriter {
    fn try_write_lp<W: Write>(&self, writer: W, binary: bool) -> Result<(), std::io::Error>;

    fn try_write_lp_file<P: AsRef<Path>>(
        &self,
        path: P,
        binary: bool,
    ) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_lp(writer, binary)
    }
}

/// Integer program of the whole graph with the additional constraint that at most `k`
/// vertices are selected; it is feasible iff a dominating set of size `k` exists.
pub trait IlpCheckWriter {
    fn try_write_ilp_check<W: Write>(&self, writer: W, k: NumNodes) -> Result<(), std::io::Error>;

    fn try_write_ilp_check_file<P: AsRef<Path>>(
        &self,
        path: P,
        k: NumNodes,
    ) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_ilp_check(writer, k)
    }
}

/// Writes `<name>: x<a> + x<b> + ...` preceded by a space, without line break
fn write_sum<W: Write>(
    writer: &mut W,
    name: &str,
    variables: impl IntoIterator<Item = impl std::fmt::Display>,
) -> Result<(), std::io::Error> {
    write!(
        writer,
        " {name}: {}",
        variables.into_iter().map(|x| format!("x{x}")).join(" + ")
    )
}

fn write_bounds<W: Write>(
    writer: &mut W,
    variables: &[Node],
    binary: bool,
) -> Result<(), std::io::Error> {
    writeln!(writer, "\nBounds")?;
    for x in variables {
        writeln!(writer, " 0 <= x{x} <= 1")?;
    }

    if binary {
        writeln!(writer, "\nBinary")?;
        for x in variables {
            writeln!(writer, " x{x}")?;
        }
    }

    writeln!(writer, "End")
}

/// Variables `x<u>` (0-based) for active vertices; one constraint `c<u+1>` per active,
/// uncovered vertex over itself and its active neighbors.
impl LpWriter for ReducedGraph {
    fn try_write_lp<W: Write>(&self, mut writer: W, binary: bool) -> Result<(), std::io::Error> {
        let variables = self.active_vertices().collect_vec();

        writeln!(writer, "Minimize")?;
        write_sum(&mut writer, "obj", &variables)?;
        write!(writer, "\n\nSubject To\n")?;

        for u in self.active_vertices().filter(|&u| !self.is_covered(u)) {
            let closed = std::iter::once(u)
                .chain(self.active_neighbors_of(u))
                .sorted_unstable()
                .dedup();

            write_sum(&mut writer, &format!("c{}", u + 1), closed)?;
            writeln!(writer, " >= 1")?;
        }

        write_bounds(&mut writer, &variables, binary)?;
        writer.flush()
    }
}

impl IlpCheckWriter for ReducedGraph {
    fn try_write_ilp_check<W: Write>(
        &self,
        mut writer: W,
        k: NumNodes,
    ) -> Result<(), std::io::Error> {
        writeln!(writer, "Minimize")?;
        write_sum(&mut writer, "obj", self.vertices())?;
        write!(writer, "\n\nSubject To\n")?;

        for u in self.vertices() {
            let closed = self.closed_neighbors_of(u).sorted_unstable().dedup();
            write_sum(&mut writer, &format!("c{}", u + 1), closed)?;
            writeln!(writer, " >= 1")?;
        }

        write_sum(&mut writer, "c_total", self.vertices())?;
        writeln!(writer, " <= {k}")?;

        write_bounds(&mut writer, &self.vertices().collect_vec(), true)?;
        writer.flush()
    }
}

/// Variables `x<e+1>` for usable elements; one constraint `c<i+1>` per open hyperedge over
/// its usable elements. Open hyperedges without usable elements are skipped.
impl LpWriter for ReducedHypergraph {
    fn try_write_lp<W: Write>(&self, mut writer: W, binary: bool) -> Result<(), std::io::Error> {
        let variables = self.usable_variables().map(|e| e + 1).collect_vec();

        writeln!(writer, "Minimize")?;
        write_sum(&mut writer, "obj", &variables)?;
        write!(writer, "\n\nSubject To\n")?;

        for i in self.open_constraints() {
            let usable = self
                .usable_elements_of(i)
                .sorted_unstable()
                .dedup()
                .map(|e| e + 1)
                .collect_vec();

            if usable.is_empty() {
                continue;
            }

            write_sum(&mut writer, &format!("c{}", i + 1), usable)?;
            writeln!(writer, " >= 1")?;
        }

        write_bounds(&mut writer, &variables, binary)?;
        writer.flush()
    }
}
