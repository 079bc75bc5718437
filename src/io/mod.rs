pub mod pace_reader;
pub use pace_reader::{GraphPaceReader, PaceReader, invalid_input};

pub mod hypergraph_writer;
pub use hypergraph_writer::HypergraphWriter;
pub mod lp_writer;
pub use lp_writer::{IlpCheckWriter, LpWriter};
pub mod maxsat_writer;
pub use maxsat_writer::MaxSatWriter;
pub mod set_cover_writer;
pub use set_cover_writer::SetCoverWriter;
