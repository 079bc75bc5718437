pub mod errors;
pub mod graph;
pub mod heuristic;
pub mod hypergraph;
pub mod io;
pub mod log;
pub mod reduction;
pub mod utils;

pub mod prelude {
    pub use super::errors::*;
    pub use super::graph::*;
    pub use super::heuristic::*;
    pub use super::hypergraph::*;
    pub use super::io::*;
    pub use super::reduction::*;
    pub use super::utils::*;
}

#[cfg(test)]
mod testing;
