pub mod dominating_set;

pub use dominating_set::*;
