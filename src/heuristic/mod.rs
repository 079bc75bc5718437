pub mod greedy;

pub use greedy::{greedy_approximation, greedy_complete, greedy_extend};
