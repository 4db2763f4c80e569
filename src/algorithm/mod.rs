pub mod base;
mod aco;
mod ga;
mod random;
mod algorithm;

pub use algorithm::{Algorithm, AlgorithmEnum, Outcome, Termination, TerminationMode};
pub use aco::AntColony;
pub use base::operators::MutationOperator;
pub use ga::Genetic;
pub use random::RandomSearch;
