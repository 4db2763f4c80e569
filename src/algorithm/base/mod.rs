pub mod ants;
pub mod operators;
pub mod pheromone;
