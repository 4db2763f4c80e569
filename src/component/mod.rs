mod incumbent;
mod population;

pub use incumbent::Incumbent;
pub use population::{Chromosome, Population};
