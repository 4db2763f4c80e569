use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("at least 2 cities are required, got {0}")]
    TooFewCities(usize),
    #[error("cities #{0:02} and #{1:02} coincide, desirability is undefined")]
    CoincidentCities(usize, usize),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown algorithm `{0}`, expected aco, ga or random")]
    UnknownAlgorithm(String),
    #[error("unknown mutation operator `{0}`, expected swap or inversion")]
    UnknownOperator(String),
    #[error("unknown termination mode `{0}`, expected epoch or stagnation")]
    UnknownTermination(String),
    #[error("failed to read {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("failed to parse {0}: {1}")]
    Yaml(String, #[source] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
