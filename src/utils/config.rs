use serde::Deserialize;
use argh::FromArgs;
use crate::algorithm::{MutationOperator, Termination, TerminationMode};
use super::error::{Error, Result};

/// Ant colony and genetic search for closed tours over geographic points
#[derive(FromArgs)]
pub struct Arguments {
    #[argh(positional)]
    pub cities: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override algorithm used to search tours (aco, ga or random)
    #[argh(option, short='a')]
    pub algorithm: Option<String>,
    /// override random seed
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override mutation operator of the genetic algorithm (swap or inversion)
    #[argh(option, short='m')]
    pub mutation: Option<MutationOperator>,
    /// override termination mode of the selected algorithm (epoch or stagnation)
    #[argh(option, short='t')]
    pub termination: Option<TerminationMode>,
    /// override termination limit of the selected algorithm
    #[argh(option, short='n')]
    pub max: Option<usize>,
    /// run every algorithm on the same instance and compare them
    #[argh(switch)]
    pub compare: bool,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub name: String,
    pub algorithm: String,
    pub seed: u64,
    #[serde(default)]
    pub aco: AcoParameters,
    #[serde(default)]
    pub ga: GaParameters,
    #[serde(default)]
    pub random: RandomParameters,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AcoParameters {
    /// defaults to one more ant than there are cities
    pub ants: Option<usize>,
    pub initial_pheromone: f64,
    pub proximity_constant: f64,
    pub evaporation_rate: f64,
    pub deposit_constant: f64,
    pub alpha: f64,
    pub beta: f64,
    pub termination: Termination,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GaParameters {
    pub population: usize,
    pub survival_rate: usize,
    pub mutation_rate: usize,
    pub mutation_operator: MutationOperator,
    pub termination: Termination,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RandomParameters {
    pub termination: Termination,
}

impl Default for AcoParameters {
    fn default() -> Self {
        AcoParameters {
            ants: None,
            initial_pheromone: 0.2,
            proximity_constant: 100.0,
            evaporation_rate: 0.2,
            deposit_constant: 1000.0,
            alpha: 1.0,
            beta: 2.0,
            termination: Termination::new(TerminationMode::Epoch, 200),
        }
    }
}

impl Default for GaParameters {
    fn default() -> Self {
        GaParameters {
            population: 30,
            survival_rate: 65,
            mutation_rate: 20,
            mutation_operator: MutationOperator::Inversion,
            termination: Termination::new(TerminationMode::Epoch, 2000),
        }
    }
}

impl Default for RandomParameters {
    fn default() -> Self {
        RandomParameters {
            termination: Termination::new(TerminationMode::Epoch, 15000),
        }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(algorithm) = &args.algorithm {
            self.algorithm = algorithm.clone();
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(mutation) = args.mutation {
            self.ga.mutation_operator = mutation;
        }
        let termination = match self.algorithm.as_str() {
            "aco"    => Some(&mut self.aco.termination),
            "ga"     => Some(&mut self.ga.termination),
            "random" => Some(&mut self.random.termination),
            _        => None,
        };
        if let Some(termination) = termination {
            if let Some(mode) = args.termination {
                termination.mode = mode;
            }
            if let Some(max) = args.max {
                termination.max = max;
            }
        }
    }
    pub fn validate(&self) -> Result<()> {
        self.aco.validate()?;
        self.ga.validate()?;
        self.random.validate()
    }
}

impl AcoParameters {
    pub fn ant_count(&self, city_count: usize) -> usize {
        self.ants.unwrap_or(city_count + 1)
    }
    pub fn validate(&self) -> Result<()> {
        if self.ants == Some(0) {
            return invalid("colony needs at least one ant");
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return invalid("evaporation rate must lie within [0, 1]");
        }
        if !(self.initial_pheromone >= 0.0) {
            return invalid("initial pheromone must not be negative");
        }
        if !(self.deposit_constant >= 0.0) {
            return invalid("deposit constant must not be negative");
        }
        if !(self.proximity_constant > 0.0) {
            return invalid("proximity constant must be positive");
        }
        if !(self.alpha >= 0.0 && self.beta >= 0.0) {
            return invalid("alpha and beta must not be negative");
        }
        self.termination.validate()
    }
}

impl GaParameters {
    pub fn crossover_rate(&self) -> usize {
        100usize.saturating_sub(self.survival_rate + self.mutation_rate)
    }
    /// Splits the population into (survivors, mutants, crossovers).
    pub fn slots(&self) -> (usize, usize, usize) {
        let survivors = self.population * self.survival_rate / 100;
        let kept = num::Integer::div_ceil(
            &(self.population * (self.survival_rate + self.mutation_rate)), &100);
        let mutants = kept.min(self.population) - survivors;
        let crossovers = self.population - survivors - mutants;
        (survivors, mutants, crossovers)
    }
    pub fn validate(&self) -> Result<()> {
        if self.survival_rate + self.mutation_rate > 100 {
            return invalid("survival rate plus mutation rate exceeds 100");
        }
        if self.population == 0 {
            return invalid("population must not be empty");
        }
        let (survivors, _, crossovers) = self.slots();
        if survivors == 0 {
            return invalid("survival rate leaves no survivor to reproduce from");
        }
        if crossovers > 0 && survivors < 2 {
            return invalid("crossover needs at least two survivors");
        }
        self.termination.validate()
    }
}

impl RandomParameters {
    pub fn validate(&self) -> Result<()> {
        self.termination.validate()
    }
}

fn invalid(message: &str) -> Result<()> {
    Err(Error::InvalidConfig(message.to_owned()))
}
