use std::convert::TryFrom;
use std::str::FromStr;
use enum_dispatch::enum_dispatch;
use serde::Deserialize;
use super::aco::AntColony;
use super::ga::Genetic;
use super::random::RandomSearch;
use crate::geo::{DistanceOracle, Route};
use crate::utils::{Error, Result};


#[enum_dispatch]
pub enum AlgorithmEnum {
    AntColony,
    Genetic,
    RandomSearch,
}

#[enum_dispatch(AlgorithmEnum)]
pub trait Algorithm {
    fn name(&self) -> &'static str;
    fn optimize(&mut self, oracle: &dyn DistanceOracle) -> Result<Outcome>;
}


/// Best tour of a finished run, with the best length known after each epoch.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub route: Route,
    pub length: f64,
    pub epochs: usize,
    pub history: Vec<f64>,
}


#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum TerminationMode {
    Epoch,
    Stagnation,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Termination {
    pub mode: TerminationMode,
    pub max: usize,
}

impl Termination {
    pub fn new(mode: TerminationMode, max: usize) -> Self {
        Termination { mode, max }
    }
    /// Evaluated between iterations only.
    pub fn should_stop(&self, epoch: usize, stagnation: usize) -> bool {
        match self.mode {
            TerminationMode::Epoch      => epoch >= self.max,
            TerminationMode::Stagnation => stagnation >= self.max,
        }
    }
    pub fn validate(&self) -> Result<()> {
        if self.max == 0 {
            return Err(Error::InvalidConfig("termination limit must be positive".to_owned()));
        }
        Ok(())
    }
}

impl FromStr for TerminationMode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "epoch"      => Ok(TerminationMode::Epoch),
            "stagnation" => Ok(TerminationMode::Stagnation),
            _            => Err(Error::UnknownTermination(s.to_owned())),
        }
    }
}

impl TryFrom<String> for TerminationMode {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_stops_after_max_epochs() {
        let termination = Termination::new(TerminationMode::Epoch, 3);
        assert!(!termination.should_stop(2, 100));
        assert!(termination.should_stop(3, 0));
    }

    #[test]
    fn it_stops_after_max_stagnation() {
        let termination = Termination::new(TerminationMode::Stagnation, 3);
        assert!(!termination.should_stop(100, 2));
        assert!(termination.should_stop(0, 3));
    }

    #[test]
    fn it_parses_modes() {
        assert_eq!("epoch".parse::<TerminationMode>().unwrap(), TerminationMode::Epoch);
        assert!(matches!("never".parse::<TerminationMode>(),
                         Err(Error::UnknownTermination(_))));
        assert!(Termination::new(TerminationMode::Epoch, 0).validate().is_err());
    }
}
