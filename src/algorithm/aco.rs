use ordered_float::OrderedFloat;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::debug;
use super::Algorithm;
use super::algorithm::Outcome;
use super::base::ants::{Ant, Colony};
use crate::REPORT_EVERY;
use crate::component::Incumbent;
use crate::geo::DistanceOracle;
use crate::utils::config::AcoParameters;
use crate::utils::Result;


pub struct AntColony {
    params: AcoParameters,
    seed: u64,
}

impl AntColony {
    pub fn new(params: AcoParameters, seed: u64) -> Self {
        AntColony { params, seed }
    }
}

impl Algorithm for AntColony {
    fn name(&self) -> &'static str {
        "aco"
    }
    fn optimize(&mut self, oracle: &dyn DistanceOracle) -> Result<Outcome> {
        self.params.validate()?;
        let mut colony = Colony::new(oracle, &self.params)?;
        let ant_count = self.params.ant_count(oracle.city_count());
        let termination = self.params.termination;
        let mut rng = ChaChaRng::seed_from_u64(self.seed);
        let mut incumbent = Incumbent::new();
        let mut history = vec![];
        let mut epoch = 0;
        while !termination.should_stop(epoch, incumbent.stagnation()) {
            let ants: Vec<Ant> = (0..ant_count)
                .map(|ant| {
                    let route = colony.construct(ant, &mut rng);
                    let length = oracle.tour_length(&route);
                    Ant::new(route, length)
                })
                .collect();
            colony.update(&ants);
            if let Some(best) = ants.iter().min_by_key(|ant| OrderedFloat(ant.length)) {
                incumbent.observe(&best.route, best.length);
            }
            history.push(incumbent.length());
            epoch += 1;
            if epoch % REPORT_EVERY == 0 {
                debug!(epoch, best = incumbent.length(), "ant colony");
            }
        }
        Ok(incumbent.into_outcome(epoch, history))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{Termination, TerminationMode};
    use crate::geo::{Atlas, City};
    use crate::utils::Error;

    fn pentagon() -> Atlas {
        let cities = vec![
            City::new("home", 0.0, 0.0),
            City::new("a", 0.0, 2.0),
            City::new("b", 1.5, 3.0),
            City::new("c", 3.0, 2.0),
            City::new("d", 3.0, 0.0),
        ];
        Atlas::new(cities, 0)
    }

    fn params(termination: Termination) -> AcoParameters {
        AcoParameters { termination, ..Default::default() }
    }

    #[test]
    fn it_runs_fixed_number_of_epochs() {
        let atlas = pentagon();
        let mut aco = AntColony::new(params(Termination::new(TerminationMode::Epoch, 25)), 420);
        let outcome = aco.optimize(&atlas).unwrap();
        assert_eq!(outcome.epochs, 25);
        assert_eq!(outcome.history.len(), 25);
        assert!(atlas.validate_route(&outcome.route));
        assert!((outcome.length - atlas.tour_length(&outcome.route)).abs() < 1e-9);
        assert!(outcome.history.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn it_stops_on_stagnation() {
        let atlas = pentagon();
        let mut aco = AntColony::new(params(Termination::new(TerminationMode::Stagnation, 10)), 1);
        let outcome = aco.optimize(&atlas).unwrap();
        assert!(outcome.epochs >= 11);
        let last = outcome.history[outcome.epochs - 1];
        let tail = &outcome.history[outcome.epochs - 11..];
        assert!(tail.iter().all(|&length| length == last));
    }

    #[test]
    fn it_reproduces_runs_from_seed() {
        let atlas = pentagon();
        let termination = Termination::new(TerminationMode::Epoch, 15);
        let first = AntColony::new(params(termination), 9).optimize(&atlas).unwrap();
        let second = AntColony::new(params(termination), 9).optimize(&atlas).unwrap();
        assert_eq!(first.route, second.route);
        assert_eq!(first.history, second.history);
    }

    #[test]
    fn it_rejects_empty_colony() {
        let atlas = pentagon();
        let empty = AcoParameters { ants: Some(0), ..params(Termination::new(TerminationMode::Epoch, 3)) };
        assert!(matches!(AntColony::new(empty, 0).optimize(&atlas), Err(Error::InvalidConfig(_))));
        let idle = AcoParameters { ants: Some(0), ..params(Termination::new(TerminationMode::Stagnation, 3)) };
        assert!(matches!(AntColony::new(idle, 0).optimize(&atlas), Err(Error::InvalidConfig(_))));
        let leaky = AcoParameters { evaporation_rate: 1.5, ..Default::default() };
        assert!(matches!(AntColony::new(leaky, 0).optimize(&atlas), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn it_surfaces_coincident_cities() {
        let atlas = Atlas::new(vec![
            City::new("home", 0.0, 0.0),
            City::new("twin", 0.0, 0.0),
        ], 0);
        let mut aco = AntColony::new(AcoParameters::default(), 0);
        assert!(matches!(aco.optimize(&atlas), Err(Error::CoincidentCities(0, 1))));
    }
}
