use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaChaRng;
use tracing::debug;
use super::Algorithm;
use super::algorithm::Outcome;
use crate::REPORT_EVERY;
use crate::component::Incumbent;
use crate::geo::DistanceOracle;
use crate::utils::config::RandomParameters;
use crate::utils::Result;


/// Baseline that samples one uniformly random tour per epoch.
pub struct RandomSearch {
    params: RandomParameters,
    seed: u64,
}

impl RandomSearch {
    pub fn new(params: RandomParameters, seed: u64) -> Self {
        RandomSearch { params, seed }
    }
}

impl Algorithm for RandomSearch {
    fn name(&self) -> &'static str {
        "random"
    }
    fn optimize(&mut self, oracle: &dyn DistanceOracle) -> Result<Outcome> {
        self.params.validate()?;
        let termination = self.params.termination;
        let mut rng = ChaChaRng::seed_from_u64(self.seed);
        let mut route = oracle.others();
        let mut incumbent = Incumbent::new();
        let mut history = vec![];
        let mut epoch = 0;
        while !termination.should_stop(epoch, incumbent.stagnation()) {
            route.shuffle(&mut rng);
            incumbent.observe(&route, oracle.tour_length(&route));
            history.push(incumbent.length());
            epoch += 1;
            if epoch % REPORT_EVERY == 0 {
                debug!(epoch, best = incumbent.length(), "random search");
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

    #[test]
    fn it_samples_valid_tours() {
        let cities = (0..8)
            .map(|i| City::new(&format!("c{}", i), (i % 3) as f64, i as f64))
            .collect();
        let atlas = Atlas::new(cities, 0);
        let params = RandomParameters { termination: Termination::new(TerminationMode::Epoch, 100) };
        let outcome = RandomSearch::new(params, 4).optimize(&atlas).unwrap();
        assert_eq!(outcome.epochs, 100);
        assert!(atlas.validate_route(&outcome.route));
        assert!(outcome.history.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn it_rejects_zero_limit() {
        let atlas = Atlas::new(vec![City::new("home", 0.0, 0.0), City::new("a", 1.0, 1.0)], 0);
        let params = RandomParameters { termination: Termination::new(TerminationMode::Stagnation, 0) };
        assert!(matches!(RandomSearch::new(params, 0).optimize(&atlas), Err(Error::InvalidConfig(_))));
    }
}
