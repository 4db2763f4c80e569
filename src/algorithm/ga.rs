use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing::debug;
use super::Algorithm;
use super::algorithm::Outcome;
use super::base::operators::{crossover, two_positions};
use crate::REPORT_EVERY;
use crate::component::{Incumbent, Population};
use crate::geo::{DistanceOracle, Route};
use crate::utils::config::GaParameters;
use crate::utils::Result;


pub struct Genetic {
    params: GaParameters,
    seed: u64,
}

impl Genetic {
    pub fn new(params: GaParameters, seed: u64) -> Self {
        Genetic { params, seed }
    }
    /// Replaces the population by its elite plus their offspring.
    pub fn generation<R: Rng + ?Sized>(&self, population: &mut Population, oracle: &dyn DistanceOracle, rng: &mut R) {
        let (survivors, _, _) = self.params.slots();
        population.select(survivors);
        let offspring = self.reproduce(population, rng);
        population.extend(offspring, oracle);
    }
    /// Mutants first, then crossovers, all bred from the given elite.
    pub fn reproduce<R: Rng + ?Sized>(&self, elite: &Population, rng: &mut R) -> Vec<Route> {
        let (_, mutants, crossovers) = self.params.slots();
        let survivors = elite.len();
        debug_assert!(survivors > 0);
        let mut offspring = Vec::with_capacity(mutants + crossovers);
        for _ in 0..mutants {
            let mut child = elite.route(rng.gen_range(0..survivors)).to_vec();
            self.params.mutation_operator.apply(&mut child, rng);
            offspring.push(child);
        }
        for _ in 0..crossovers {
            let (a, b) = two_positions(survivors, rng);
            offspring.push(crossover(elite.route(a), elite.route(b), rng));
        }
        offspring
    }
}

impl Algorithm for Genetic {
    fn name(&self) -> &'static str {
        "ga"
    }
    fn optimize(&mut self, oracle: &dyn DistanceOracle) -> Result<Outcome> {
        self.params.validate()?;
        let termination = self.params.termination;
        let mut rng = ChaChaRng::seed_from_u64(self.seed);
        let mut population = Population::random(self.params.population, oracle, &mut rng);
        let mut incumbent = Incumbent::new();
        if let Some(best) = population.best() {
            incumbent.observe(&best.route, best.length);
        }
        let mut history = vec![incumbent.length()];
        let mut epoch = 0;
        while !termination.should_stop(epoch, incumbent.stagnation()) {
            self.generation(&mut population, oracle, &mut rng);
            if let Some(best) = population.best() {
                incumbent.observe(&best.route, best.length);
            }
            history.push(incumbent.length());
            epoch += 1;
            if epoch % REPORT_EVERY == 0 {
                debug!(epoch, best = incumbent.length(), "genetic algorithm");
            }
        }
        Ok(incumbent.into_outcome(epoch, history))
    }
}
