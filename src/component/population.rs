use ordered_float::OrderedFloat;
use rand::Rng;
use rand::seq::SliceRandom;
use crate::geo::{DistanceOracle, Route};


/// A tour together with its length, lower is fitter.
#[derive(Clone, Debug)]
pub struct Chromosome {
    pub route: Route,
    pub length: f64,
}

impl Chromosome {
    pub fn evaluate(route: Route, oracle: &dyn DistanceOracle) -> Self {
        let length = oracle.tour_length(&route);
        Chromosome { route, length }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
}

impl Population {
    pub fn new(chromosomes: Vec<Chromosome>) -> Self {
        Population { chromosomes }
    }
    /// Uniformly random permutations of the non-home cities.
    pub fn random<R: Rng + ?Sized>(size: usize, oracle: &dyn DistanceOracle, rng: &mut R) -> Self {
        let others = oracle.others();
        let chromosomes = (0..size)
            .map(|_| {
                let mut route = others.clone();
                route.shuffle(rng);
                Chromosome::evaluate(route, oracle)
            })
            .collect();
        Population { chromosomes }
    }
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }
    pub fn route(&self, nth: usize) -> &[usize] {
        &self.chromosomes[nth].route
    }
    /// Elitist truncation: keeps the `count` shortest tours, ties in their
    /// current order.
    pub fn select(&mut self, count: usize) {
        self.chromosomes.sort_by_key(|c| OrderedFloat(c.length));
        self.chromosomes.truncate(count);
    }
    pub fn extend(&mut self, offspring: Vec<Route>, oracle: &dyn DistanceOracle) {
        let evaluated = offspring.into_iter()
            .map(|route| Chromosome::evaluate(route, oracle));
        self.chromosomes.extend(evaluated);
    }
    pub fn best(&self) -> Option<&Chromosome> {
        self.chromosomes.iter()
            .min_by_key(|c| OrderedFloat(c.length))
    }
}
