use std::iter;
use itertools::Itertools;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use tracing::trace;
use super::pheromone::{CompactStore, PheromoneStore};
use crate::geo::{DistanceOracle, Route};
use crate::utils::config::AcoParameters;
use crate::utils::Result;


#[derive(Clone, Debug)]
pub struct Ant {
    pub route: Route,
    pub length: f64,
}

impl Ant {
    pub fn new(route: Route, length: f64) -> Self {
        Ant { route, length }
    }
}

/// Pheromone trails of one problem instance plus the rules ants follow on them.
pub struct Colony<S: PheromoneStore = CompactStore> {
    pub store: S,
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub q: f64,
    n: usize,
    home: usize,
    starts: Vec<usize>,
}

impl Colony<CompactStore> {
    pub fn new(oracle: &dyn DistanceOracle, params: &AcoParameters) -> Result<Self> {
        let store = CompactStore::new(oracle, params.initial_pheromone, params.proximity_constant)?;
        Ok(Colony::with_store(store, oracle, params))
    }
}

impl<S: PheromoneStore> Colony<S> {
    pub fn with_store(store: S, oracle: &dyn DistanceOracle, params: &AcoParameters) -> Self {
        Colony {
            store,
            alpha: params.alpha,
            beta: params.beta,
            rho: params.evaporation_rate,
            q: params.deposit_constant,
            n: oracle.city_count(),
            home: oracle.home(),
            starts: oracle.others(),
        }
    }
    /// Ants are spread over the non-home cities in turn.
    pub fn start_city(&self, ant: usize) -> usize {
        debug_assert!(!self.starts.is_empty());
        self.starts[ant % self.starts.len()]
    }
    pub fn desire(&self, from: usize, to: usize) -> f64 {
        let edge = self.store.get(from, to);
        edge.tau.powf(self.alpha) * edge.eta.powf(self.beta)
    }
    /// Only reads the trails, so ants of one iteration are independent of each other.
    pub fn construct<R: Rng + ?Sized>(&self, ant: usize, rng: &mut R) -> Route {
        let start = self.start_city(ant);
        let mut visited = vec![false; self.n];
        visited[self.home] = true;
        visited[start] = true;
        let mut route = Vec::with_capacity(self.n - 1);
        route.push(start);
        let mut current = start;
        loop {
            let allowed: Vec<usize> = (0..self.n)
                .filter(|&city| !visited[city])
                .collect();
            if allowed.is_empty() {
                break;
            }
            let next = self.select_city(current, &allowed, rng);
            visited[next] = true;
            route.push(next);
            current = next;
        }
        route
    }
    pub fn select_city<R: Rng + ?Sized>(&self, current: usize, allowed: &[usize], rng: &mut R) -> usize {
        debug_assert!(!allowed.is_empty());
        let desires: Vec<f64> = allowed.iter()
            .map(|&next| self.desire(current, next))
            .collect();
        allowed[draw(&desires, rng)]
    }
    /// Evaporates every trail once, then reinforces the tours of this iteration.
    pub fn update(&mut self, ants: &[Ant]) {
        self.store.evaporate(self.rho);
        for ant in ants {
            if !(ant.length > 0.0 && ant.length.is_finite()) {
                trace!(length = ant.length, "skip deposit of degenerate route");
                continue;
            }
            let amount = self.q / ant.length;
            for (i, j) in tour_edges(self.home, &ant.route) {
                self.store.deposit(i, j, amount);
            }
        }
    }
}

/// Index drawn in proportion to `weights`.
///
/// Infinite weights dominate every finite one, so the draw is uniform among
/// them. Weights that are all zero or contain NaN fall back to a uniform draw
/// over every index.
pub fn draw<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    debug_assert!(!weights.is_empty());
    let saturated: Vec<usize> = weights.iter()
        .positions(|&w| w == f64::INFINITY)
        .collect();
    if !saturated.is_empty() {
        return saturated[rng.gen_range(0..saturated.len())];
    }
    // finite weights may still overflow once summed
    let peak = weights.iter().copied().fold(0.0, f64::max);
    let scale = if peak > 0.0 { peak } else { 1.0 };
    match WeightedIndex::new(weights.iter().map(|w| w / scale)) {
        Ok(weighted) => weighted.sample(rng),
        Err(_) => rng.gen_range(0..weights.len()),
    }
}

/// Consecutive pairs of the closed tour home → route → home.
pub fn tour_edges(home: usize, route: &[usize]) -> impl Iterator<Item=(usize, usize)> + '_ {
    iter::once(home)
        .chain(route.iter().copied())
        .chain(iter::once(home))
        .tuple_windows()
        .filter(|(i, j)| i != j)
}
