use itertools::Itertools;
use crate::geo::DistanceOracle;
use crate::utils::{Error, Result};


/// Slot of the unordered pair {i, j}, i != j, among the n(n-1)/2 pairs of n cities.
pub fn pair_index(n: usize, i: usize, j: usize) -> usize {
    debug_assert!(i != j && i < n && j < n);
    let (i, j) = if i < j { (i, j) } else { (j, i) };
    i * (2 * n - i - 1) / 2 + (j - i - 1)
}

pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// pheromone intensity, never negative
    pub tau: f64,
    /// desirability, fixed once computed
    pub eta: f64,
}

/// Pheromone and desirability per unordered city pair.
pub trait PheromoneStore {
    fn get(&self, i: usize, j: usize) -> Edge;
    fn evaporate(&mut self, rate: f64);
    fn deposit(&mut self, i: usize, j: usize, amount: f64);
    fn edge_count(&self) -> usize;
}

/// Computes `proximity / distance` for every pair, in pair index order.
fn desirabilities(oracle: &dyn DistanceOracle, proximity: f64) -> Result<Vec<(usize, usize, f64)>> {
    let n = oracle.city_count();
    if n < 2 {
        return Err(Error::TooFewCities(n));
    }
    (0..n).tuple_combinations()
        .map(|(i, j)| {
            let distance = oracle.distance(i, j);
            if distance > 0.0 {
                Ok((i, j, proximity / distance))
            } else {
                Err(Error::CoincidentCities(i, j))
            }
        })
        .collect()
}


/// Flat array of the n(n-1)/2 edges addressed through `pair_index`.
#[derive(Clone, Debug)]
pub struct CompactStore {
    n: usize,
    edges: Vec<Edge>,
}

impl CompactStore {
    pub fn new(oracle: &dyn DistanceOracle, initial_pheromone: f64, proximity: f64) -> Result<Self> {
        let n = oracle.city_count();
        let edges = desirabilities(oracle, proximity)?
            .into_iter()
            .map(|(_, _, eta)| Edge { tau: initial_pheromone, eta })
            .collect::<Vec<_>>();
        debug_assert_eq!(edges.len(), pair_count(n));
        Ok(CompactStore { n, edges })
    }
}

impl PheromoneStore for CompactStore {
    fn get(&self, i: usize, j: usize) -> Edge {
        self.edges[pair_index(self.n, i, j)]
    }
    fn evaporate(&mut self, rate: f64) {
        debug_assert!((0.0..=1.0).contains(&rate));
        for edge in self.edges.iter_mut() {
            edge.tau *= 1.0 - rate;
        }
    }
    fn deposit(&mut self, i: usize, j: usize, amount: f64) {
        debug_assert!(amount >= 0.0);
        self.edges[pair_index(self.n, i, j)].tau += amount;
    }
    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}


/// Full n×n matrix kept symmetric, twice the memory of `CompactStore`.
#[derive(Clone, Debug)]
pub struct DenseStore {
    n: usize,
    edges: Vec<Edge>,
}

impl DenseStore {
    pub fn new(oracle: &dyn DistanceOracle, initial_pheromone: f64, proximity: f64) -> Result<Self> {
        let n = oracle.city_count();
        let mut edges = vec![Edge { tau: 0.0, eta: 0.0 }; n * n];
        for (i, j, eta) in desirabilities(oracle, proximity)? {
            let edge = Edge { tau: initial_pheromone, eta };
            edges[i * n + j] = edge;
            edges[j * n + i] = edge;
        }
        Ok(DenseStore { n, edges })
    }
}

impl PheromoneStore for DenseStore {
    fn get(&self, i: usize, j: usize) -> Edge {
        debug_assert!(i != j);
        self.edges[i * self.n + j]
    }
    fn evaporate(&mut self, rate: f64) {
        debug_assert!((0.0..=1.0).contains(&rate));
        for edge in self.edges.iter_mut() {
            edge.tau *= 1.0 - rate;
        }
    }
    fn deposit(&mut self, i: usize, j: usize, amount: f64) {
        debug_assert!(i != j && amount >= 0.0);
        self.edges[i * self.n + j].tau += amount;
        self.edges[j * self.n + i].tau += amount;
    }
    fn edge_count(&self) -> usize {
        pair_count(self.n)
    }
}
