use crate::algorithm::Outcome;
use crate::geo::Route;


/// Best tour seen so far, it never gets worse.
#[derive(Clone, Debug)]
pub struct Incumbent {
    route: Route,
    length: f64,
    stagnation: usize,
}

impl Default for Incumbent {
    fn default() -> Self {
        Incumbent { route: vec![], length: f64::INFINITY, stagnation: 0 }
    }
}

impl Incumbent {
    pub fn new() -> Self {
        Self::default()
    }
    /// Offers the best tour of one iteration. Returns whether it improved on
    /// the record; otherwise the stagnation counter grows by one.
    pub fn observe(&mut self, route: &[usize], length: f64) -> bool {
        if length < self.length {
            self.route = route.to_vec();
            self.length = length;
            self.stagnation = 0;
            true
        } else {
            self.stagnation += 1;
            false
        }
    }
    pub fn route(&self) -> &[usize] {
        &self.route
    }
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }
    pub fn into_outcome(self, epochs: usize, history: Vec<f64>) -> Outcome {
        Outcome { route: self.route, length: self.length, epochs, history }
    }
}
