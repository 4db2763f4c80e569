use std::convert::TryFrom;
use std::str::FromStr;
use rand::Rng;
use serde::Deserialize;
use crate::geo::Route;
use crate::utils::{Error, Result};


/// Mutation strategy of the genetic algorithm, fixed for a whole run.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum MutationOperator {
    Swap,
    Inversion,
}

impl MutationOperator {
    pub fn apply<R: Rng + ?Sized>(&self, route: &mut [usize], rng: &mut R) {
        if route.len() < 2 {
            return;
        }
        let (a, b) = two_positions(route.len(), rng);
        match self {
            MutationOperator::Swap      => route.swap(a, b),
            MutationOperator::Inversion => invert(route, a, b),
        }
    }
}

impl FromStr for MutationOperator {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "swap"      => Ok(MutationOperator::Swap),
            "inversion" => Ok(MutationOperator::Inversion),
            _           => Err(Error::UnknownOperator(s.to_owned())),
        }
    }
}

impl TryFrom<String> for MutationOperator {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Two distinct positions below `len`, in random order.
pub fn two_positions<R: Rng + ?Sized>(len: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(len >= 2);
    let a = rng.gen_range(0..len);
    let mut b = rng.gen_range(0..len - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// Reverses `[a, b)` when `a < b`, otherwise the segment wrapping around
/// the end, `[a, len)` followed by `[0, b]`.
pub fn invert(route: &mut [usize], a: usize, b: usize) {
    if a < b {
        route[a..b].reverse();
        return;
    }
    let positions: Vec<usize> = (a..route.len()).chain(0..=b).collect();
    let reversed: Vec<usize> = positions.iter().rev()
        .map(|&p| route[p])
        .collect();
    for (&p, city) in positions.iter().zip(reversed) {
        route[p] = city;
    }
}

/// Copies a random substring of `a` into `b` at the offset it had in `a`.
pub fn crossover<R: Rng + ?Sized>(a: &[usize], b: &[usize], rng: &mut R) -> Route {
    debug_assert_eq!(a.len(), b.len());
    if a.is_empty() {
        return b.to_vec();
    }
    let start = rng.gen_range(0..a.len());
    let end = rng.gen_range(start..=a.len());
    crossover_at(a, b, start, end)
}

pub fn crossover_at(a: &[usize], b: &[usize], start: usize, end: usize) -> Route {
    let segment = &a[start..end];
    let mut child: Route = b.iter()
        .copied()
        .filter(|city| !segment.contains(city))
        .collect();
    child.splice(start..start, segment.iter().copied());
    child
}
