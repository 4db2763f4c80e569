use serde::Deserialize;

/// Mean Earth radius in kilometers
const EARTH_RADIUS: f64 = 6371.0;


#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl City {
    pub fn new(name: &str, lat: f64, lng: f64) -> Self {
        City { name: name.to_owned(), lat, lng }
    }
}

/// Great circle distance in kilometers between two points given in degrees.
pub fn haversine(a: &City, b: &City) -> f64 {
    let (lat1, lng1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lng2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;
    let h = (dlat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * h.sqrt().asin() * EARTH_RADIUS
}


/// Symmetric distances over a fixed set of cities, one of which is home.
///
/// Every tour leaves from home and returns to it, so routes handed to
/// `tour_length` list the other cities only.
pub trait DistanceOracle {
    fn city_count(&self) -> usize;
    fn home(&self) -> usize;
    fn distance(&self, a: usize, b: usize) -> f64;
    fn tour_length(&self, route: &[usize]) -> f64 {
        if route.is_empty() {
            return 0.0;
        }
        let home = self.home();
        let inner: f64 = route.windows(2)
            .map(|pair| self.distance(pair[0], pair[1]))
            .sum();
        self.distance(home, route[0]) + inner + self.distance(route[route.len() - 1], home)
    }
    fn others(&self) -> Vec<usize> {
        let home = self.home();
        (0..self.city_count()).filter(|&c| c != home).collect()
    }
}


#[derive(Clone, Debug, Default)]
pub struct Atlas {
    cities: Vec<City>,
    home: usize,
}

impl Atlas {
    pub fn new(cities: Vec<City>, home: usize) -> Self {
        debug_assert!(cities.is_empty() || home < cities.len());
        Atlas { cities, home }
    }
    pub fn city(&self, index: usize) -> &City {
        debug_assert!(index < self.cities.len());
        &self.cities[index]
    }
    pub fn cities(&self) -> &[City] {
        &self.cities
    }
    /// Whether the route visits each non-home city exactly once.
    pub fn validate_route(&self, route: &[usize]) -> bool {
        let mut seen = vec![false; self.cities.len()];
        for &city in route {
            if city >= seen.len() || city == self.home || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        route.len() + 1 == self.cities.len()
    }
}

impl DistanceOracle for Atlas {
    fn city_count(&self) -> usize {
        self.cities.len()
    }
    fn home(&self) -> usize {
        self.home
    }
    fn distance(&self, a: usize, b: usize) -> f64 {
        haversine(&self.cities[a], &self.cities[b])
    }
}
