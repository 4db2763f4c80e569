mod atlas;

pub use atlas::{haversine, Atlas, City, DistanceOracle};

pub type Route = Vec<usize>;
