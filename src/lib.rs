pub mod algorithm;
pub mod component;
pub mod driver;
pub mod geo;
pub mod utils;

/// How many epochs pass between two progress events.
pub const REPORT_EVERY: usize = 50;
