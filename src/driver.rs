use std::time::Instant;
use tracing::info;
use crate::algorithm::{Algorithm, AlgorithmEnum, AntColony, Genetic, Outcome, RandomSearch};
use crate::geo::{Atlas, DistanceOracle};
use crate::utils::config::Config;
use crate::utils::{Error, Result};

pub const ALGORITHMS: [&str; 3] = ["aco", "ga", "random"];


/// Receives the best tour of a run, purely observational.
pub trait Presenter {
    fn present(&mut self, route: &[usize], length: f64);
}

pub struct ConsolePresenter<'a> {
    atlas: &'a Atlas,
}

impl<'a> ConsolePresenter<'a> {
    pub fn new(atlas: &'a Atlas) -> Self {
        ConsolePresenter { atlas }
    }
    fn render(&self, route: &[usize], length: f64) -> String {
        let home = &self.atlas.city(self.atlas.home()).name;
        let mut msg = format!("tour of {} stops from {}\n", route.len(), home);
        for (nth, &city) in route.iter().enumerate() {
            msg.push_str(&format!("- stop #{:02} {}\n", nth + 1, self.atlas.city(city).name));
        }
        msg.push_str(&format!("back to {}, route length {:.2} km\n", home, length));
        msg
    }
}

impl<'a> Presenter for ConsolePresenter<'a> {
    fn present(&mut self, route: &[usize], length: f64) {
        print!("{}", self.render(route, length));
    }
}


pub struct Driver {
    pub algorithm: AlgorithmEnum,
    pub atlas: Atlas,
    pub config: Config,
}

impl Driver {
    pub fn new(atlas: Atlas, config: Config) -> Result<Self> {
        config.validate()?;
        let algorithm: AlgorithmEnum = match config.algorithm.as_str() {
            "aco"    => AntColony::new(config.aco.clone(), config.seed).into(),
            "ga"     => Genetic::new(config.ga.clone(), config.seed).into(),
            "random" => RandomSearch::new(config.random.clone(), config.seed).into(),
            other    => return Err(Error::UnknownAlgorithm(other.to_owned())),
        };
        Ok(Driver { algorithm, atlas, config })
    }
    /// Searches once, hands the best tour to `sink` and returns it together
    /// with the elapsed time in microseconds.
    pub fn run(&mut self, sink: &mut dyn Presenter) -> Result<(Outcome, u128)> {
        let name = self.algorithm.name();
        info!(algorithm = name, cities = self.atlas.city_count(), seed = self.config.seed, "searching");
        let start = Instant::now();
        let outcome = self.algorithm.optimize(&self.atlas)?;
        let elapsed = start.elapsed().as_micros();
        info!(algorithm = name, epochs = outcome.epochs, length = outcome.length, elapsed = elapsed as u64, "done");
        sink.present(&outcome.route, outcome.length);
        Ok((outcome, elapsed))
    }
    /// Runs every algorithm on the same instance and seed.
    pub fn compare(atlas: &Atlas, config: &Config, sink: &mut dyn Presenter)
        -> Result<Vec<(&'static str, Outcome)>> {
        let mut results = Vec::with_capacity(ALGORITHMS.len());
        for &name in ALGORITHMS.iter() {
            let config = Config { algorithm: name.to_owned(), ..config.clone() };
            let mut driver = Driver::new(atlas.clone(), config)?;
            let (outcome, _) = driver.run(sink)?;
            results.push((name, outcome));
        }
        Ok(results)
    }
}

pub fn show_brief(results: &[(&str, Outcome)]) -> String {
    let mut msg = format!("{0: <10} {1: <10} {2: <12} {3}\n", "", "epochs", "first", "best");
    for (name, outcome) in results {
        let first = outcome.history.first().copied().unwrap_or(f64::INFINITY);
        msg.push_str(&format!("{0: <10} {1: <10} {2: <12.2} {3:.2}\n",
                              name, outcome.epochs, first, outcome.length));
    }
    msg
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::yaml;

    #[derive(Default)]
    struct Recorder {
        tours: Vec<(Vec<usize>, f64)>,
    }

    impl Presenter for Recorder {
        fn present(&mut self, route: &[usize], length: f64) {
            self.tours.push((route.to_vec(), length));
        }
    }

    fn setup(algorithm: &str) -> (Atlas, Config) {
        let atlas = yaml::load_atlas("data/cities/square.yaml").unwrap();
        let mut config = yaml::load_config("data/config/default.yaml").unwrap();
        config.algorithm = algorithm.to_owned();
        config.aco.termination.max = 10;
        config.ga.termination.max = 10;
        config.random.termination.max = 10;
        (atlas, config)
    }

    #[test]
    fn it_presents_best_tour() {
        let (atlas, config) = setup("ga");
        let mut driver = Driver::new(atlas, config).unwrap();
        let mut recorder = Recorder::default();
        let (outcome, _) = driver.run(&mut recorder).unwrap();
        assert_eq!(recorder.tours, vec![(outcome.route.clone(), outcome.length)]);
    }

    #[test]
    fn it_rejects_unknown_algorithm() {
        let (atlas, config) = setup("tabu");
        assert!(matches!(Driver::new(atlas, config), Err(Error::UnknownAlgorithm(_))));
    }

    #[test]
    fn it_compares_every_algorithm() {
        let (atlas, config) = setup("aco");
        let mut recorder = Recorder::default();
        let results = Driver::compare(&atlas, &config, &mut recorder).unwrap();
        let names: Vec<_> = results.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ALGORITHMS.to_vec());
        assert_eq!(recorder.tours.len(), 3);
        let brief = show_brief(&results);
        assert_eq!(brief.lines().count(), 4);
    }

    #[test]
    fn it_renders_city_names() {
        let (atlas, _) = setup("aco");
        let presenter = ConsolePresenter::new(&atlas);
        let msg = presenter.render(&[1, 2, 3], 12.5);
        assert_eq!(msg.lines().count(), 5);
        assert!(msg.starts_with("tour of 3 stops from Origin"));
        assert!(msg.contains("- stop #02 NorthEast"));
        assert!(msg.contains("12.50 km"));
    }
}
