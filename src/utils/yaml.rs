use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::{Error, Result};
use crate::geo::{Atlas, City};

#[derive(Deserialize)]
struct AtlasYaml {
    home: City,
    cities: Vec<City>,
}

/// Loads an atlas whose home location becomes city #0.
pub fn load_atlas(path: &str) -> Result<Atlas> {
    let yaml: AtlasYaml = read_yaml(path)?;
    let cities = std::iter::once(yaml.home)
        .chain(yaml.cities)
        .collect();
    Ok(Atlas::new(cities, 0))
}

pub fn load_config(path: &str) -> Result<Config> {
    let config: Config = read_yaml(path)?;
    config.validate()?;
    Ok(config)
}

fn read_yaml<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Io(path.to_owned(), e))?;
    serde_yaml::from_str(&text)
        .map_err(|e| Error::Yaml(path.to_owned(), e))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{MutationOperator, TerminationMode};
    use crate::geo::DistanceOracle;

    #[test]
    fn it_loads_bundled_atlas() {
        let atlas = load_atlas("data/cities/europe.yaml").unwrap();
        assert_eq!(atlas.city_count(), 45);
        assert_eq!(atlas.home(), 0);
        assert_eq!(atlas.city(0).name, "Leiden");
        assert_eq!(atlas.city(1).name, "Andorra");
    }

    #[test]
    fn it_loads_default_config() {
        let config = load_config("data/config/default.yaml").unwrap();
        assert_eq!(config.algorithm, "aco");
        assert_eq!(config.aco.initial_pheromone, 0.2);
        assert_eq!(config.aco.ants, None);
        assert_eq!(config.ga.mutation_operator, MutationOperator::Inversion);
        assert_eq!(config.ga.termination.mode, TerminationMode::Epoch);
    }

    #[test]
    fn it_reports_missing_files() {
        assert!(matches!(load_atlas("data/cities/nowhere.yaml"), Err(Error::Io(..))));
    }

    #[test]
    fn it_rejects_unknown_operator() {
        let text = "name: x\nalgorithm: ga\nseed: 1\nga:\n  mutation_operator: scramble\n";
        let result: std::result::Result<Config, _> = serde_yaml::from_str(text);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("scramble"), "{}", message);
    }

    #[test]
    fn it_rejects_unknown_termination() {
        let text = "name: x\nalgorithm: ga\nseed: 1\nga:\n  termination: { mode: forever, max: 3 }\n";
        let result: std::result::Result<Config, _> = serde_yaml::from_str(text);
        assert!(result.is_err());
    }
}
