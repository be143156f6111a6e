//! Run configuration loaded from a json file.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::ga::GaConfig;

/// Full run configuration.
///
/// ```json
/// {
///   "speed": 100,
///   "mapSize": { "width": 1000, "height": 1000 },
///   "populationSize": 10,
///   "rate": { "cross": 0.4, "mutate": 0.01 },
///   "elitism": true,
///   "maxIter": { "total": 50, "unchanged": 0 },
///   "seed": 42
/// }
/// ```
///
/// `seed` is optional; without it every run draws fresh randomness.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    pub speed: f64,
    pub map_size: MapSize,
    pub population_size: usize,
    pub rate: Rates,
    pub elitism: bool,
    pub max_iter: IterationLimits,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Rectangle that city coordinates are clamped into.
#[derive(Debug, Clone, Deserialize)]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

/// Crossover and mutation probabilities.
#[derive(Debug, Clone, Deserialize)]
pub struct Rates {
    pub cross: f64,
    pub mutate: f64,
}

/// Generation ceilings: `total` is a hard cap, `unchanged` stops the run
/// after that many generations without improvement (zero disables it).
#[derive(Debug, Clone, Deserialize)]
pub struct IterationLimits {
    pub total: usize,
    pub unchanged: usize,
}

impl RunConfig {
    /// Loads and validates a configuration file.
    pub fn from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let config: RunConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks all parameters, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::InvalidSpeed { speed: self.speed });
        }
        let (width, height) = (self.map_size.width, self.map_size.height);
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ConfigError::InvalidMapSize { width, height });
        }
        self.ga_config().validate()
    }

    /// Extracts the evolution parameters.
    pub fn ga_config(&self) -> GaConfig {
        let config = GaConfig::default()
            .with_population_size(self.population_size)
            .with_cross_rate(self.rate.cross)
            .with_mutate_rate(self.rate.mutate)
            .with_elitism(self.elitism)
            .with_max_generations(self.max_iter.total)
            .with_max_unchanged(self.max_iter.unchanged);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
