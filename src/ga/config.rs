//! Evolution parameters.

use crate::error::ConfigError;

/// Parameters controlling the evolutionary search.
///
/// # Examples
///
/// ```
/// use delivery_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    population_size: usize,
    cross_rate: f64,
    mutate_rate: f64,
    elitism: bool,
    max_generations: usize,
    max_unchanged: usize,
    seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            cross_rate: 0.4,
            mutate_rate: 0.01,
            elitism: true,
            max_generations: 50,
            max_unchanged: 0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the number of chromosomes per generation.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the per-offspring crossover probability.
    pub fn with_cross_rate(mut self, rate: f64) -> Self {
        self.cross_rate = rate;
        self
    }

    /// Sets the per-offspring mutation probability.
    pub fn with_mutate_rate(mut self, rate: f64) -> Self {
        self.mutate_rate = rate;
        self
    }

    /// Enables or disables carrying the best chromosome into the next
    /// generation.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the hard generation ceiling.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets how many consecutive generations without improvement stop the
    /// run early. Zero disables the check.
    pub fn with_max_unchanged(mut self, generations: usize) -> Self {
        self.max_unchanged = generations;
        self
    }

    /// Fixes the random seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of chromosomes per generation.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Per-offspring crossover probability.
    pub fn cross_rate(&self) -> f64 {
        self.cross_rate
    }

    /// Per-offspring mutation probability.
    pub fn mutate_rate(&self) -> f64 {
        self.mutate_rate
    }

    /// Whether the best chromosome is carried into the next generation.
    pub fn elitism(&self) -> bool {
        self.elitism
    }

    /// Hard generation ceiling.
    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Generations without improvement that stop the run early; zero
    /// disables the check.
    pub fn max_unchanged(&self) -> usize {
        self.max_unchanged
    }

    /// Fixed random seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Checks the parameters, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidPopulationSize {
                size: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.cross_rate) {
            return Err(ConfigError::RateOutOfRange {
                name: "crossover",
                value: self.cross_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.mutate_rate) {
            return Err(ConfigError::RateOutOfRange {
                name: "mutation",
                value: self.mutate_rate,
            });
        }
        if self.max_generations == 0 {
            return Err(ConfigError::InvalidMaxGenerations {
                value: self.max_generations,
            });
        }
        Ok(())
    }
}
