//! Generational evolution loop.
//!
//! The engine is an [`Iterator`]: each call to `next` runs exactly one
//! generation and yields a progress report, so a caller can stop, observe,
//! or resume the search between generations. [`GaEngine::run_to_end`]
//! consumes the remaining generations and returns the final result.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::{DistanceMatrix, TravelTimes};
use crate::error::ConfigError;
use crate::evaluation::{DelayEvaluator, ORIGIN};
use crate::models::{City, Order, Route};

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::population::Population;

/// Why the run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Best fitness was unchanged for the configured number of generations.
    Converged,
    /// The generation ceiling was reached.
    Exhausted,
}

/// Progress report yielded after each generation.
#[derive(Debug, Clone)]
pub struct Generation {
    /// 1-based generation number.
    pub index: usize,
    /// True if this generation improved on the best-ever delay.
    pub improved: bool,
    /// Best-ever delay before this generation ran.
    pub previous_delay: f64,
    /// Best-ever delay after this generation.
    pub best_delay: f64,
    /// Best-ever route as a sequence of order identifiers.
    pub best_route: Vec<usize>,
}

/// Final result of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Best route found, with per-stop arrival times and delays.
    pub route: Route,
    /// Which stopping condition ended the run.
    pub termination: Termination,
    /// Number of generations executed.
    pub generations: usize,
}

/// Evolutionary search for the minimum-delay delivery route.
///
/// Each generation selects two parents per offspring slot by roulette,
/// recombines them with probability `cross_rate` (otherwise the offspring
/// copies the first parent), mutates with probability `mutate_rate`, and,
/// with elitism enabled, overwrites the worst offspring with the carried
/// best route so the best-ever delay never regresses.
///
/// # Examples
///
/// ```
/// use delivery_ga::ga::{GaConfig, GaEngine, Termination};
/// use delivery_ga::models::{City, Order};
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 30.0, 40.0),
///     City::new(2, 80.0, 10.0),
/// ];
/// let orders = vec![
///     Order::new(0, 1, 0.0, 0.0).unwrap(),
///     Order::new(1, 2, 0.0, 0.0).unwrap(),
/// ];
/// let config = GaConfig::default().with_max_generations(20).with_seed(1);
/// let mut engine = GaEngine::new(&cities, orders, 100.0, config).unwrap();
///
/// let summary = engine.run_to_end();
/// assert_eq!(summary.generations, 20);
/// assert_eq!(summary.termination, Termination::Exhausted);
/// assert_eq!(summary.route.len(), 2);
/// ```
pub struct GaEngine {
    orders: Vec<Order>,
    travel: TravelTimes,
    config: GaConfig,
    rng: StdRng,
    population: Population,
    best: Chromosome,
    generation: usize,
    unchanged: usize,
    termination: Option<Termination>,
}

impl GaEngine {
    /// Validates the inputs, builds the travel time table, and seeds an
    /// initial random population.
    ///
    /// The first city is the origin; orders may not be addressed to it.
    pub fn new(
        cities: &[City],
        orders: Vec<Order>,
        speed: f64,
        config: GaConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ConfigError::InvalidSpeed { speed });
        }
        if orders.len() < 2 {
            return Err(ConfigError::TooFewOrders {
                count: orders.len(),
            });
        }
        for city in cities {
            if !(city.x().is_finite() && city.y().is_finite()) {
                return Err(ConfigError::InvalidCityCoordinates { id: city.id() });
            }
        }
        let distances = DistanceMatrix::from_cities(cities);
        if let Some((i, j)) = distances.coincident_pair() {
            return Err(ConfigError::CoincidentCities {
                first: cities[i].id(),
                second: cities[j].id(),
            });
        }
        let travel =
            TravelTimes::new(&distances, speed).ok_or(ConfigError::InvalidSpeed { speed })?;
        for order in &orders {
            if order.city() == ORIGIN {
                return Err(ConfigError::OrderAtOrigin { order: order.id() });
            }
            if order.city() >= travel.size() {
                return Err(ConfigError::UnknownCity {
                    order: order.id(),
                    city: order.city(),
                });
            }
        }

        let mut rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let evaluator = DelayEvaluator::new(&orders, &travel);
        let population = Population::generate(
            config.population_size(),
            orders.len(),
            &evaluator,
            &mut rng,
        );
        let best = population.best().clone();

        Ok(Self {
            orders,
            travel,
            config,
            rng,
            population,
            best,
            generation: 0,
            unchanged: 0,
            termination: None,
        })
    }

    /// Number of generations executed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best-ever total delay found so far.
    pub fn best_delay(&self) -> f64 {
        self.best.delay()
    }

    /// Best-ever route as a sequence of order identifiers.
    pub fn best_order_ids(&self) -> Vec<usize> {
        self.best
            .genes()
            .iter()
            .map(|&gene| self.orders[gene].id())
            .collect()
    }

    /// Best-ever route with per-stop arrival times and delays.
    pub fn best_route(&self) -> Route {
        DelayEvaluator::new(&self.orders, &self.travel).build_route(self.best.genes())
    }

    /// The orders being routed.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Why the run stopped, once it has.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Runs the remaining generations and returns the final result.
    pub fn run_to_end(&mut self) -> RunSummary {
        while self.next().is_some() {}
        RunSummary {
            route: self.best_route(),
            termination: self.termination.unwrap_or(Termination::Exhausted),
            generations: self.generation,
        }
    }
}

impl Iterator for GaEngine {
    type Item = Generation;

    /// Runs one generation. Returns `None` once a stopping condition holds.
    fn next(&mut self) -> Option<Generation> {
        if self.termination.is_some() {
            return None;
        }
        let previous_delay = self.best.delay();
        let evaluator = DelayEvaluator::new(&self.orders, &self.travel);

        let mut items = Vec::with_capacity(self.config.population_size());
        for _ in 0..self.config.population_size() {
            let first = self.population.select(&mut self.rng);
            let second = self.population.select(&mut self.rng);
            let mut genes = if self.rng.random::<f64>() < self.config.cross_rate() {
                order_crossover(first.genes(), second.genes(), &mut self.rng)
            } else {
                first.genes().to_vec()
            };
            if self.rng.random::<f64>() < self.config.mutate_rate() {
                swap_mutation(&mut genes, &mut self.rng);
            }
            items.push(Chromosome::new(genes, &evaluator));
        }
        let mut next = Population::from_items(items);

        if self.config.elitism() {
            let worst = next.worst_index();
            next.replace(worst, self.best.clone());
        }

        let generation_best = next.best();
        let improved = generation_best.fitness() > self.best.fitness();
        if improved {
            self.best = generation_best.clone();
            self.unchanged = 0;
        } else {
            self.unchanged += 1;
        }
        self.population = next;
        self.generation += 1;

        if self.config.max_unchanged() > 0 && self.unchanged >= self.config.max_unchanged() {
            self.termination = Some(Termination::Converged);
        } else if self.generation >= self.config.max_generations() {
            self.termination = Some(Termination::Exhausted);
        }

        Some(Generation {
            index: self.generation,
            improved,
            previous_delay,
            best_delay: self.best.delay(),
            best_route: self.best_order_ids(),
        })
    }
}
