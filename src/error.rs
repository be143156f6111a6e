//! Configuration and input validation errors.

use std::error::Error;
use std::fmt;

/// A fatal problem with the run configuration or input data.
///
/// All variants are detected during setup, before the evolutionary loop
/// starts. The engine never begins a run with an invalid configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Vehicle speed must be positive and finite.
    InvalidSpeed { speed: f64 },
    /// Map dimensions must be positive and finite.
    InvalidMapSize { width: f64, height: f64 },
    /// Population size must be at least 1.
    InvalidPopulationSize { size: usize },
    /// A probability parameter fell outside `[0, 1]`.
    RateOutOfRange { name: &'static str, value: f64 },
    /// The generation ceiling must be at least 1.
    InvalidMaxGenerations { value: usize },
    /// The search needs at least two orders to recombine.
    TooFewOrders { count: usize },
    /// Two cities share coordinates, degenerating the distance matrix.
    CoincidentCities { first: usize, second: usize },
    /// Two city records carry the same identifier.
    DuplicateCityId { id: usize },
    /// A city carries a non-finite coordinate.
    InvalidCityCoordinates { id: usize },
    /// Two order records carry the same identifier.
    DuplicateOrderId { id: usize },
    /// An order references a city identifier that was never defined.
    UnknownCity { order: usize, city: usize },
    /// An order is addressed to the origin, which is not deliverable to.
    OrderAtOrigin { order: usize },
    /// An order carries a negative or non-finite wait time or time limit.
    InvalidOrderTimes { order: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSpeed { speed } => {
                write!(f, "speed must be positive and finite, got {speed}")
            }
            ConfigError::InvalidMapSize { width, height } => {
                write!(
                    f,
                    "map width and height must be positive, got {width} by {height}"
                )
            }
            ConfigError::InvalidPopulationSize { size } => {
                write!(f, "population size must be at least 1, got {size}")
            }
            ConfigError::RateOutOfRange { name, value } => {
                write!(f, "{name} rate must be within [0, 1], got {value}")
            }
            ConfigError::InvalidMaxGenerations { value } => {
                write!(f, "maximum generation count must be at least 1, got {value}")
            }
            ConfigError::TooFewOrders { count } => {
                write!(f, "at least 2 orders are required, got {count}")
            }
            ConfigError::CoincidentCities { first, second } => {
                write!(f, "cities {first} and {second} share the same coordinates")
            }
            ConfigError::DuplicateCityId { id } => {
                write!(f, "duplicate city id {id}")
            }
            ConfigError::InvalidCityCoordinates { id } => {
                write!(f, "city {id} has a non-finite coordinate")
            }
            ConfigError::DuplicateOrderId { id } => {
                write!(f, "duplicate order id {id}")
            }
            ConfigError::UnknownCity { order, city } => {
                write!(f, "order {order} references unknown city {city}")
            }
            ConfigError::OrderAtOrigin { order } => {
                write!(f, "order {order} is addressed to the origin city")
            }
            ConfigError::InvalidOrderTimes { order } => {
                write!(
                    f,
                    "order {order} has a negative or non-finite wait time or time limit"
                )
            }
        }
    }
}

impl Error for ConfigError {}
