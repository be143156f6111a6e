//! # delivery-ga
//!
//! Delivery route optimization library that minimizes total customer delay
//! over a fixed city set, solving a time-windowed traveling-salesman variant
//! with a genetic algorithm.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Order, Route)
//! - [`distance`] — Euclidean distance and travel time tables
//! - [`evaluation`] — Route delay evaluation
//! - [`ga`] — Genetic engine (ordered crossover, swap mutation, elitism)
//! - [`io`] — Configuration and city/order table loading
//! - [`error`] — Input validation errors

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod io;
pub mod models;
