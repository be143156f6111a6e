//! Domain model types for the delivery routing problem.
//!
//! Provides the core abstractions: cities on a planar map, delivery orders
//! with waiting times and time limits, and routes as ordered sequences of
//! timed stops.

mod city;
mod order;
mod route;

pub use city::City;
pub use order::Order;
pub use route::{Route, Stop};
