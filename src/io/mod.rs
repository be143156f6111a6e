//! Input loading: run configuration and city/order tables.

mod config;
mod csv;

pub use config::{IterationLimits, MapSize, Rates, RunConfig};
pub use csv::{read_cities, read_cities_file, read_orders, read_orders_file};
