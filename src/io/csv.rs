//! City and order input in csv format.
//!
//! Cities: `ID,X,Y` with the first row being the origin. Orders:
//! `ID,City,WaitTime,TimeLimit` where `City` references a city `ID`.
//! Order records are resolved to city indices here, so the rest of the
//! crate never sees raw identifiers in distance lookups.

use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::{City, Order};

#[derive(Debug, Deserialize)]
struct CityRow {
    #[serde(rename = "ID")]
    id: usize,
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
}

#[derive(Debug, Deserialize)]
struct OrderRow {
    #[serde(rename = "ID")]
    id: usize,
    #[serde(rename = "City")]
    city: usize,
    #[serde(rename = "WaitTime")]
    wait_time: f64,
    #[serde(rename = "TimeLimit")]
    time_limit: f64,
}

/// Reads cities, clamping coordinates into the map rectangle.
///
/// A city outside `[0, width] x [0, height]` is moved to the nearest edge
/// and a relocation warning goes to stderr. Duplicate identifiers and
/// non-finite coordinates are rejected. The first row becomes the origin.
pub fn read_cities<R: Read>(
    reader: R,
    width: f64,
    height: f64,
) -> Result<Vec<City>, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(BufReader::new(reader));
    let mut cities = Vec::new();
    let mut seen = HashSet::new();

    for row in csv_reader.deserialize() {
        let row: CityRow = row?;
        if !seen.insert(row.id) {
            return Err(Box::new(ConfigError::DuplicateCityId { id: row.id }));
        }
        // NaN passes clamp unchanged.
        if !(row.x.is_finite() && row.y.is_finite()) {
            return Err(Box::new(ConfigError::InvalidCityCoordinates { id: row.id }));
        }
        let x = row.x.clamp(0.0, width);
        let y = row.y.clamp(0.0, height);
        if x != row.x || y != row.y {
            eprintln!(
                "Warning: City {{{}}} has been relocated from ({}, {}) to ({}, {})",
                row.id, row.x, row.y, x, y
            );
        }
        cities.push(City::new(row.id, x, y));
    }
    Ok(cities)
}

/// Reads orders and resolves each city identifier to its index in `cities`.
///
/// Duplicate order identifiers, references to undefined cities, and
/// negative or non-finite times are rejected.
pub fn read_orders<R: Read>(reader: R, cities: &[City]) -> Result<Vec<Order>, Box<dyn Error>> {
    let city_index: HashMap<usize, usize> = cities
        .iter()
        .enumerate()
        .map(|(index, city)| (city.id(), index))
        .collect();

    let mut csv_reader = csv::Reader::from_reader(BufReader::new(reader));
    let mut orders = Vec::new();
    let mut seen = HashSet::new();

    for row in csv_reader.deserialize() {
        let row: OrderRow = row?;
        if !seen.insert(row.id) {
            return Err(Box::new(ConfigError::DuplicateOrderId { id: row.id }));
        }
        let index = *city_index.get(&row.city).ok_or(ConfigError::UnknownCity {
            order: row.id,
            city: row.city,
        })?;
        let order = Order::new(row.id, index, row.wait_time, row.time_limit)
            .ok_or(ConfigError::InvalidOrderTimes { order: row.id })?;
        orders.push(order);
    }
    Ok(orders)
}

/// Reads cities from a file path.
pub fn read_cities_file(
    path: &Path,
    width: f64,
    height: f64,
) -> Result<Vec<City>, Box<dyn Error>> {
    read_cities(File::open(path)?, width, height)
}

/// Reads orders from a file path.
pub fn read_orders_file(path: &Path, cities: &[City]) -> Result<Vec<Order>, Box<dyn Error>> {
    read_orders(File::open(path)?, cities)
}
