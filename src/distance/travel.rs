//! Travel time lookup derived from distances and vehicle speed.

use super::DistanceMatrix;

/// Travel times between locations, precomputed as `distance / speed`.
///
/// # Examples
///
/// ```
/// use delivery_ga::models::City;
/// use delivery_ga::distance::{DistanceMatrix, TravelTimes};
///
/// let cities = vec![City::new(0, 0.0, 0.0), City::new(1, 30.0, 40.0)];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let tt = TravelTimes::new(&dm, 100.0).expect("positive speed");
/// assert!((tt.get(0, 1) - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct TravelTimes {
    times: DistanceMatrix,
}

impl TravelTimes {
    /// Scales a distance matrix by vehicle speed.
    ///
    /// Returns `None` if `speed` is not a positive finite number.
    pub fn new(distances: &DistanceMatrix, speed: f64) -> Option<Self> {
        if !(speed.is_finite() && speed > 0.0) {
            return None;
        }
        let n = distances.size();
        let mut data = Vec::with_capacity(n * n);
        for from in 0..n {
            for to in 0..n {
                data.push(distances.get(from, to) / speed);
            }
        }
        let times = DistanceMatrix::from_data(n, data)?;
        Some(Self { times })
    }

    /// Returns the travel time from location `from` to location `to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.times.get(from, to)
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.times.size()
    }
}
