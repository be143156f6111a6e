//! Delay evaluation for delivery sequences.

use crate::distance::TravelTimes;
use crate::models::{Order, Route, Stop};

/// Location index of the depot all routes start from.
pub const ORIGIN: usize = 0;

/// Evaluates the total delay of a delivery sequence.
///
/// A sequence is a permutation of order indices. The vehicle starts at the
/// origin, visits each order's city in sequence order, and accumulates pure
/// travel time. Each order contributes the amount by which its wait time plus
/// the elapsed travel time exceeds its time limit. There is no return leg.
pub struct DelayEvaluator<'a> {
    orders: &'a [Order],
    travel: &'a TravelTimes,
}

impl<'a> DelayEvaluator<'a> {
    /// Creates an evaluator over the given orders and travel times.
    pub fn new(orders: &'a [Order], travel: &'a TravelTimes) -> Self {
        Self { orders, travel }
    }

    /// Total delay of the given sequence, without building a route.
    ///
    /// This is the hot path of the optimizer and performs no allocation.
    pub fn total_delay(&self, sequence: &[usize]) -> f64 {
        let mut elapsed = 0.0;
        let mut location = ORIGIN;
        let mut total = 0.0;
        for &index in sequence {
            let order = &self.orders[index];
            elapsed += self.travel.get(location, order.city());
            total += order.delay_at(elapsed);
            location = order.city();
        }
        total
    }

    /// Builds a full route with per-stop arrival times and delays.
    pub fn build_route(&self, sequence: &[usize]) -> Route {
        let mut route = Route::new();
        let mut elapsed = 0.0;
        let mut location = ORIGIN;
        for &index in sequence {
            let order = &self.orders[index];
            elapsed += self.travel.get(location, order.city());
            route.push_stop(Stop {
                order: index,
                arrival_time: elapsed,
                delay: order.delay_at(elapsed),
            });
            location = order.city();
        }
        route
    }

    /// Orders being evaluated.
    pub fn orders(&self) -> &[Order] {
        self.orders
    }
}
