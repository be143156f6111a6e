//! Route and stop types.

/// A single delivery stop within a route.
///
/// Tracks the order index along with computed timing and delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Index of the order being delivered, into the problem's order list.
    pub order: usize,
    /// Travel time elapsed since dispatch when the courier arrives.
    pub arrival_time: f64,
    /// Delay contributed by this stop (zero if on time).
    pub delay: f64,
}

/// An ordered sequence of delivery stops for a single courier.
///
/// A route implicitly starts at the origin city (not stored in `stops`)
/// and ends at its last stop; the courier does not return to the origin.
/// The stop sequence visits every order exactly once.
///
/// # Examples
///
/// ```
/// use delivery_ga::models::{Route, Stop};
///
/// let mut route = Route::new();
/// route.push_stop(Stop {
///     order: 0,
///     arrival_time: 12.0,
///     delay: 2.0,
/// });
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.total_delay(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    stops: Vec<Stop>,
    total_delay: f64,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self {
            stops: Vec::new(),
            total_delay: 0.0,
        }
    }

    /// Appends a stop to the end of this route, accumulating its delay.
    pub fn push_stop(&mut self, stop: Stop) {
        self.total_delay += stop.delay;
        self.stops.push(stop);
    }

    /// Returns the ordered sequence of stops.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns the number of delivery stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns the order indices in visit order.
    pub fn order_indices(&self) -> Vec<usize> {
        self.stops.iter().map(|s| s.order).collect()
    }

    /// Total delay accumulated over all stops.
    pub fn total_delay(&self) -> f64 {
        self.total_delay
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.total_delay(), 0.0);
    }

    #[test]
    fn test_route_push_stop() {
        let mut r = Route::new();
        r.push_stop(Stop {
            order: 2,
            arrival_time: 10.0,
            delay: 0.0,
        });
        r.push_stop(Stop {
            order: 0,
            arrival_time: 25.0,
            delay: 5.0,
        });
        assert_eq!(r.len(), 2);
        assert_eq!(r.order_indices(), vec![2, 0]);
        assert!((r.total_delay() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_accumulates_delay() {
        let mut r = Route::new();
        for delay in [1.5, 0.0, 3.5] {
            r.push_stop(Stop {
                order: 0,
                arrival_time: 0.0,
                delay,
            });
        }
        assert!((r.total_delay() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_stop_equality() {
        let a = Stop {
            order: 1,
            arrival_time: 10.0,
            delay: 2.0,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
