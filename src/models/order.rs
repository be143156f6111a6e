//! Delivery orders with waiting time and delivery time limit.

/// A delivery order bound to one destination city.
///
/// `wait_time` is how long the customer has already been waiting when the
/// courier dispatches; `time_limit` is the total time the customer will
/// tolerate. Arriving `t` time units after dispatch contributes
/// `max(0, wait_time + t - time_limit)` to the route's delay.
///
/// # Examples
///
/// ```
/// use delivery_ga::models::Order;
///
/// let order = Order::new(7, 2, 10.0, 30.0).unwrap();
/// assert_eq!(order.id(), 7);
/// assert_eq!(order.city(), 2);
/// // Arriving 25 time units after dispatch: 10 + 25 - 30 = 5 late.
/// assert!((order.delay_at(25.0) - 5.0).abs() < 1e-10);
/// // Arriving within the limit costs nothing.
/// assert_eq!(order.delay_at(15.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: usize,
    city: usize,
    wait_time: f64,
    time_limit: f64,
}

impl Order {
    /// Creates a new order.
    ///
    /// `city` is the index of the destination in the ordered city list.
    /// Returns `None` if `wait_time` or `time_limit` is negative or
    /// non-finite.
    pub fn new(id: usize, city: usize, wait_time: f64, time_limit: f64) -> Option<Self> {
        if !wait_time.is_finite() || !time_limit.is_finite() || wait_time < 0.0 || time_limit < 0.0
        {
            return None;
        }
        Some(Self {
            id,
            city,
            wait_time,
            time_limit,
        })
    }

    /// External order ID from the input data.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Index of the destination city in the city list.
    pub fn city(&self) -> usize {
        self.city
    }

    /// Time the customer has already been waiting at dispatch.
    pub fn wait_time(&self) -> f64 {
        self.wait_time
    }

    /// Total time the customer tolerates before counting delay.
    pub fn time_limit(&self) -> f64 {
        self.time_limit
    }

    /// Delay contributed by this order when arriving `elapsed` time units
    /// after dispatch. Zero if the delivery is on time.
    pub fn delay_at(&self, elapsed: f64) -> f64 {
        (self.wait_time + elapsed - self.time_limit).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let o = Order::new(1, 2, 5.0, 20.0).expect("valid");
        assert_eq!(o.id(), 1);
        assert_eq!(o.city(), 2);
        assert_eq!(o.wait_time(), 5.0);
        assert_eq!(o.time_limit(), 20.0);
    }

    #[test]
    fn test_order_rejects_negative_times() {
        assert!(Order::new(1, 2, -1.0, 20.0).is_none());
        assert!(Order::new(1, 2, 5.0, -0.1).is_none());
    }

    #[test]
    fn test_order_rejects_non_finite_times() {
        assert!(Order::new(1, 2, f64::NAN, 20.0).is_none());
        assert!(Order::new(1, 2, 5.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_delay_on_time() {
        let o = Order::new(1, 2, 5.0, 20.0).expect("valid");
        assert_eq!(o.delay_at(0.0), 0.0);
        assert_eq!(o.delay_at(15.0), 0.0);
    }

    #[test]
    fn test_delay_late() {
        let o = Order::new(1, 2, 5.0, 20.0).expect("valid");
        assert!((o.delay_at(16.0) - 1.0).abs() < 1e-10);
        assert!((o.delay_at(100.0) - 85.0).abs() < 1e-10);
    }

    #[test]
    fn test_delay_zero_limits_reduce_to_travel_time() {
        // With wait_time = time_limit = 0, the delay is exactly the
        // elapsed travel time.
        let o = Order::new(1, 2, 0.0, 0.0).expect("valid");
        assert!((o.delay_at(12.5) - 12.5).abs() < 1e-10);
    }
}
