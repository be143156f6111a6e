//! Chromosome encoding for the delivery route search.
//!
//! A chromosome is a permutation of order indices. Its route starts at the
//! origin and visits each order's city in gene order. Fitness is derived
//! from the route's total delay so that lower delay means higher fitness.

use rand::Rng;

use crate::evaluation::DelayEvaluator;

/// A candidate delivery route with its cached total delay.
///
/// Genes are indices into the order list, each appearing exactly once.
/// The delay is computed once at construction and never changes; operators
/// produce new chromosomes instead of mutating evaluated ones.
#[derive(Debug, Clone)]
pub struct Chromosome {
    genes: Vec<usize>,
    delay: f64,
}

impl Chromosome {
    /// Creates a chromosome from a permutation of order indices and
    /// evaluates its delay.
    ///
    /// The sequence must contain every order index exactly once. A violation
    /// is a programming error in an operator, not an input condition.
    pub fn new(genes: Vec<usize>, evaluator: &DelayEvaluator) -> Self {
        debug_assert!(
            is_permutation(&genes),
            "gene sequence must be a permutation of all order indices"
        );
        let delay = evaluator.total_delay(&genes);
        debug_assert!(delay >= 0.0, "total delay must be non-negative");
        Self { genes, delay }
    }

    /// Creates a chromosome from a uniformly random permutation of
    /// `count` order indices.
    pub fn random<R: Rng>(count: usize, evaluator: &DelayEvaluator, rng: &mut R) -> Self {
        let mut genes: Vec<usize> = (0..count).collect();

        // Fisher-Yates shuffle
        for i in (1..genes.len()).rev() {
            let j = rng.random_range(0..=i as u64) as usize;
            genes.swap(i, j);
        }

        Self::new(genes, evaluator)
    }

    /// Returns the order-index permutation.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Returns the number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns true if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Total delay of the encoded route.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Fitness score: `1 / (1 + delay)`, in `(0, 1]`.
    ///
    /// Strictly decreasing in delay, so a zero-delay route has fitness 1 and
    /// every chromosome keeps a nonzero selection weight.
    pub fn fitness(&self) -> f64 {
        1.0 / (1.0 + self.delay)
    }
}

fn is_permutation(genes: &[usize]) -> bool {
    let mut seen = vec![false; genes.len()];
    for &gene in genes {
        if gene >= genes.len() || seen[gene] {
            return false;
        }
        seen[gene] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, TravelTimes};
    use crate::models::{City, Order};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture() -> (Vec<Order>, TravelTimes) {
        let cities = vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 100.0),
            City::new(2, 100.0, 0.0),
            City::new(3, 100.0, 100.0),
        ];
        let dm = DistanceMatrix::from_cities(&cities);
        let travel = TravelTimes::new(&dm, 100.0).expect("positive speed");
        let orders = vec![
            Order::new(0, 1, 0.0, 0.0).expect("valid order"),
            Order::new(1, 2, 0.0, 0.0).expect("valid order"),
            Order::new(2, 3, 0.0, 0.0).expect("valid order"),
        ];
        (orders, travel)
    }

    #[test]
    fn test_new_evaluates_delay() {
        let (orders, travel) = fixture();
        let eval = DelayEvaluator::new(&orders, &travel);
        let chromosome = Chromosome::new(vec![0, 2, 1], &eval);
        assert_eq!(chromosome.genes(), &[0, 2, 1]);
        assert!((chromosome.delay() - eval.total_delay(&[0, 2, 1])).abs() < 1e-10);
    }

    #[test]
    fn test_fitness_decreases_with_delay() {
        let (orders, travel) = fixture();
        let eval = DelayEvaluator::new(&orders, &travel);
        // 0 -> 1 -> 3 -> 2 is shorter than 0 -> 1 -> 2 -> 3 on this square.
        let short = Chromosome::new(vec![0, 2, 1], &eval);
        let long = Chromosome::new(vec![0, 1, 2], &eval);
        assert!(short.delay() < long.delay());
        assert!(short.fitness() > long.fitness());
    }

    #[test]
    fn test_zero_delay_fitness_is_one() {
        let cities = vec![City::new(0, 0.0, 0.0), City::new(1, 0.0, 1.0), City::new(2, 1.0, 0.0)];
        let dm = DistanceMatrix::from_cities(&cities);
        let travel = TravelTimes::new(&dm, 100.0).expect("positive speed");
        let orders = vec![
            Order::new(0, 1, 0.0, 1000.0).expect("valid order"),
            Order::new(1, 2, 0.0, 1000.0).expect("valid order"),
        ];
        let eval = DelayEvaluator::new(&orders, &travel);
        let chromosome = Chromosome::new(vec![0, 1], &eval);
        assert_eq!(chromosome.delay(), 0.0);
        assert_eq!(chromosome.fitness(), 1.0);
    }

    #[test]
    fn test_random_is_permutation() {
        let (orders, travel) = fixture();
        let eval = DelayEvaluator::new(&orders, &travel);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let chromosome = Chromosome::random(orders.len(), &eval, &mut rng);
            let mut sorted = chromosome.genes().to_vec();
            sorted.sort();
            assert_eq!(sorted, vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_random_varies() {
        let (orders, travel) = fixture();
        let eval = DelayEvaluator::new(&orders, &travel);
        let mut rng = StdRng::seed_from_u64(7);
        let first = Chromosome::random(orders.len(), &eval, &mut rng);
        let different = (0..50).any(|_| {
            Chromosome::random(orders.len(), &eval, &mut rng).genes() != first.genes()
        });
        assert!(different);
    }

    #[test]
    fn test_is_permutation_rejects_duplicates() {
        assert!(is_permutation(&[2, 0, 1]));
        assert!(!is_permutation(&[0, 0, 1]));
        assert!(!is_permutation(&[0, 1, 3]));
    }
}
