//! Population of candidate routes.

use rand::Rng;

use crate::evaluation::DelayEvaluator;

use super::chromosome::Chromosome;

/// A fixed-size collection of chromosomes forming one generation.
///
/// Best and worst lookups break ties by keeping the first-encountered
/// chromosome, so runs with a fixed seed are fully reproducible.
#[derive(Debug, Clone)]
pub struct Population {
    items: Vec<Chromosome>,
}

impl Population {
    /// Builds a population of `size` independently random chromosomes.
    pub fn generate<R: Rng>(
        size: usize,
        order_count: usize,
        evaluator: &DelayEvaluator,
        rng: &mut R,
    ) -> Self {
        let items = (0..size)
            .map(|_| Chromosome::random(order_count, evaluator, rng))
            .collect();
        Self { items }
    }

    /// Wraps an already-built generation.
    pub fn from_items(items: Vec<Chromosome>) -> Self {
        Self { items }
    }

    /// Returns all chromosomes in this generation.
    pub fn items(&self) -> &[Chromosome] {
        &self.items
    }

    /// Number of chromosomes.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns the highest-fitness chromosome, first encountered on ties.
    ///
    /// # Panics
    ///
    /// Panics if the population is empty.
    pub fn best(&self) -> &Chromosome {
        let mut best = &self.items[0];
        for item in &self.items[1..] {
            if item.fitness() > best.fitness() {
                best = item;
            }
        }
        best
    }

    /// Returns the index of the lowest-fitness chromosome, first encountered
    /// on ties.
    ///
    /// # Panics
    ///
    /// Panics if the population is empty.
    pub fn worst_index(&self) -> usize {
        let mut worst = 0;
        for (i, item) in self.items.iter().enumerate().skip(1) {
            if item.fitness() < self.items[worst].fitness() {
                worst = i;
            }
        }
        worst
    }

    /// Replaces the chromosome at `index`.
    pub fn replace(&mut self, index: usize, chromosome: Chromosome) {
        self.items[index] = chromosome;
    }

    /// Fitness-proportionate (roulette) selection of one parent.
    ///
    /// Every chromosome has fitness in `(0, 1]`, so each keeps a nonzero
    /// chance of being picked.
    pub fn select<R: Rng>(&self, rng: &mut R) -> &Chromosome {
        let total: f64 = self.items.iter().map(|item| item.fitness()).sum();
        let mut threshold = rng.random::<f64>() * total;
        for item in &self.items {
            threshold -= item.fitness();
            if threshold <= 0.0 {
                return item;
            }
        }
        // Rounding can leave a sliver of threshold unconsumed.
        &self.items[self.items.len() - 1]
    }
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
            City::new(1, 100.0, 0.0),
            City::new(2, 0.0, 100.0),
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
    fn test_generate_size_and_validity() {
        let (orders, travel) = fixture();
        let eval = DelayEvaluator::new(&orders, &travel);
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Population::generate(8, orders.len(), &eval, &mut rng);
        assert_eq!(pop.size(), 8);
        for item in pop.items() {
            let mut sorted = item.genes().to_vec();
            sorted.sort();
            assert_eq!(sorted, vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_best_and_worst() {
        let (orders, travel) = fixture();
        let eval = DelayEvaluator::new(&orders, &travel);
        // On this square, visiting the far corner in the middle beats
        // visiting it first.
        let good = Chromosome::new(vec![0, 2, 1], &eval);
        let bad = Chromosome::new(vec![2, 0, 1], &eval);
        assert!(good.delay() < bad.delay());
        let pop = Population::from_items(vec![bad.clone(), good.clone(), bad.clone()]);
        assert_eq!(pop.best().genes(), good.genes());
        assert_eq!(pop.worst_index(), 0);
    }

    #[test]
    fn test_ties_keep_first_encountered() {
        let (orders, travel) = fixture();
        let eval = DelayEvaluator::new(&orders, &travel);
        // Cities 1 and 2 are mirror images across the diagonal, so swapping
        // them yields an equal-delay route.
        let first = Chromosome::new(vec![0, 1, 2], &eval);
        let second = Chromosome::new(vec![1, 0, 2], &eval);
        assert_eq!(first.delay(), second.delay());
        let pop = Population::from_items(vec![first.clone(), second.clone()]);
        assert_eq!(pop.best().genes(), first.genes());
        assert_eq!(pop.worst_index(), 0);
    }

    #[test]
    fn test_replace() {
        let (orders, travel) = fixture();
        let eval = DelayEvaluator::new(&orders, &travel);
        let a = Chromosome::new(vec![0, 1, 2], &eval);
        let b = Chromosome::new(vec![2, 1, 0], &eval);
        let mut pop = Population::from_items(vec![a.clone(), a.clone()]);
        pop.replace(1, b.clone());
        assert_eq!(pop.items()[1].genes(), b.genes());
    }

    #[test]
    fn test_select_returns_member() {
        let (orders, travel) = fixture();
        let eval = DelayEvaluator::new(&orders, &travel);
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Population::generate(5, orders.len(), &eval, &mut rng);
        for _ in 0..20 {
            let picked = pop.select(&mut rng);
            assert!(pop
                .items()
                .iter()
                .any(|item| item.genes() == picked.genes()));
        }
    }

    #[test]
    fn test_select_prefers_fitter() {
        // 3-4-5 triangle at unit speed: travel times 0->1: 3, 0->2: 4,
        // 1->2: 5.
        let cities = vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 3.0),
            City::new(2, 4.0, 0.0),
        ];
        let dm = DistanceMatrix::from_cities(&cities);
        let travel = TravelTimes::new(&dm, 1.0).expect("positive speed");
        let orders = vec![
            Order::new(0, 1, 0.0, 10.0).expect("valid order"),
            Order::new(1, 2, 0.0, 5.0).expect("valid order"),
        ];
        let eval = DelayEvaluator::new(&orders, &travel);
        // Visiting city 2 first keeps both orders on time (fitness 1);
        // the reverse arrives there at 8, three late (fitness 1/4).
        let fit = Chromosome::new(vec![1, 0], &eval);
        let unfit = Chromosome::new(vec![0, 1], &eval);
        assert_eq!(fit.fitness(), 1.0);
        assert!((unfit.fitness() - 0.25).abs() < 1e-10);
        let pop = Population::from_items(vec![unfit.clone(), fit.clone()]);

        // Roulette weight of the fit chromosome is 0.8.
        let mut rng = StdRng::seed_from_u64(42);
        let fit_picks = (0..100)
            .filter(|_| pop.select(&mut rng).genes() == fit.genes())
            .count();
        assert!(fit_picks > 60);
    }
}
