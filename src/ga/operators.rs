//! Permutation-preserving variation operators.
//!
//! Both operators keep the exactly-once invariant: given permutations, they
//! produce permutations. Violations are programming errors and are caught by
//! the chromosome constructor's contract check.

use rand::Rng;

/// Ordered crossover (OX) producing one child from two parents.
///
/// Picks two cut indices `a <= b`, copies `parent1[a..=b]` into the child at
/// the same positions, then fills the remaining positions left to right
/// starting after `b` and wrapping, taking genes in `parent2` order starting
/// after `b` and skipping genes already placed.
///
/// Both parents must be permutations of the same length.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    debug_assert_eq!(parent1.len(), parent2.len());
    let n = parent1.len();
    if n < 2 {
        return parent1.to_vec();
    }
    let first = rng.random_range(0..n as u64) as usize;
    let second = rng.random_range(0..n as u64) as usize;
    let (a, b) = if first <= second {
        (first, second)
    } else {
        (second, first)
    };
    segment_crossover(parent1, parent2, a, b)
}

/// OX with fixed cut indices `a <= b`, both inclusive.
fn segment_crossover(parent1: &[usize], parent2: &[usize], a: usize, b: usize) -> Vec<usize> {
    let n = parent1.len();
    let mut child = vec![0; n];
    let mut used = vec![false; n];

    for i in a..=b {
        child[i] = parent1[i];
        used[parent1[i]] = true;
    }

    let remaining = n - (b - a + 1);
    let mut put = (b + 1) % n;
    let mut take = (b + 1) % n;
    for _ in 0..remaining {
        while used[parent2[take]] {
            take = (take + 1) % n;
        }
        child[put] = parent2[take];
        used[parent2[take]] = true;
        put = (put + 1) % n;
    }
    child
}

/// Swaps the genes at two distinct random positions.
///
/// No-op for sequences shorter than two genes.
pub fn swap_mutation<R: Rng>(genes: &mut [usize], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n as u64) as usize;
    // Draw from the n-1 positions other than i.
    let mut j = rng.random_range(0..(n - 1) as u64) as usize;
    if j >= i {
        j += 1;
    }
    genes.swap(i, j);
}
