//! Binary genetic operators and the breeder that applies them.
//!
//! These operate on `&[bool]` gene vectors and always preserve length.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: one cut in `[1, n-1]`, O(n)
//! - [`k_point_crossover`]: `k` distinct cuts, alternating segments, O(n + k log k)
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: flip each bit independently, O(n)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems" (n-point crossover)

use super::chromosome::Chromosome;
use super::types::KnapsackProblem;
use rand::seq::index::sample;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Crossover operator used by the [`Breeder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// One cut point drawn uniformly from `[1, n-1]`.
    #[default]
    SinglePoint,

    /// `k` distinct cut points; segments alternate between parents.
    ///
    /// Clamped to `n - 1` cuts.
    KPoint(usize),
}

impl Crossover {
    /// Applies the operator to two parents.
    pub fn apply<R: Rng>(
        &self,
        parent1: &[bool],
        parent2: &[bool],
        rng: &mut R,
    ) -> (Vec<bool>, Vec<bool>) {
        match *self {
            Crossover::SinglePoint => single_point_crossover(parent1, parent2, rng),
            Crossover::KPoint(k) => k_point_crossover(parent1, parent2, k, rng),
        }
    }
}

/// Single-point crossover.
///
/// Picks `k` uniformly in `[1, n-1]` and returns
/// `(p1[..k] + p2[k..], p2[..k] + p1[k..])`. With `n < 2` there is no
/// interior cut and the children are copies of the parents.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    splice(parent1, parent2, &[cut])
}

/// K-point crossover.
///
/// Draws `min(k, n-1)` distinct cut points from `[1, n-1]` and swaps the
/// source parent at each cut.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn k_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    k: usize,
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 || k == 0 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let k = k.min(n - 1);
    let mut cuts: Vec<usize> = sample(rng, n - 1, k).into_iter().map(|i| i + 1).collect();
    cuts.sort_unstable();
    splice(parent1, parent2, &cuts)
}

/// Builds both children from sorted cut points.
fn splice(parent1: &[bool], parent2: &[bool], cuts: &[usize]) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);

    let mut swapped = false;
    let mut start = 0;
    for &end in cuts.iter().chain(std::iter::once(&n)) {
        let (a, b) = if swapped {
            (parent2, parent1)
        } else {
            (parent1, parent2)
        };
        child1.extend_from_slice(&a[start..end]);
        child2.extend_from_slice(&b[start..end]);
        start = end;
        swapped = !swapped;
    }

    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips each bit independently with probability `rate`.
///
/// Returns the number of flipped bits.
pub fn bit_flip_mutation<R: Rng>(genes: &mut [bool], rate: f64, rng: &mut R) -> usize {
    if rate <= 0.0 {
        return 0;
    }
    let rate = rate.min(1.0);
    let mut flipped = 0;
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = !*gene;
            flipped += 1;
        }
    }
    flipped
}

// ============================================================================
// Breeder
// ============================================================================

/// Applies crossover and mutation to parent pairs.
///
/// Parents are only read. Mutation runs on the fresh child gene vectors, so
/// a parent that also survives as an elite is never altered.
#[derive(Debug, Clone, Copy)]
pub struct Breeder {
    crossover: Crossover,
    crossover_rate: f64,
    mutation_rate: f64,
}

impl Breeder {
    /// Creates a breeder.
    pub fn new(crossover: Crossover, crossover_rate: f64, mutation_rate: f64) -> Self {
        Self {
            crossover,
            crossover_rate: crossover_rate.clamp(0.0, 1.0),
            mutation_rate: mutation_rate.clamp(0.0, 1.0),
        }
    }

    /// Recombines two parents without mutation.
    ///
    /// With probability `1 - crossover_rate` the children are copies of the
    /// parents.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Vec<bool>, Vec<bool>) {
        if rng.random_bool(self.crossover_rate) {
            self.crossover.apply(parent1.genes(), parent2.genes(), rng)
        } else {
            (parent1.genes().to_vec(), parent2.genes().to_vec())
        }
    }

    /// Returns a mutated copy of `chromosome`, re-evaluated.
    pub fn mutate<R: Rng>(
        &self,
        problem: &KnapsackProblem<'_>,
        chromosome: &Chromosome,
        rng: &mut R,
    ) -> Chromosome {
        let mut genes = chromosome.genes().to_vec();
        bit_flip_mutation(&mut genes, self.mutation_rate, rng);
        problem.chromosome(genes)
    }

    /// Crossover followed by mutation of both children.
    pub fn breed<R: Rng>(
        &self,
        problem: &KnapsackProblem<'_>,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let (mut genes1, mut genes2) = self.crossover(parent1, parent2, rng);
        bit_flip_mutation(&mut genes1, self.mutation_rate, rng);
        bit_flip_mutation(&mut genes2, self.mutation_rate, rng);
        (problem.chromosome(genes1), problem.chromosome(genes2))
    }
}

// ============================================================================
// Tests
// ============================================================================
