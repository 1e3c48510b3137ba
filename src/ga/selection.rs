//! Parent selection strategies.
//!
//! A [`Selection`] turns the current population into elite survivors and a
//! list of parent pairs for the breeder. Both variants share the same
//! runner, chromosome and breeder.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - De Jong (1975), elitist strategy

use super::chromosome::Chromosome;
use super::population::Population;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// Fitness is maximized.
///
/// # Examples
///
/// ```
/// use knapsack_ga::ga::Selection;
///
/// // Keep the best chromosomes unchanged, breed from the top half
/// let sel = Selection::Elitism;
///
/// // Fitness-proportionate parent draws, no survivors
/// let sel = Selection::RouletteWheel;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// The top `elite_count` chromosomes survive unchanged; parents are drawn
    /// uniformly from the better half of the population.
    ///
    /// Best fitness never decreases between generations.
    #[default]
    Elitism,

    /// Fitness-proportionate (roulette wheel) parent selection.
    ///
    /// No survivors, so best fitness may regress between generations.
    /// When every fitness is zero, parents are drawn uniformly.
    ///
    /// # Complexity
    /// O(n) per generation to build the wheel, O(log n) per draw.
    RouletteWheel,
}

/// Output of one selection round, borrowed from the population.
#[derive(Debug, Clone)]
pub struct SelectionResult<'a> {
    /// Chromosomes to copy unchanged into the next generation.
    pub elites: Vec<&'a Chromosome>,
    /// Parent pairs to breed. A chromosome may be paired with itself.
    pub parent_pairs: Vec<(&'a Chromosome, &'a Chromosome)>,
}

impl Selection {
    /// Runs a full selection round.
    ///
    /// `elite_count` is ignored by [`Selection::RouletteWheel`].
    /// `mating_pool_size` is the number of parent slots; an odd pool is
    /// rounded up so every parent has a partner.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<'a, R: Rng>(
        &self,
        population: &'a Population,
        elite_count: usize,
        mating_pool_size: usize,
        rng: &mut R,
    ) -> SelectionResult<'a> {
        SelectionResult {
            elites: self.elites(population, elite_count),
            parent_pairs: self.parent_pairs(population, mating_pool_size, rng),
        }
    }

    /// Survivors copied unchanged into the next generation.
    pub fn elites<'a>(
        &self,
        population: &'a Population,
        elite_count: usize,
    ) -> Vec<&'a Chromosome> {
        match self {
            Selection::Elitism => {
                let mut sorted = population.sorted_by_fitness_descending();
                sorted.truncate(elite_count);
                sorted
            }
            Selection::RouletteWheel => Vec::new(),
        }
    }

    /// Draws `ceil(mating_pool_size / 2)` parent pairs.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn parent_pairs<'a, R: Rng>(
        &self,
        population: &'a Population,
        mating_pool_size: usize,
        rng: &mut R,
    ) -> Vec<(&'a Chromosome, &'a Chromosome)> {
        assert!(!population.is_empty(), "cannot select from empty population");

        let pair_count = mating_pool_size.div_ceil(2);
        match self {
            Selection::Elitism => {
                let sorted = population.sorted_by_fitness_descending();
                let pool = &sorted[..sorted.len().div_ceil(2)];
                (0..pair_count)
                    .map(|_| {
                        let a = pool[rng.random_range(0..pool.len())];
                        let b = pool[rng.random_range(0..pool.len())];
                        (a, b)
                    })
                    .collect()
            }
            Selection::RouletteWheel => {
                let wheel = RouletteWheel::new(population);
                let chromosomes = population.chromosomes();
                (0..pair_count)
                    .map(|_| {
                        let a = &chromosomes[wheel.spin(rng.random::<f64>())];
                        let b = &chromosomes[wheel.spin(rng.random::<f64>())];
                        (a, b)
                    })
                    .collect()
            }
        }
    }
}

/// Cumulative selection probabilities in population order.
#[derive(Debug, Clone)]
pub(crate) struct RouletteWheel {
    cumulative: Vec<f64>,
}

impl RouletteWheel {
    /// Builds the wheel. A population whose total fitness is not positive
    /// gets uniform slots.
    pub(crate) fn new(population: &Population) -> Self {
        let total = population.total_fitness();
        let uniform = total <= 0.0;
        if uniform {
            tracing::warn!(
                size = population.len(),
                "all fitness values are zero, roulette falls back to uniform selection"
            );
        }

        let n = population.len() as f64;
        let mut running = 0.0;
        let cumulative = population
            .iter()
            .map(|c| {
                running += if uniform { 1.0 / n } else { c.fitness() / total };
                running
            })
            .collect();
        Self { cumulative }
    }

    /// Index of the first slot whose cumulative probability is `>= r`.
    ///
    /// `r` is expected in `[0, 1)`; rounding that leaves the last cumulative
    /// value below `r` selects the last slot.
    pub(crate) fn spin(&self, r: f64) -> usize {
        let idx = self.cumulative.partition_point(|&p| p < r);
        idx.min(self.cumulative.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ga::types::{FeasibilityPolicy, KnapsackProblem};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Unit weights with capacity 1: a one-hot chromosome scores its item's value.
    fn catalog() -> Catalog {
        Catalog::from_pairs(&[(10.0, 1.0), (30.0, 1.0), (60.0, 1.0), (0.0, 1.0)], 1.0).unwrap()
    }

    fn one_hot(problem: &KnapsackProblem<'_>, idx: usize) -> Chromosome {
        let mut genes = vec![false; problem.chromosome_length()];
        genes[idx] = true;
        problem.chromosome(genes)
    }

    fn singles(problem: &KnapsackProblem<'_>) -> Population {
        // fitness: 10, 30, 60, 0
        Population::from_chromosomes((0..4).map(|i| one_hot(problem, i)).collect())
    }

    #[test]
    fn test_wheel_cumulative_and_spin() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::default());
        let pop = singles(&problem);
        let wheel = RouletteWheel::new(&pop);

        // cumulative: 0.1, 0.4, 1.0, 1.0
        assert_eq!(wheel.spin(0.0), 0);
        assert_eq!(wheel.spin(0.1), 0);
        assert_eq!(wheel.spin(0.1000001), 1);
        assert_eq!(wheel.spin(0.35), 1);
        assert_eq!(wheel.spin(0.75), 2);
        assert_eq!(wheel.spin(0.999999), 2);
        // rounding fallback
        assert_eq!(wheel.spin(1.5), 3);
    }

    #[test]
    fn test_wheel_uniform_fallback() {
        let catalog = Catalog::from_pairs(&[(10.0, 5.0)], 1.0).unwrap();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::PenalizeToZero);
        let chr = problem.chromosome(vec![true]);
        assert_eq!(chr.fitness(), 0.0);
        let pop = Population::from_chromosomes(vec![chr; 4]);
        let wheel = RouletteWheel::new(&pop);
        assert_eq!(wheel.spin(0.1), 0);
        assert_eq!(wheel.spin(0.3), 1);
        assert_eq!(wheel.spin(0.6), 2);
        assert_eq!(wheel.spin(0.9), 3);
    }

    #[test]
    fn test_roulette_all_zero_returns_pairs() {
        let catalog = Catalog::from_pairs(&[(10.0, 5.0), (20.0, 5.0)], 1.0).unwrap();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::PenalizeToZero);
        let pop = Population::from_chromosomes(vec![
            problem.chromosome(vec![true, false]),
            problem.chromosome(vec![false, true]),
            problem.chromosome(vec![true, true]),
        ]);
        assert_eq!(pop.total_fitness(), 0.0);

        let mut rng = StdRng::seed_from_u64(42);
        let result = Selection::RouletteWheel.select(&pop, 2, 6, &mut rng);
        assert!(result.elites.is_empty());
        assert_eq!(result.parent_pairs.len(), 3);
    }

    #[test]
    fn test_roulette_favors_fitter() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::default());
        let pop = singles(&problem);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for (a, b) in Selection::RouletteWheel.parent_pairs(&pop, 10_000, &mut rng) {
            for p in [a, b] {
                let idx = p.genes().iter().position(|&g| g).unwrap();
                counts[idx] += 1;
            }
        }
        // Expected shares 10%, 30%, 60%, 0%.
        assert_eq!(counts[3], 0, "zero-fitness chromosome drawn: {counts:?}");
        assert!(counts[2] > counts[1] && counts[1] > counts[0], "{counts:?}");
        assert!((5_500..6_500).contains(&counts[2]), "{counts:?}");
    }

    #[test]
    fn test_roulette_is_deterministic_per_seed() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::default());
        let pop = singles(&problem);
        let a = Selection::RouletteWheel.parent_pairs(&pop, 20, &mut StdRng::seed_from_u64(9));
        let b = Selection::RouletteWheel.parent_pairs(&pop, 20, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_elitism_survivors_are_top_ranked() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::default());
        let pop = singles(&problem);
        let mut rng = StdRng::seed_from_u64(1);

        let result = Selection::Elitism.select(&pop, 2, 4, &mut rng);
        let elite_fitness: Vec<f64> = result.elites.iter().map(|c| c.fitness()).collect();
        assert_eq!(elite_fitness, vec![60.0, 30.0]);
        assert_eq!(result.parent_pairs.len(), 2);
    }

    #[test]
    fn test_elitism_parents_from_top_half() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::default());
        let pop = singles(&problem);
        let mut rng = StdRng::seed_from_u64(5);

        for (a, b) in Selection::Elitism.parent_pairs(&pop, 200, &mut rng) {
            assert!(a.fitness() >= 30.0 && b.fitness() >= 30.0);
        }
    }

    #[test]
    fn test_elite_count_larger_than_population() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::default());
        let pop = singles(&problem);
        assert_eq!(Selection::Elitism.elites(&pop, 10).len(), 4);
        assert!(Selection::RouletteWheel.elites(&pop, 10).is_empty());
    }

    #[test]
    fn test_odd_pool_rounds_up() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::default());
        let pop = singles(&problem);
        let mut rng = StdRng::seed_from_u64(0);
        for sel in [Selection::Elitism, Selection::RouletteWheel] {
            assert_eq!(sel.parent_pairs(&pop, 5, &mut rng).len(), 3);
        }
    }

    #[test]
    fn test_single_chromosome_self_pairs() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::default());
        let pop = Population::from_chromosomes(vec![one_hot(&problem, 2)]);
        let mut rng = StdRng::seed_from_u64(0);
        for sel in [Selection::Elitism, Selection::RouletteWheel] {
            let pairs = sel.parent_pairs(&pop, 2, &mut rng);
            assert_eq!(pairs.len(), 1);
            assert!(std::ptr::eq(pairs[0].0, pairs[0].1));
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop = Population::from_chromosomes(vec![]);
        let mut rng = StdRng::seed_from_u64(42);
        Selection::RouletteWheel.parent_pairs(&pop, 2, &mut rng);
    }
}
