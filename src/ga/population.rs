//! One generation's chromosomes and their aggregate statistics.

use super::chromosome::Chromosome;
use super::types::KnapsackProblem;
use rand::Rng;

/// Summary of a population's fitness distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationStats {
    /// Highest fitness in the population.
    pub best_fitness: f64,
    /// Lowest fitness in the population.
    pub worst_fitness: f64,
    /// Arithmetic mean fitness.
    pub mean_fitness: f64,
    /// Number of chromosomes within capacity.
    pub feasible_count: usize,
    /// Number of chromosomes.
    pub size: usize,
}

/// An ordered collection of chromosomes for one generation.
///
/// The runner replaces the whole population each generation; selection and
/// breeding only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
}

impl Population {
    /// Creates `size` chromosomes with uniformly random bits.
    pub fn random<R: Rng>(problem: &KnapsackProblem<'_>, size: usize, rng: &mut R) -> Self {
        let chromosomes = (0..size).map(|_| problem.create_chromosome(rng)).collect();
        Self { chromosomes }
    }

    /// Wraps existing chromosomes, preserving their order.
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    /// Chromosomes in population order.
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Iterates in population order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.chromosomes.iter()
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Whether the population has no chromosomes.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Borrowed view sorted by fitness descending, lighter first on ties.
    ///
    /// The sort is stable, so equal-ranked chromosomes keep population order.
    pub fn sorted_by_fitness_descending(&self) -> Vec<&Chromosome> {
        let mut sorted: Vec<&Chromosome> = self.chromosomes.iter().collect();
        sorted.sort_by(|a, b| a.cmp_rank(b));
        sorted
    }

    /// The top-ranked chromosome, or `None` for an empty population.
    pub fn best(&self) -> Option<&Chromosome> {
        // min_by returns the first of equal minima, matching the stable sort.
        self.chromosomes.iter().min_by(|a, b| a.cmp_rank(b))
    }

    /// Sum of all fitness values.
    pub fn total_fitness(&self) -> f64 {
        self.chromosomes.iter().map(Chromosome::fitness).sum()
    }

    /// Aggregate statistics. `capacity` decides feasibility.
    pub fn stats(&self, capacity: f64) -> PopulationStats {
        let size = self.chromosomes.len();
        let (best_fitness, worst_fitness) = self.chromosomes.iter().fold(
            (f64::NEG_INFINITY, f64::INFINITY),
            |(best, worst), c| (best.max(c.fitness()), worst.min(c.fitness())),
        );
        PopulationStats {
            best_fitness: if size == 0 { 0.0 } else { best_fitness },
            worst_fitness: if size == 0 { 0.0 } else { worst_fitness },
            mean_fitness: if size == 0 {
                0.0
            } else {
                self.total_fitness() / size as f64
            },
            feasible_count: self
                .chromosomes
                .iter()
                .filter(|c| c.is_feasible(capacity))
                .count(),
            size,
        }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ga::types::FeasibilityPolicy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Catalog {
        Catalog::from_pairs(&[(100.0, 20.0), (150.0, 10.0), (60.0, 5.0)], 25.0).unwrap()
    }

    fn population_of(problem: &KnapsackProblem<'_>, genes: &[[bool; 3]]) -> Population {
        Population::from_chromosomes(genes.iter().map(|g| problem.chromosome(g.to_vec())).collect())
    }

    #[test]
    fn test_random_size_and_length() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::default());
        let mut rng = StdRng::seed_from_u64(7);
        let pop = Population::random(&problem, 25, &mut rng);
        assert_eq!(pop.len(), 25);
        assert!(pop.iter().all(|c| c.len() == 3));
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::default());
        let a = Population::random(&problem, 10, &mut StdRng::seed_from_u64(3));
        let b = Population::random(&problem, 10, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sorted_and_best() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::PenalizeToZero);
        let pop = population_of(
            &problem,
            &[
                [true, false, false], // 100, w20
                [true, true, true],   // infeasible -> 0, w35
                [false, true, true],  // 210, w15
                [false, false, false], // 0, w0
            ],
        );
        let sorted: Vec<f64> = pop
            .sorted_by_fitness_descending()
            .iter()
            .map(|c| c.fitness())
            .collect();
        assert_eq!(sorted, vec![210.0, 100.0, 0.0, 0.0]);

        let tail = pop.sorted_by_fitness_descending()[2];
        assert_eq!(tail.total_weight(), 0.0, "lighter wins the zero-fitness tie");

        assert_eq!(pop.best().unwrap().fitness(), 210.0);
        assert_eq!(pop.total_fitness(), 310.0);
    }

    #[test]
    fn test_stats() {
        let catalog = catalog();
        let problem = KnapsackProblem::new(&catalog, FeasibilityPolicy::PenalizeToZero);
        let pop = population_of(
            &problem,
            &[[true, false, false], [true, true, true], [false, true, true], [false, false, false]],
        );
        let stats = pop.stats(catalog.capacity());
        assert_eq!(stats.best_fitness, 210.0);
        assert_eq!(stats.worst_fitness, 0.0);
        assert!((stats.mean_fitness - 77.5).abs() < 1e-12);
        assert_eq!(stats.feasible_count, 3);
        assert_eq!(stats.size, 4);
    }

    #[test]
    fn test_empty_population() {
        let pop = Population::from_chromosomes(vec![]);
        assert!(pop.best().is_none());
        assert_eq!(pop.total_fitness(), 0.0);
        assert_eq!(pop.stats(10.0).size, 0);
    }
}
