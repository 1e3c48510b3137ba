//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → replacement → repeat,
//! for a fixed number of generations.

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::operators::Breeder;
use super::population::{Population, PopulationStats};
use super::types::KnapsackProblem;
use crate::catalog::Catalog;
use crate::error::{KnapsackError, Result};
use crate::report::Report;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Result of a GA optimization run.
///
/// Contains the best chromosome found during the run, the final population,
/// and per-generation statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Top-ranked chromosome across the initial population and every
    /// generation. Without elites the final population may have lost it.
    pub best: Chromosome,

    /// Generation in which [`best`](Self::best) first appeared (0 is the
    /// initial population).
    pub best_generation: usize,

    /// The final population, in breeding order.
    pub population: Population,

    /// Total number of generations executed.
    pub generations: usize,

    /// Statistics of the initial population followed by one entry per
    /// generation (`generations + 1` entries).
    pub history: Vec<PopulationStats>,
}

impl RunResult {
    /// Fitness of [`best`](Self::best).
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness()
    }

    /// Best fitness of each recorded population, initial one first.
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.best_fitness).collect()
    }

    /// Human-readable report of the run against its catalog.
    pub fn report<'a>(&'a self, catalog: &'a Catalog) -> Report<'a> {
        Report::new(self, catalog)
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::Catalog;
/// use knapsack_ga::ga::{GaConfig, GaRunner};
///
/// let catalog = Catalog::from_pairs(&[(100.0, 20.0), (150.0, 10.0), (60.0, 5.0)], 35.0)?;
/// let config = GaConfig::default().with_population_size(20).with_seed(42);
/// let result = GaRunner::run(&catalog, &config)?;
/// assert!(result.best.total_weight() <= 35.0);
/// # Ok::<(), knapsack_ga::KnapsackError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed` (or entropy).
    ///
    /// # Errors
    /// [`KnapsackError::InvalidConfiguration`] or
    /// [`KnapsackError::EmptyCatalog`] before any generation runs.
    pub fn run(catalog: &Catalog, config: &GaConfig) -> Result<RunResult> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with_rng(catalog, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    #[instrument(
        skip_all,
        fields(
            items = catalog.len(),
            population_size = config.population_size,
            selection = ?config.selection,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        catalog: &Catalog,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<RunResult> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(KnapsackError::EmptyCatalog);
        }

        let problem = KnapsackProblem::new(catalog, config.feasibility);
        let breeder = Breeder::new(config.crossover, config.crossover_rate, config.mutation_rate);
        let capacity = catalog.capacity();

        // 1. Initialize population (evaluated on construction)
        let mut population = Population::random(&problem, config.population_size, rng);

        let mut best = population
            .best()
            .cloned()
            .ok_or_else(|| KnapsackError::invalid_config("population is empty"))?;
        let mut best_generation = 0;

        let mut history = Vec::with_capacity(config.max_generations.saturating_add(1));
        history.push(population.stats(capacity));
        tracing::info!(
            generations = config.max_generations,
            initial_best = history[0].best_fitness,
            "Starting evolution"
        );

        // 2. Evolutionary loop
        for gen in 1..=config.max_generations {
            population = next_generation(&problem, &breeder, config, &population, rng);

            let stats = population.stats(capacity);
            tracing::debug!(
                generation = gen,
                best = stats.best_fitness,
                mean = stats.mean_fitness,
                feasible = stats.feasible_count,
                "Generation complete"
            );
            history.push(stats);

            if let Some(gen_best) = population.best() {
                if gen_best.cmp_rank(&best).is_lt() {
                    best = gen_best.clone();
                    best_generation = gen;
                }
            }
        }

        tracing::info!(
            best_fitness = best.fitness(),
            best_weight = best.total_weight(),
            best_generation,
            "Evolution finished"
        );

        Ok(RunResult {
            best,
            best_generation,
            population,
            generations: config.max_generations,
            history,
        })
    }
}

/// Builds the replacement population: elite copies first, then offspring,
/// truncated to exactly `population_size`.
fn next_generation<R: Rng>(
    problem: &KnapsackProblem<'_>,
    breeder: &Breeder,
    config: &GaConfig,
    population: &Population,
    rng: &mut R,
) -> Population {
    let size = config.population_size;
    let selected = config.selection.select(
        population,
        config.elite_count,
        config.mating_pool_size,
        rng,
    );

    let mut next: Vec<Chromosome> = Vec::with_capacity(size + 1);
    next.extend(selected.elites.into_iter().cloned());

    let mut pairs = selected.parent_pairs;
    loop {
        for (p1, p2) in pairs {
            let (c1, c2) = breeder.breed(problem, p1, p2, rng);
            next.push(c1);
            next.push(c2);
        }
        if next.len() >= size {
            break;
        }
        pairs = config
            .selection
            .parent_pairs(population, config.mating_pool_size, rng);
    }

    next.truncate(size);
    Population::from_chromosomes(next)
}

// ============================================================================
// Tests
// ============================================================================
