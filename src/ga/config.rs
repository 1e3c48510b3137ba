//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::operators::Crossover;
use super::selection::Selection;
use super::types::FeasibilityPolicy;
use crate::error::{KnapsackError, Result};

/// Configuration for the knapsack Genetic Algorithm.
///
/// Controls population size, selection strategy, operator rates and the
/// fixed generation count.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::RouletteWheel)
///     .with_mutation_rate(0.02)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in every generation.
    ///
    /// Typical range: 20–500.
    pub population_size: usize,

    /// Number of generations to run. There is no early stopping.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Number of top chromosomes copied unchanged into the next generation.
    ///
    /// Only used by [`Selection::Elitism`]. May equal `population_size`, in
    /// which case the population never changes.
    pub elite_count: usize,

    /// Parent slots drawn per selection round.
    ///
    /// An odd value is rounded up. When one round does not produce enough
    /// offspring to refill the population, further rounds are drawn.
    pub mating_pool_size: usize,

    /// Crossover operator.
    pub crossover: Crossover,

    /// Probability of applying crossover to a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, the children are copies of the parents.
    pub crossover_rate: f64,

    /// Per-bit flip probability for offspring (0.0–1.0).
    ///
    /// Typical range: 0.01–0.05.
    pub mutation_rate: f64,

    /// Scoring of overweight selections.
    pub feasibility: FeasibilityPolicy,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            selection: Selection::default(),
            elite_count: 2,
            mating_pool_size: 100,
            crossover: Crossover::default(),
            crossover_rate: 1.0,
            mutation_rate: 0.02,
            feasibility: FeasibilityPolicy::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the mating pool size.
    pub fn with_mating_pool_size(mut self, n: usize) -> Self {
        self.mating_pool_size = n;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the crossover rate. Out-of-range values fail [`validate`](Self::validate).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate. Out-of-range values fail [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the feasibility policy.
    pub fn with_feasibility(mut self, policy: FeasibilityPolicy) -> Self {
        self.feasibility = policy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`KnapsackError::InvalidConfiguration`] describing the first
    /// invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(KnapsackError::invalid_config(
                "population_size must be at least 1",
            ));
        }
        if self.max_generations == 0 {
            return Err(KnapsackError::invalid_config(
                "max_generations must be at least 1",
            ));
        }
        if self.mating_pool_size == 0 {
            return Err(KnapsackError::invalid_config(
                "mating_pool_size must be at least 1",
            ));
        }
        if self.elite_count > self.population_size {
            return Err(KnapsackError::invalid_config(format!(
                "elite_count ({}) exceeds population_size ({})",
                self.elite_count, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(KnapsackError::invalid_config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(KnapsackError::invalid_config(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if self.crossover == Crossover::KPoint(0) {
            return Err(KnapsackError::invalid_config(
                "k-point crossover needs at least one cut",
            ));
        }
        if let FeasibilityPolicy::Proportional { penalty_per_unit } = self.feasibility {
            if !(penalty_per_unit.is_finite() && penalty_per_unit >= 0.0) {
                return Err(KnapsackError::invalid_config(format!(
                    "penalty_per_unit must be a non-negative number, got {penalty_per_unit}"
                )));
            }
        }
        Ok(())
    }
}
