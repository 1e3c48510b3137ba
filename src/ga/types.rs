//! Core problem definitions for the knapsack GA.
//!
//! [`KnapsackProblem`] binds a [`Catalog`] to a [`FeasibilityPolicy`] and is
//! the contract between the evolutionary engine and the problem instance:
//! it creates random chromosomes and scores gene vectors.

use super::chromosome::Chromosome;
use crate::catalog::Catalog;
use rand::Rng;

/// How a solution that exceeds the capacity is scored.
///
/// Fitness is always maximized and never negative, so every policy keeps
/// roulette-wheel weights valid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeasibilityPolicy {
    /// Infeasible solutions score 0; feasible ones score their total value.
    #[default]
    PenalizeToZero,

    /// Infeasible solutions score `value - penalty_per_unit * overweight`,
    /// floored at 0.
    ///
    /// Gives partial credit to near-feasible solutions, which can help on
    /// instances where almost every random selection is overweight.
    Proportional {
        /// Fitness lost per unit of weight above the capacity.
        penalty_per_unit: f64,
    },
}

impl FeasibilityPolicy {
    /// Computes fitness from the summed value and weight of a selection.
    pub fn fitness(&self, total_value: f64, total_weight: f64, capacity: f64) -> f64 {
        if total_weight <= capacity {
            return total_value;
        }
        match *self {
            FeasibilityPolicy::PenalizeToZero => 0.0,
            FeasibilityPolicy::Proportional { penalty_per_unit } => {
                (total_value - penalty_per_unit * (total_weight - capacity)).max(0.0)
            }
        }
    }
}

/// Derived attributes of a chromosome, computed once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Sum of weights of the selected items.
    pub total_weight: f64,
    /// Sum of values of the selected items.
    pub total_value: f64,
    /// Score under the active [`FeasibilityPolicy`].
    pub fitness: f64,
}

/// A knapsack instance together with its scoring policy.
#[derive(Debug, Clone, Copy)]
pub struct KnapsackProblem<'a> {
    catalog: &'a Catalog,
    policy: FeasibilityPolicy,
}

impl<'a> KnapsackProblem<'a> {
    /// Creates a problem over `catalog` scored with `policy`.
    pub fn new(catalog: &'a Catalog, policy: FeasibilityPolicy) -> Self {
        Self { catalog, policy }
    }

    /// The item catalog.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The active scoring policy.
    pub fn policy(&self) -> FeasibilityPolicy {
        self.policy
    }

    /// Number of genes per chromosome.
    pub fn chromosome_length(&self) -> usize {
        self.catalog.len()
    }

    /// Sums weight and value over the set bits and applies the policy.
    ///
    /// # Panics
    /// Panics if `genes.len()` differs from the catalog length.
    pub fn evaluate(&self, genes: &[bool]) -> Evaluation {
        assert_eq!(
            genes.len(),
            self.catalog.len(),
            "chromosome length must equal item count"
        );

        let (total_weight, total_value) = genes
            .iter()
            .zip(self.catalog.items())
            .filter(|(&selected, _)| selected)
            .fold((0.0, 0.0), |(w, v), (_, item)| (w + item.weight, v + item.value));

        Evaluation {
            total_weight,
            total_value,
            fitness: self
                .policy
                .fitness(total_value, total_weight, self.catalog.capacity()),
        }
    }

    /// Wraps a gene vector into an evaluated chromosome.
    pub fn chromosome(&self, genes: Vec<bool>) -> Chromosome {
        let evaluation = self.evaluate(&genes);
        Chromosome::from_parts(genes, evaluation)
    }

    /// Creates a chromosome with every bit drawn uniformly at random.
    ///
    /// No feasibility filtering: overweight chromosomes are allowed and
    /// simply score low.
    pub fn create_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome {
        let genes = (0..self.chromosome_length())
            .map(|_| rng.random_bool(0.5))
            .collect();
        self.chromosome(genes)
    }
}
