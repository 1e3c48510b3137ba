//! Binary chromosome: one bit per catalog item.

use super::types::{Evaluation, FeasibilityPolicy, KnapsackProblem};
use crate::catalog::{Catalog, Item};
use std::cmp::Ordering;

/// A candidate item selection with its cached evaluation.
///
/// Built only through [`KnapsackProblem::chromosome`] (or the operators that
/// call it), so the cached evaluation always matches the genes. There are no
/// mutators: offspring are new chromosomes.
///
/// Serializable for reporting only. There is no `Deserialize`: a cached
/// evaluation read back from outside could disagree with the genes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chromosome {
    genes: Vec<bool>,
    evaluation: Evaluation,
}

impl Chromosome {
    pub(crate) fn from_parts(genes: Vec<bool>, evaluation: Evaluation) -> Self {
        Self { genes, evaluation }
    }

    /// Re-evaluates the genes against `catalog` under `policy`.
    ///
    /// Returns the same value as the cached [`evaluation`](Self::evaluation)
    /// when called with the catalog and policy that built this chromosome.
    pub fn evaluate(&self, catalog: &Catalog, policy: FeasibilityPolicy) -> Evaluation {
        KnapsackProblem::new(catalog, policy).evaluate(&self.genes)
    }

    /// The selection bits, positionally matched to catalog items.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// `true` only for a zero-length chromosome.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Cached evaluation.
    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Cached fitness.
    pub fn fitness(&self) -> f64 {
        self.evaluation.fitness
    }

    /// Cached total weight of the selected items.
    pub fn total_weight(&self) -> f64 {
        self.evaluation.total_weight
    }

    /// Cached total value of the selected items.
    pub fn total_value(&self) -> f64 {
        self.evaluation.total_value
    }

    /// Whether the selection fits within `capacity`.
    pub fn is_feasible(&self, capacity: f64) -> bool {
        self.evaluation.total_weight <= capacity
    }

    /// Number of selected items.
    pub fn selected_count(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Selected items with their catalog indices.
    pub fn selected_items<'c>(
        &'c self,
        catalog: &'c Catalog,
    ) -> impl Iterator<Item = (usize, &'c Item)> + 'c {
        self.genes
            .iter()
            .zip(catalog.items())
            .enumerate()
            .filter(|(_, (&selected, _))| selected)
            .map(|(i, (_, item))| (i, item))
    }

    /// Ranking order: higher fitness first, then lower weight.
    ///
    /// Returns [`Ordering::Less`] when `self` ranks ahead of `other`.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        other
            .fitness()
            .total_cmp(&self.fitness())
            .then_with(|| self.total_weight().total_cmp(&other.total_weight()))
    }
}
