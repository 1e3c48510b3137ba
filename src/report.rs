//! Plain-text rendering of a finished run.

use crate::catalog::Catalog;
use crate::ga::RunResult;
use std::fmt;

/// Displays the final population (one `fitness weight` line per
/// chromosome), then the items, fitness and weight of the best chromosome
/// found during the run.
///
/// ```
/// use knapsack_ga::Catalog;
/// use knapsack_ga::ga::{GaConfig, GaRunner};
///
/// let catalog = Catalog::from_pairs(&[(100.0, 20.0), (150.0, 10.0)], 30.0)?;
/// let result = GaRunner::run(&catalog, &GaConfig::default().with_seed(1))?;
/// let text = result.report(&catalog).to_string();
/// assert!(text.contains("Best solution found:"));
/// # Ok::<(), knapsack_ga::KnapsackError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    result: &'a RunResult,
    catalog: &'a Catalog,
}

impl<'a> Report<'a> {
    /// Creates a report over `result`, resolving items through `catalog`.
    pub fn new(result: &'a RunResult, catalog: &'a Catalog) -> Self {
        Self { result, catalog }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chromosome in &self.result.population {
            writeln!(f, "{} {}", chromosome.fitness(), chromosome.total_weight())?;
        }
        writeln!(f)?;

        let best = &self.result.best;
        writeln!(f, "Best solution found:")?;
        for (_, item) in best.selected_items(self.catalog) {
            writeln!(f, "Item worth {} and weight {}", item.value, item.weight)?;
        }
        writeln!(f, "Fitness of best solution: {}", best.fitness())?;
        write!(f, "Weight of best solution: {}", best.total_weight())
    }
}
