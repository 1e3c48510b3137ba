//! Genetic algorithm solver for the 0-1 knapsack problem.
//!
//! Evolves a population of item selections toward high-value solutions
//! that respect a capacity limit:
//!
//! - **Catalog**: the immutable problem instance, built in memory or parsed
//!   from the `count capacity` / `value weight` text format.
//! - **GA**: binary chromosomes, elitism and roulette-wheel selection,
//!   single- and k-point crossover, bit-flip mutation, and a fixed-length
//!   generational loop driven by a seedable RNG.
//! - **Report**: plain-text rendering of the final population and the best
//!   selection.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::Catalog;
//! use knapsack_ga::ga::{GaConfig, GaRunner, Selection};
//!
//! let catalog: Catalog = "3 35\n100 20\n150 10\n60 5\n".parse()?;
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_max_generations(50)
//!     .with_selection(Selection::Elitism)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&catalog, &config)?;
//! assert!(result.best.total_weight() <= catalog.capacity());
//! println!("{}", result.report(&catalog));
//! # Ok::<(), knapsack_ga::KnapsackError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod ga;
pub mod report;

pub use catalog::{Catalog, Item};
pub use error::{KnapsackError, Result};
