//! Genetic Algorithm for the 0-1 knapsack problem.
//!
//! A binary-encoded GA: each chromosome holds one bit per catalog item.
//! Fitness is the total value of the selected items, scored by a
//! [`FeasibilityPolicy`] when the selection exceeds the capacity.
//!
//! # Key Types
//!
//! - [`KnapsackProblem`]: catalog + policy; creates and evaluates chromosomes
//! - [`Chromosome`]: a candidate selection with its cached evaluation
//! - [`Population`]: one generation, with sorted views and statistics
//! - [`Selection`]: elitism or roulette-wheel parent selection
//! - [`Breeder`]: crossover and mutation
//! - [`GaConfig`]: algorithm parameters
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`RunResult`]: final population, best chromosome, statistics
//!
//! # Randomness
//!
//! All randomness flows through one injected [`rand::Rng`]. Two runs with
//! the same seed and configuration produce identical results.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod chromosome;
mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use chromosome::Chromosome;
pub use config::GaConfig;
pub use operators::{Breeder, Crossover};
pub use population::{Population, PopulationStats};
pub use runner::{GaRunner, RunResult};
pub use selection::{Selection, SelectionResult};
pub use types::{Evaluation, FeasibilityPolicy, KnapsackProblem};
