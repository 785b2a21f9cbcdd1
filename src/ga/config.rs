//! GA run parameters.
//!
//! Immutable configuration for one scheduling run. All parameters are
//! validated before the first generation executes; an invalid
//! configuration fails the run synchronously and nothing else happens.

use serde::{Deserialize, Serialize};

use super::FitnessWeights;

/// Configuration for one genetic-algorithm run.
///
/// # Example
/// ```
/// use u_roster::ga::GaParameters;
///
/// let params = GaParameters::default()
///     .with_population_size(20)
///     .with_max_generations(10)
///     .with_seed(42)
///     .with_parallel(false);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaParameters {
    /// Number of chromosomes evolved together. Constant for the run.
    pub population_size: usize,
    /// Number of generations to execute. The only termination condition.
    pub max_generations: u32,
    /// Number of top chromosomes copied unchanged into each next generation.
    pub elite_count: usize,
    /// Probability of recombining a selected parent pair.
    pub crossover_rate: f64,
    /// Probability of mutating a chromosome (one slot redrawn).
    pub mutation_rate: f64,
    /// Random seed. `None` seeds from the OS; fixing it makes runs reproducible.
    pub seed: Option<u64>,
    /// Evaluate fitness across worker threads. Never changes results.
    pub parallel: bool,
    /// Fitness weighting policy.
    pub weights: FitnessWeights,
}

/// Invalid run parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `population_size` is zero.
    #[error("population_size must be positive")]
    EmptyPopulation,

    /// `max_generations` is zero.
    #[error("max_generations must be positive")]
    NoGenerations,

    /// `elite_count` exceeds `population_size`.
    #[error("elite_count ({elite_count}) must not exceed population_size ({population_size})")]
    EliteCountTooLarge {
        elite_count: usize,
        population_size: usize,
    },

    /// A probability parameter is outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
}

impl Default for GaParameters {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 300,
            elite_count: 2,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            seed: None,
            parallel: false,
            weights: FitnessWeights::default(),
        }
    }
}

impl GaParameters {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, generations: u32) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the elite carry-over count.
    pub fn with_elite_count(mut self, count: usize) -> Self {
        self.elite_count = count;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Fixes the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the fitness weighting policy.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Checks that the parameters describe a runnable configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if self.elite_count > self.population_size {
            return Err(ConfigError::EliteCountTooLarge {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }
}
