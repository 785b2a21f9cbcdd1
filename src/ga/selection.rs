//! Fitness-proportionate ("roulette") parent selection.
//!
//! Draws one chromosome with probability proportional to its fitness
//! after shifting scores into a non-negative range. Fitness values are
//! real-valued and often negative (penalty-dominated rosters), so the
//! population minimum is subtracted before the cumulative walk. When
//! every shifted weight is zero (all fitness equal), the draw falls
//! back to a uniform pick: selection must always produce parents, so
//! a degenerate population is never an error.

use rand::Rng;

use super::RosterChromosome;

/// Selects one chromosome with probability proportional to its shifted
/// fitness. Two independent draws form a parent pair; the same
/// chromosome may be drawn twice.
///
/// # Panics
/// Panics if `population` is empty. The runner guarantees a positive
/// population size before any selection happens.
pub fn roulette_select<'a, R: Rng>(
    population: &'a [RosterChromosome],
    rng: &mut R,
) -> &'a RosterChromosome {
    assert!(!population.is_empty(), "population must not be empty");

    let min_fitness = population
        .iter()
        .map(|c| c.fitness)
        .fold(f64::INFINITY, f64::min);
    let total: f64 = population.iter().map(|c| c.fitness - min_fitness).sum();

    if total > 0.0 {
        let spin = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        for chromosome in population {
            cumulative += chromosome.fitness - min_fitness;
            if cumulative > spin {
                return chromosome;
            }
        }
        // Float rounding can leave the spin past the last bucket
        &population[population.len() - 1]
    } else {
        &population[rng.random_range(0..population.len())]
    }
}
