//! Chromosome fitness evaluation.
//!
//! Scores a candidate roster by summing, over every slot, a reward for
//! each filled position whose occupant actually declared availability,
//! a penalty for occupants missing from the availability index, a
//! penalty proportional to assistant shortfall, and a fairness term
//! that discourages concentrating duty time on few people. Higher is
//! better. Evaluation is deterministic: no randomness, and all
//! accumulation runs in fixed roster order.
//!
//! The weighting between coverage, correctness, and fairness is policy,
//! not structure; [`FitnessWeights`] exposes it as configuration.

use serde::{Deserialize, Serialize};

use super::{RosterChromosome, RosterProblem};

/// Weighting policy for fitness evaluation.
///
/// Defaults are tuned so that fully staffing a slot always outscores
/// leaving it short: one filled position earns `staffed_reward`, while
/// an empty assistant seat costs `shortfall_penalty`, and an occupant
/// who never declared availability costs `availability_penalty`.
/// The fairness term subtracts `fairness_weight` times the population
/// variance of per-person duty minutes, so it stays a gentle tiebreaker
/// rather than a coverage competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessWeights {
    /// Reward per filled position backed by a matching availability entry.
    pub staffed_reward: f64,
    /// Penalty per occupant absent from the availability index.
    pub availability_penalty: f64,
    /// Penalty per unfilled assistant seat.
    pub shortfall_penalty: f64,
    /// Coefficient on the variance of per-person duty minutes.
    pub fairness_weight: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            staffed_reward: 10.0,
            availability_penalty: 20.0,
            shortfall_penalty: 8.0,
            fairness_weight: 0.01,
        }
    }
}

impl FitnessWeights {
    /// Sets the per-position staffing reward.
    pub fn with_staffed_reward(mut self, reward: f64) -> Self {
        self.staffed_reward = reward;
        self
    }

    /// Sets the availability-violation penalty.
    pub fn with_availability_penalty(mut self, penalty: f64) -> Self {
        self.availability_penalty = penalty;
        self
    }

    /// Sets the assistant-shortfall penalty.
    pub fn with_shortfall_penalty(mut self, penalty: f64) -> Self {
        self.shortfall_penalty = penalty;
        self
    }

    /// Sets the fairness-variance coefficient.
    pub fn with_fairness_weight(mut self, weight: f64) -> Self {
        self.fairness_weight = weight;
        self
    }

    /// Scores a chromosome against the problem's availability index.
    ///
    /// Deterministic given the chromosome and the problem: duty minutes
    /// accumulate into a vector indexed by roster position, never into
    /// a hash map, so float summation order is fixed.
    pub fn score(&self, problem: &RosterProblem, chromosome: &RosterChromosome) -> f64 {
        let mut total = 0.0;
        let mut duty_minutes = vec![0i64; problem.people_count()];

        for gene in &chromosome.genes {
            if let Some(principal) = &gene.principal {
                if problem.is_available(&gene.shift_id, gene.day, principal) {
                    total += self.staffed_reward;
                } else {
                    total -= self.availability_penalty;
                }
                if let Some(i) = problem.person_index(principal) {
                    duty_minutes[i] += gene.duty_minutes;
                }
            }

            for assistant in &gene.assistants {
                if problem.is_available(&gene.shift_id, gene.day, assistant) {
                    total += self.staffed_reward;
                } else {
                    total -= self.availability_penalty;
                }
                if let Some(i) = problem.person_index(assistant) {
                    duty_minutes[i] += gene.duty_minutes;
                }
            }

            let shortfall = gene.required_assistants as i64 - gene.assistants.len() as i64;
            if shortfall > 0 {
                total -= self.shortfall_penalty * shortfall as f64;
            }
        }

        if self.fairness_weight > 0.0 && !duty_minutes.is_empty() {
            total -= self.fairness_weight * variance(&duty_minutes);
        }

        total
    }
}

/// Population variance of per-person duty minutes.
fn variance(minutes: &[i64]) -> f64 {
    let n = minutes.len() as f64;
    let mean = minutes.iter().sum::<i64>() as f64 / n;
    minutes
        .iter()
        .map(|&m| {
            let d = m as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}
