//! Slot-assignment chromosome for roster scheduling.
//!
//! # Encoding
//!
//! One gene per (shift, day) slot of the planning horizon, carrying the
//! chosen principal and assistant set plus denormalized staffing data
//! for fast scoring. The slot sequence is fixed at problem construction
//! and identical across every chromosome: evolution changes *who* is
//! assigned, never *which* slots exist. Because all chromosomes share
//! the same slot ordering, a single-point tail swap is positionally
//! meaningful and needs no repair step.

use rand::Rng;

use super::{RosterProblem, SlotInfo};

/// The assignment for one (shift, day) slot.
///
/// Invariants: `assistants` has no duplicates and never contains the
/// principal; `assistants.len() <= required_assistants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gene {
    /// Shift identifier.
    pub shift_id: String,
    /// Day code (`1..=7`, 1 = Sunday).
    pub day: u8,
    /// Chosen principal, if the shift requires one and the pool allows.
    pub principal: Option<String>,
    /// Chosen assistants.
    pub assistants: Vec<String>,
    /// Required assistant count (denormalized from the shift).
    pub required_assistants: u32,
    /// Duty duration in minutes (denormalized from the shift).
    pub duty_minutes: i64,
}

impl Gene {
    /// Whether the gene satisfies its structural invariants.
    pub fn is_well_formed(&self) -> bool {
        if self.assistants.len() > self.required_assistants as usize {
            return false;
        }
        if let Some(p) = &self.principal {
            if self.assistants.contains(p) {
                return false;
            }
        }
        for (i, a) in self.assistants.iter().enumerate() {
            if self.assistants[i + 1..].contains(a) {
                return false;
            }
        }
        true
    }
}

/// One complete candidate roster: a gene per slot plus a cached score.
///
/// `fitness` is `f64::NEG_INFINITY` until the evaluator runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterChromosome {
    /// Slot assignments, in the problem's fixed slot order.
    pub genes: Vec<Gene>,
    /// Cached fitness (higher = better).
    pub fitness: f64,
}

impl Default for RosterChromosome {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RosterChromosome {
    /// Creates an unevaluated chromosome.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Drops the cached fitness after a structural change.
    pub fn invalidate(&mut self) {
        self.fitness = f64::NEG_INFINITY;
    }

    /// Whether the cached fitness is current.
    pub fn is_evaluated(&self) -> bool {
        self.fitness > f64::NEG_INFINITY
    }

    /// Validates the chromosome against the problem's slot sequence.
    pub fn is_valid(&self, slots: &[SlotInfo]) -> bool {
        if self.genes.len() != slots.len() {
            return false;
        }
        self.genes.iter().zip(slots).all(|(gene, slot)| {
            gene.shift_id == slot.shift_id
                && gene.day == slot.day
                && gene.required_assistants == slot.required_assistants
                && gene.is_well_formed()
        })
    }
}

// ======================== Crossover ========================

/// Single-point crossover: swaps the gene tails of two chromosomes.
///
/// The cut index is drawn uniformly from `1..len`, so each child keeps
/// at least one gene from each parent. Both chromosomes keep the shared
/// slot ordering, so the swap preserves the slot-set invariant by
/// construction. Chromosomes with fewer than two genes are left
/// untouched. Both fitness caches are invalidated.
pub fn single_point_crossover<R: Rng>(
    a: &mut RosterChromosome,
    b: &mut RosterChromosome,
    rng: &mut R,
) {
    let len = a.genes.len().min(b.genes.len());
    if len < 2 {
        return;
    }
    let cut = rng.random_range(1..len);
    for i in cut..len {
        std::mem::swap(&mut a.genes[i], &mut b.genes[i]);
    }
    a.invalidate();
    b.invalidate();
}

// ======================== Mutation ========================

/// Slot mutation: redraws one uniformly chosen gene from its slot's
/// availability pools, exactly as during initialization.
///
/// Reintroduces diversity and can restaff a slot that crossover left in
/// a poor combination. The fitness cache is invalidated.
pub fn slot_mutation<R: Rng>(
    chromosome: &mut RosterChromosome,
    problem: &RosterProblem,
    rng: &mut R,
) {
    if chromosome.genes.is_empty() {
        return;
    }
    let idx = rng.random_range(0..chromosome.genes.len());
    if let Some(slot) = problem.slots().get(idx) {
        chromosome.genes[idx] = problem.random_gene(slot, rng);
        chromosome.invalidate();
    }
}
