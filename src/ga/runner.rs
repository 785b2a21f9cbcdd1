//! The evolutionary loop.
//!
//! Orchestrates one scheduling run: initialize a random population,
//! then for a fixed generation budget select parents by roulette,
//! recombine, mutate, carry elites forward, and track the best
//! chromosome ever seen. Termination is generation-count exhaustion
//! only — no fitness threshold, no stagnation detection. The caller
//! can bound wall-clock time with a cancellation flag checked at the
//! top of each generation.
//!
//! # Ownership
//!
//! Each generation step consumes the previous population by value and
//! produces a new owned one; selected parents are cloned before the
//! operators touch them, and the best-ever holder is a deep copy taken
//! at capture time. Nothing aliases across generations.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use super::{
    roulette_select, single_point_crossover, slot_mutation, ConfigError, FitnessWeights,
    GaParameters, RosterChromosome, RosterProblem,
};
use crate::models::RosterSchedule;

/// Result of one scheduling run.
#[derive(Debug, Clone)]
pub struct GaOutcome {
    /// The best-ever chromosome projected into the output contract.
    pub schedule: RosterSchedule,
    /// Fitness of the best-ever chromosome.
    pub best_fitness: f64,
    /// Generations actually executed (less than the budget if cancelled).
    pub generations: u32,
    /// Best-ever fitness recorded at the top of each generation.
    /// Non-decreasing by construction.
    pub history: Vec<f64>,
}

/// Runs the genetic engine over a [`RosterProblem`].
pub struct GaRunner;

impl GaRunner {
    /// Runs a full scheduling run.
    ///
    /// Fails fast with [`ConfigError`] before any generation executes
    /// if the parameters are invalid. Data-level gaps (slots nobody is
    /// available for) are not errors: they surface as unstaffed entries
    /// in the output, penalized by fitness.
    pub fn run(problem: &RosterProblem, params: &GaParameters) -> Result<GaOutcome, ConfigError> {
        Self::run_with_cancel(problem, params, &AtomicBool::new(false))
    }

    /// Runs a scheduling run with a cooperative cancellation flag.
    ///
    /// The flag is checked at the top of each generation; once set, the
    /// loop stops and the best result found so far is returned.
    #[instrument(level = "info", skip_all, fields(slots = problem.slot_count(), population = params.population_size))]
    pub fn run_with_cancel(
        problem: &RosterProblem,
        params: &GaParameters,
        cancel: &AtomicBool,
    ) -> Result<GaOutcome, ConfigError> {
        params.validate()?;

        let mut rng = match params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };

        info!(max_generations = params.max_generations, "starting roster run");

        let mut population: Vec<RosterChromosome> = (0..params.population_size)
            .map(|_| problem.random_chromosome(&mut rng))
            .collect();
        evaluate_population(problem, &params.weights, &mut population, params.parallel);

        let mut best_ever: Option<RosterChromosome> = None;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut history = Vec::with_capacity(params.max_generations as usize);
        let mut generations = 0;

        for generation in 0..params.max_generations {
            if cancel.load(Ordering::Relaxed) {
                debug!(generation, "cancellation requested, stopping early");
                break;
            }

            capture_best(&population, &mut best_ever, &mut best_fitness);
            history.push(best_fitness);

            population = Self::next_generation(problem, params, population, &mut rng);
            evaluate_population(problem, &params.weights, &mut population, params.parallel);

            generations = generation + 1;
            debug!(generation, best_fitness, "generation complete");
        }

        // A run cancelled before its first generation still reports the
        // best of the initial population
        if best_ever.is_none() {
            capture_best(&population, &mut best_ever, &mut best_fitness);
        }
        let best = best_ever.unwrap_or_default();
        let schedule = problem.project(&best);

        info!(generations, best_fitness, "run finished");

        Ok(GaOutcome {
            schedule,
            best_fitness,
            generations,
            history,
        })
    }

    /// Breeds the next generation from the current one.
    ///
    /// The top `elite_count` chromosomes are copied unchanged; the rest
    /// of the slots are filled by roulette-selected parent pairs run
    /// through crossover (with probability `crossover_rate`) and
    /// mutation (per chromosome, with probability `mutation_rate`).
    /// The second parent is dropped when only one slot remains.
    fn next_generation<R: Rng>(
        problem: &RosterProblem,
        params: &GaParameters,
        population: Vec<RosterChromosome>,
        rng: &mut R,
    ) -> Vec<RosterChromosome> {
        let mut ranked = population;
        ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

        let mut next = Vec::with_capacity(params.population_size);
        next.extend(ranked.iter().take(params.elite_count).cloned());

        while next.len() < params.population_size {
            let mut first = roulette_select(&ranked, rng).clone();
            let mut second = roulette_select(&ranked, rng).clone();

            if rng.random_bool(params.crossover_rate) {
                single_point_crossover(&mut first, &mut second, rng);
            }
            if rng.random_bool(params.mutation_rate) {
                slot_mutation(&mut first, problem, rng);
            }
            if rng.random_bool(params.mutation_rate) {
                slot_mutation(&mut second, problem, rng);
            }

            next.push(first);
            if next.len() < params.population_size {
                next.push(second);
            }
        }

        next
    }
}

/// Records the generation's best chromosome into the best-ever holder.
///
/// The snapshot is a deep copy: later in-place breeding must never
/// corrupt the recorded winner.
fn capture_best(
    population: &[RosterChromosome],
    best_ever: &mut Option<RosterChromosome>,
    best_fitness: &mut f64,
) {
    if let Some(generation_best) = population
        .iter()
        .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
    {
        if generation_best.fitness > *best_fitness || best_ever.is_none() {
            *best_fitness = generation_best.fitness;
            *best_ever = Some(generation_best.clone());
        }
    }
}

/// Scores every chromosome, optionally across worker threads.
///
/// Evaluation is pure, so the parallel path can never change results.
fn evaluate_population(
    problem: &RosterProblem,
    weights: &FitnessWeights,
    population: &mut [RosterChromosome],
    parallel: bool,
) {
    if parallel {
        population
            .par_iter_mut()
            .for_each(|c| c.fitness = weights.score(problem, c));
    } else {
        for c in population.iter_mut() {
            c.fitness = weights.score(problem, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilitySubmission, Person, ShiftDefinition};
    use chrono::NaiveTime;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    /// One shift needing 1 principal + 2 assistants, one planning day,
    /// exactly three people with full availability.
    fn single_slot_problem() -> RosterProblem {
        let people = vec![
            Person::senior("lead"),
            Person::ordinary("a"),
            Person::ordinary("b"),
        ];
        let shifts =
            vec![ShiftDefinition::new("s1", t(9), t(12)).with_required_assistants(2)];
        let subs = vec![
            AvailabilitySubmission::new("lead").with_full_week("s1"),
            AvailabilitySubmission::new("a").with_full_week("s1"),
            AvailabilitySubmission::new("b").with_full_week("s1"),
        ];
        RosterProblem::new(&people, &shifts, &subs).with_days(&[2])
    }

    /// Two shifts across three days, six people with uneven availability.
    fn week_problem() -> RosterProblem {
        let people = vec![
            Person::senior("lead1"),
            Person::senior("lead2"),
            Person::ordinary("a"),
            Person::ordinary("b"),
            Person::ordinary("c"),
            Person::ordinary("d"),
        ];
        let shifts = vec![
            ShiftDefinition::new("morning", t(9), t(12)).with_required_assistants(2),
            ShiftDefinition::new("evening", t(18), t(21)).with_required_assistants(1),
        ];
        let subs = vec![
            AvailabilitySubmission::new("lead1")
                .with_item("morning", &[1, 2, 3])
                .with_item("evening", &[1]),
            AvailabilitySubmission::new("lead2").with_item("evening", &[2, 3]),
            AvailabilitySubmission::new("a").with_item("morning", &[1, 2]),
            AvailabilitySubmission::new("b")
                .with_item("morning", &[2, 3])
                .with_item("evening", &[1, 2]),
            AvailabilitySubmission::new("c").with_item("morning", &[1, 3]),
            AvailabilitySubmission::new("d").with_item("evening", &[1, 2, 3]),
        ];
        RosterProblem::new(&people, &shifts, &subs).with_days(&[1, 2, 3])
    }

    fn small_params() -> GaParameters {
        GaParameters::default()
            .with_population_size(10)
            .with_max_generations(5)
            .with_elite_count(1)
            .with_seed(42)
    }

    #[test]
    fn test_invalid_params_fail_before_running() {
        let problem = single_slot_problem();
        let params = small_params().with_population_size(0);
        assert_eq!(
            GaRunner::run(&problem, &params).unwrap_err(),
            ConfigError::EmptyPopulation
        );
    }

    #[test]
    fn test_single_slot_fully_staffed() {
        let problem = single_slot_problem();
        let outcome = GaRunner::run(&problem, &small_params()).unwrap();

        assert_eq!(outcome.generations, 5);
        let entry = outcome.schedule.entry("s1", 2).unwrap();
        assert_eq!(entry.principal.as_deref(), Some("lead"));
        let mut assistants = entry.assistants.clone();
        assistants.sort();
        assert_eq!(assistants, vec!["a".to_string(), "b".to_string()]);
        // 3 staffed positions at the default reward, zero variance
        assert!((outcome.best_fitness - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_eligible_slot_still_completes() {
        let people = vec![Person::senior("lead"), Person::ordinary("a")];
        let shifts =
            vec![ShiftDefinition::new("s1", t(9), t(12)).with_required_assistants(1)];
        // Availability only covers day 1; day 2 has nobody
        let subs = vec![
            AvailabilitySubmission::new("lead").with_item("s1", &[1]),
            AvailabilitySubmission::new("a").with_item("s1", &[1]),
        ];
        let problem = RosterProblem::new(&people, &shifts, &subs).with_days(&[1, 2]);

        let outcome = GaRunner::run(&problem, &small_params()).unwrap();
        assert_eq!(outcome.generations, 5);

        let empty = outcome.schedule.entry("s1", 2).unwrap();
        assert!(empty.principal.is_none());
        assert!(empty.assistants.is_empty());

        let staffed = outcome.schedule.entry("s1", 1).unwrap();
        assert_eq!(staffed.principal.as_deref(), Some("lead"));
        assert_eq!(staffed.assistants, vec!["a".to_string()]);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let problem = week_problem();
        let params = GaParameters::default()
            .with_population_size(16)
            .with_max_generations(20)
            .with_elite_count(2)
            .with_seed(7);

        let first = GaRunner::run(&problem, &params).unwrap();
        let second = GaRunner::run(&problem, &params).unwrap();

        assert_eq!(first.best_fitness, second.best_fitness);
        assert_eq!(first.history, second.history);
        assert_eq!(
            serde_json::to_string(&first.schedule).unwrap(),
            serde_json::to_string(&second.schedule).unwrap()
        );
    }

    #[test]
    fn test_parallel_evaluation_matches_serial() {
        let problem = week_problem();
        let params = GaParameters::default()
            .with_population_size(16)
            .with_max_generations(10)
            .with_seed(7);

        let serial = GaRunner::run(&problem, &params.clone().with_parallel(false)).unwrap();
        let parallel = GaRunner::run(&problem, &params.with_parallel(true)).unwrap();

        assert_eq!(serial.best_fitness, parallel.best_fitness);
        assert_eq!(
            serde_json::to_string(&serial.schedule).unwrap(),
            serde_json::to_string(&parallel.schedule).unwrap()
        );
    }

    #[test]
    fn test_best_ever_fitness_is_monotonic() {
        let problem = week_problem();
        let params = GaParameters::default()
            .with_population_size(12)
            .with_max_generations(40)
            .with_elite_count(2)
            .with_seed(3);

        let outcome = GaRunner::run(&problem, &params).unwrap();
        assert_eq!(outcome.history.len(), 40);
        for window in outcome.history.windows(2) {
            assert!(window[1] >= window[0]);
        }
        assert!(outcome.best_fitness >= outcome.history[0]);
    }

    #[test]
    fn test_output_covers_every_slot() {
        let problem = week_problem();
        let outcome = GaRunner::run(&problem, &small_params()).unwrap();
        assert_eq!(outcome.schedule.slot_count(), problem.slot_count());
        for slot in problem.slots() {
            assert!(outcome.schedule.entry(&slot.shift_id, slot.day).is_some());
        }
    }

    #[test]
    fn test_cancellation_stops_early() {
        let problem = week_problem();
        let params = GaParameters::default()
            .with_population_size(10)
            .with_max_generations(1000)
            .with_seed(5);

        let cancel = AtomicBool::new(true);
        let outcome = GaRunner::run_with_cancel(&problem, &params, &cancel).unwrap();

        assert_eq!(outcome.generations, 0);
        // Still a complete schedule from the initial population
        assert_eq!(outcome.schedule.slot_count(), problem.slot_count());
        assert!(outcome.best_fitness > f64::NEG_INFINITY);
    }

    #[test]
    fn test_elites_carry_over_unchanged() {
        let problem = week_problem();
        let params = GaParameters::default()
            .with_population_size(8)
            .with_elite_count(3)
            .with_seed(11);
        let mut rng = SmallRng::seed_from_u64(11);

        let mut population: Vec<RosterChromosome> = (0..params.population_size)
            .map(|_| problem.random_chromosome(&mut rng))
            .collect();
        evaluate_population(&problem, &params.weights, &mut population, false);

        let mut ranked = population.clone();
        ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

        let next = GaRunner::next_generation(&problem, &params, population, &mut rng);
        assert_eq!(next.len(), params.population_size);
        for i in 0..params.elite_count {
            assert_eq!(next[i].genes, ranked[i].genes);
            assert_eq!(next[i].fitness, ranked[i].fitness);
        }
    }

    #[test]
    fn test_generations_stay_structurally_valid() {
        let problem = week_problem();
        let params = GaParameters::default()
            .with_population_size(12)
            .with_elite_count(2)
            .with_seed(13);
        let mut rng = SmallRng::seed_from_u64(13);

        let mut population: Vec<RosterChromosome> = (0..params.population_size)
            .map(|_| problem.random_chromosome(&mut rng))
            .collect();
        evaluate_population(&problem, &params.weights, &mut population, false);

        for _ in 0..10 {
            population = GaRunner::next_generation(&problem, &params, population, &mut rng);
            evaluate_population(&problem, &params.weights, &mut population, false);
            assert_eq!(population.len(), params.population_size);
            for chromosome in &population {
                assert!(chromosome.is_valid(problem.slots()));
            }
        }
    }
}
