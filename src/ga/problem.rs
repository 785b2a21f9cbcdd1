//! Roster GA problem definition.
//!
//! Bridges the domain models (people, shifts, availability submissions)
//! to the genetic engine: builds the availability index once, fixes the
//! slot sequence for the whole run, constructs random chromosomes, and
//! projects the winning chromosome back into a [`RosterSchedule`].
//!
//! # Slot Ordering
//!
//! Slots are enumerated in template shift order, then ascending day
//! code. The order is fixed at construction and shared by every
//! chromosome, which is what makes single-point crossover positionally
//! meaningful and the final projection deterministic.

use std::collections::{HashMap, HashSet};

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::{Gene, RosterChromosome};
use crate::models::{
    AvailabilitySubmission, Person, RosterEntry, RosterSchedule, RosterShift, ShiftDefinition,
    ALL_DAYS,
};

/// Compact staffing descriptor for one (shift, day) slot.
///
/// Denormalized from [`ShiftDefinition`] so scoring never touches the
/// domain models.
#[derive(Debug, Clone)]
pub struct SlotInfo {
    /// Shift identifier.
    pub shift_id: String,
    /// Day code (`1..=7`, 1 = Sunday).
    pub day: u8,
    /// Number of assistant positions to fill.
    pub required_assistants: u32,
    /// Whether the slot needs a principal.
    pub requires_principal: bool,
    /// Duty duration in minutes.
    pub duty_minutes: i64,
}

/// Summary of one shift, kept for slot re-derivation.
#[derive(Debug, Clone)]
struct ShiftSummary {
    id: String,
    required_assistants: u32,
    requires_principal: bool,
    duty_minutes: i64,
}

/// A roster scheduling problem: fixed slot set plus availability index.
///
/// Built once per run from external data and never mutated afterward.
/// The engine consults it during initialization, mutation, fitness
/// evaluation, and result projection.
///
/// # Example
/// ```no_run
/// use u_roster::ga::{GaParameters, GaRunner, RosterProblem};
/// use u_roster::models::{AvailabilitySubmission, Person, ShiftDefinition};
///
/// let people: Vec<Person> = vec![/* ... */];
/// let shifts: Vec<ShiftDefinition> = vec![/* ... */];
/// let submissions: Vec<AvailabilitySubmission> = vec![/* ... */];
/// let problem = RosterProblem::new(&people, &shifts, &submissions);
/// let outcome = GaRunner::run(&problem, &GaParameters::default());
/// ```
#[derive(Debug, Clone)]
pub struct RosterProblem {
    /// Slot sequence, shift-major then day-ascending.
    slots: Vec<SlotInfo>,
    /// Shift summaries in template order (for slot re-derivation).
    shift_summaries: Vec<ShiftSummary>,
    /// shift_id → day → people who declared availability, deduplicated,
    /// in submission order.
    index: HashMap<String, HashMap<u8, Vec<String>>>,
    /// Roster order of person IDs (fixed accumulation order for scoring).
    people: Vec<String>,
    /// person_id → position in `people`.
    person_pos: HashMap<String, usize>,
    /// People who may hold the principal position.
    principal_eligible: HashSet<String>,
    /// Planning days, ascending.
    days: Vec<u8>,
}

impl RosterProblem {
    /// Builds a problem covering every day of the week.
    ///
    /// Flattens all submissions into the availability index. No input
    /// validation happens here; run
    /// [`validate_input`](crate::validation::validate_input) first if
    /// the data comes from an untrusted source.
    pub fn new(
        people: &[Person],
        shifts: &[ShiftDefinition],
        submissions: &[AvailabilitySubmission],
    ) -> Self {
        let mut index: HashMap<String, HashMap<u8, Vec<String>>> = HashMap::new();
        for submission in submissions {
            for item in &submission.items {
                let by_day = index.entry(item.shift_id.clone()).or_default();
                for &day in &item.days {
                    let pool = by_day.entry(day).or_default();
                    if !pool.contains(&submission.person_id) {
                        pool.push(submission.person_id.clone());
                    }
                }
            }
        }

        let person_pos = people
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        let principal_eligible = people
            .iter()
            .filter(|p| p.is_principal_eligible())
            .map(|p| p.id.clone())
            .collect();

        let shift_summaries = shifts
            .iter()
            .map(|s| ShiftSummary {
                id: s.id.clone(),
                required_assistants: s.required_assistants,
                requires_principal: s.requires_principal,
                duty_minutes: s.duty_minutes(),
            })
            .collect();

        let mut problem = Self {
            slots: Vec::new(),
            shift_summaries,
            index,
            people: people.iter().map(|p| p.id.clone()).collect(),
            person_pos,
            principal_eligible,
            days: ALL_DAYS.to_vec(),
        };
        problem.rebuild_slots();
        problem
    }

    /// Restricts the planning horizon to the given day codes.
    ///
    /// Days are sorted ascending and deduplicated; the slot sequence is
    /// re-derived.
    pub fn with_days(mut self, days: &[u8]) -> Self {
        let mut days = days.to_vec();
        days.sort_unstable();
        days.dedup();
        self.days = days;
        self.rebuild_slots();
        self
    }

    fn rebuild_slots(&mut self) {
        self.slots = self
            .shift_summaries
            .iter()
            .flat_map(|shift| {
                self.days.iter().map(|&day| SlotInfo {
                    shift_id: shift.id.clone(),
                    day,
                    required_assistants: shift.required_assistants,
                    requires_principal: shift.requires_principal,
                    duty_minutes: shift.duty_minutes,
                })
            })
            .collect();
    }

    /// The fixed slot sequence.
    pub fn slots(&self) -> &[SlotInfo] {
        &self.slots
    }

    /// Number of slots in the planning horizon.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The planning days, ascending.
    pub fn days(&self) -> &[u8] {
        &self.days
    }

    /// Number of people on the roster.
    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    /// Roster position of a person (fixed accumulation order).
    pub fn person_index(&self, person_id: &str) -> Option<usize> {
        self.person_pos.get(person_id).copied()
    }

    /// Whether a person may hold the principal position.
    pub fn is_principal_eligible(&self, person_id: &str) -> bool {
        self.principal_eligible.contains(person_id)
    }

    /// People who declared availability for a (shift, day) slot.
    ///
    /// Empty when nobody submitted for that exact pair.
    pub fn pool(&self, shift_id: &str, day: u8) -> &[String] {
        self.index
            .get(shift_id)
            .and_then(|by_day| by_day.get(&day))
            .map(|pool| pool.as_slice())
            .unwrap_or(&[])
    }

    /// Whether a person declared availability for a (shift, day) slot.
    pub fn is_available(&self, shift_id: &str, day: u8, person_id: &str) -> bool {
        self.pool(shift_id, day).iter().any(|p| p == person_id)
    }

    /// Draws a random assignment for one slot.
    ///
    /// The principal (when required) is drawn uniformly from the slot's
    /// principal-eligible pool; assistants are drawn uniformly without
    /// replacement from the remaining pool. When the pool is smaller
    /// than the requirement, as many seats as possible are filled and
    /// the rest stay empty — an understaffed slot is representable and
    /// penalized by fitness, never rejected here.
    pub fn random_gene<R: Rng>(&self, slot: &SlotInfo, rng: &mut R) -> Gene {
        let pool = self.pool(&slot.shift_id, slot.day);

        let principal = if slot.requires_principal {
            let eligible: Vec<&String> = pool
                .iter()
                .filter(|p| self.principal_eligible.contains(*p))
                .collect();
            eligible.choose(rng).map(|p| (*p).clone())
        } else {
            None
        };

        let candidates: Vec<&String> = pool
            .iter()
            .filter(|p| principal.as_deref() != Some(p.as_str()))
            .collect();
        let count = (slot.required_assistants as usize).min(candidates.len());
        let assistants = candidates
            .choose_multiple(rng, count)
            .map(|p| (*p).clone())
            .collect();

        Gene {
            shift_id: slot.shift_id.clone(),
            day: slot.day,
            principal,
            assistants,
            required_assistants: slot.required_assistants,
            duty_minutes: slot.duty_minutes,
        }
    }

    /// Draws one complete random chromosome.
    pub fn random_chromosome<R: Rng>(&self, rng: &mut R) -> RosterChromosome {
        let genes = self
            .slots
            .iter()
            .map(|slot| self.random_gene(slot, rng))
            .collect();
        RosterChromosome::new(genes)
    }

    /// Projects a chromosome into the output schedule.
    ///
    /// Genes are grouped by shift in template order; entries within a
    /// group follow the ascending day order of the slot sequence.
    /// Unstaffed slots are included.
    pub fn project(&self, chromosome: &RosterChromosome) -> RosterSchedule {
        let mut schedule = RosterSchedule::new();
        for (slot, gene) in self.slots.iter().zip(&chromosome.genes) {
            let needs_group = schedule
                .shifts
                .last()
                .map_or(true, |group| group.shift_id != slot.shift_id);
            if needs_group {
                schedule.shifts.push(RosterShift {
                    shift_id: slot.shift_id.clone(),
                    entries: Vec::new(),
                });
            }
            if let Some(group) = schedule.shifts.last_mut() {
                group.entries.push(RosterEntry {
                    day: slot.day,
                    principal: gene.principal.clone(),
                    assistants: gene.assistants.clone(),
                });
            }
        }
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn sample_inputs() -> (
        Vec<Person>,
        Vec<ShiftDefinition>,
        Vec<AvailabilitySubmission>,
    ) {
        let people = vec![
            Person::senior("lead"),
            Person::ordinary("a"),
            Person::ordinary("b"),
        ];
        let shifts = vec![
            ShiftDefinition::new("s1", t(9), t(12)).with_required_assistants(2),
            ShiftDefinition::new("s2", t(12), t(15))
                .with_required_assistants(1)
                .with_principal(false),
        ];
        let subs = vec![
            AvailabilitySubmission::new("lead").with_item("s1", &[1, 2]),
            AvailabilitySubmission::new("a")
                .with_item("s1", &[1, 2])
                .with_item("s2", &[1]),
            AvailabilitySubmission::new("b").with_item("s1", &[1]),
        ];
        (people, shifts, subs)
    }

    fn sample_problem() -> RosterProblem {
        let (people, shifts, subs) = sample_inputs();
        RosterProblem::new(&people, &shifts, &subs).with_days(&[1, 2])
    }

    #[test]
    fn test_slot_enumeration_order() {
        let problem = sample_problem();
        let keys: Vec<(&str, u8)> = problem
            .slots()
            .iter()
            .map(|s| (s.shift_id.as_str(), s.day))
            .collect();
        assert_eq!(keys, vec![("s1", 1), ("s1", 2), ("s2", 1), ("s2", 2)]);
    }

    #[test]
    fn test_with_days_sorts_and_dedups() {
        let (people, shifts, subs) = sample_inputs();
        let problem = RosterProblem::new(&people, &shifts, &subs).with_days(&[5, 1, 5]);
        assert_eq!(problem.days(), &[1, 5]);
        assert_eq!(problem.slot_count(), 4);
    }

    #[test]
    fn test_default_horizon_is_full_week() {
        let (people, shifts, subs) = sample_inputs();
        let problem = RosterProblem::new(&people, &shifts, &subs);
        assert_eq!(problem.slot_count(), 14);
    }

    #[test]
    fn test_index_membership() {
        let problem = sample_problem();
        assert!(problem.is_available("s1", 1, "a"));
        assert!(problem.is_available("s1", 2, "lead"));
        // "b" only declared day 1
        assert!(!problem.is_available("s1", 2, "b"));
        // Nobody declared s2 on day 2
        assert!(problem.pool("s2", 2).is_empty());
        assert!(problem.pool("s9", 1).is_empty());
    }

    #[test]
    fn test_index_dedups_repeat_submissions() {
        let (people, shifts, mut subs) = sample_inputs();
        subs.push(AvailabilitySubmission::new("a").with_item("s1", &[1]));
        let problem = RosterProblem::new(&people, &shifts, &subs);
        let occurrences = problem
            .pool("s1", 1)
            .iter()
            .filter(|p| p.as_str() == "a")
            .count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn test_principal_eligibility() {
        let problem = sample_problem();
        assert!(problem.is_principal_eligible("lead"));
        assert!(!problem.is_principal_eligible("a"));
        assert!(!problem.is_principal_eligible("nobody"));
    }

    #[test]
    fn test_random_gene_respects_roles_and_pools() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let slot = &problem.slots()[0]; // (s1, 1): pool lead/a/b
        for _ in 0..50 {
            let gene = problem.random_gene(slot, &mut rng);
            assert_eq!(gene.principal.as_deref(), Some("lead"));
            assert_eq!(gene.assistants.len(), 2);
            assert!(gene.is_well_formed());
            for a in &gene.assistants {
                assert!(problem.is_available("s1", 1, a));
            }
        }
    }

    #[test]
    fn test_random_gene_understaffed_pool() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        // (s1, 2): pool is lead/a → principal lead, only one assistant left
        let slot = &problem.slots()[1];
        let gene = problem.random_gene(slot, &mut rng);
        assert_eq!(gene.principal.as_deref(), Some("lead"));
        assert_eq!(gene.assistants, vec!["a".to_string()]);
    }

    #[test]
    fn test_random_gene_empty_pool() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        // (s2, 2): nobody declared availability
        let slot = &problem.slots()[3];
        let gene = problem.random_gene(slot, &mut rng);
        assert!(gene.principal.is_none());
        assert!(gene.assistants.is_empty());
    }

    #[test]
    fn test_random_gene_no_principal_shift() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        // (s2, 1): shift does not take a principal
        let slot = &problem.slots()[2];
        let gene = problem.random_gene(slot, &mut rng);
        assert!(gene.principal.is_none());
        assert_eq!(gene.assistants, vec!["a".to_string()]);
    }

    #[test]
    fn test_projection_groups_and_orders() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let c = problem.random_chromosome(&mut rng);
        let schedule = problem.project(&c);

        let shift_ids: Vec<&str> = schedule
            .shifts
            .iter()
            .map(|s| s.shift_id.as_str())
            .collect();
        assert_eq!(shift_ids, vec!["s1", "s2"]);
        for group in &schedule.shifts {
            let days: Vec<u8> = group.entries.iter().map(|e| e.day).collect();
            assert_eq!(days, vec![1, 2]);
        }
        assert_eq!(schedule.slot_count(), problem.slot_count());
    }

    #[test]
    fn test_projection_keeps_unstaffed_slots() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let c = problem.random_chromosome(&mut rng);
        let schedule = problem.project(&c);
        let empty = schedule.entry("s2", 2).unwrap();
        assert!(empty.principal.is_none());
        assert!(empty.assistants.is_empty());
    }
}
