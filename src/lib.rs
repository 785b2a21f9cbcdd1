//! Duty roster scheduling for the U-Engine ecosystem.
//!
//! Assigns people to recurring weekly duty shifts from their declared
//! availability, searching the combinatorial assignment space with a
//! genetic algorithm. Persistence, transport, notification, and
//! calendar export are left to consumers — this crate takes loaded
//! domain data and returns a scored roster.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Person`, `ShiftDefinition`,
//!   `AvailabilitySubmission`, `RosterSchedule`
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown
//!   references, day-code bounds)
//! - **`ga`**: The genetic engine — problem construction, chromosome
//!   encoding, fitness, selection, crossover, mutation, and the
//!   evolutionary runner
//! - **`scheduler`**: Greedy baseline scheduler and roster KPIs
//!
//! # Example
//!
//! ```
//! use u_roster::ga::{GaParameters, GaRunner, RosterProblem};
//! use u_roster::models::{AvailabilitySubmission, Person, ShiftDefinition};
//! use chrono::NaiveTime;
//!
//! let people = vec![
//!     Person::senior("lead").with_name("Lee"),
//!     Person::ordinary("a"),
//!     Person::ordinary("b"),
//! ];
//! let shifts = vec![ShiftDefinition::new(
//!     "morning",
//!     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
//! )
//! .with_required_assistants(2)];
//! let submissions = vec![
//!     AvailabilitySubmission::new("lead").with_full_week("morning"),
//!     AvailabilitySubmission::new("a").with_full_week("morning"),
//!     AvailabilitySubmission::new("b").with_full_week("morning"),
//! ];
//!
//! let problem = RosterProblem::new(&people, &shifts, &submissions);
//! let params = GaParameters::default()
//!     .with_population_size(20)
//!     .with_max_generations(50)
//!     .with_seed(42);
//! let outcome = GaRunner::run(&problem, &params).unwrap();
//! assert_eq!(outcome.schedule.slot_count(), 7);
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"

pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;
