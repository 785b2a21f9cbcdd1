//! Baseline scheduling and KPI evaluation.
//!
//! Provides a deterministic least-loaded greedy scheduler and roster
//! quality metrics.
//!
//! # Algorithm
//!
//! `GreedyScheduler` walks the slot sequence once, assigning the
//! least-loaded eligible people. It is not optimal, but gives a fast
//! baseline to judge the genetic engine's output against.
//!
//! # KPI
//!
//! `RosterKpi` computes staffing metrics: coverage, principal coverage,
//! unfilled positions, per-person load, and fairness spread.

mod greedy;
mod kpi;

pub use greedy::GreedyScheduler;
pub use kpi::RosterKpi;
