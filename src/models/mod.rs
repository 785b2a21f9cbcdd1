//! Roster domain models.
//!
//! Provides the core data types for duty roster scheduling: the people
//! to assign, the shifts to staff, the availability they declared, and
//! the resulting schedule.
//!
//! # Domain Mappings
//!
//! | u-roster | Help Desk | Hospital Ward | Security |
//! |----------|-----------|---------------|----------|
//! | Person | Assistant | Nurse | Guard |
//! | ShiftDefinition | Desk Shift | Ward Shift | Patrol Shift |
//! | AvailabilitySubmission | Sign-up Form | Preference Sheet | Roster Bid |
//! | RosterSchedule | Duty Roster | Ward Roster | Patrol Plan |

mod availability;
mod person;
mod schedule;
mod shift;

pub use availability::{AvailabilityItem, AvailabilitySubmission, ALL_DAYS, is_valid_day};
pub use person::{Person, Role};
pub use schedule::{RosterEntry, RosterSchedule, RosterShift};
pub use shift::ShiftDefinition;
