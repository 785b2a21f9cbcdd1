//! Availability submission model.
//!
//! A submission records which (shift, day) slots a person declared
//! themselves willing to work. Absence of a declaration means
//! unavailable. A person may have multiple submissions; the engine
//! flattens them all into one lookup index.
//!
//! # Day Codes
//!
//! Days of the week are encoded as `1..=7` with `1 = Sunday`,
//! matching the upstream wire format.

use serde::{Deserialize, Serialize};

/// All valid day codes, Sunday through Saturday.
pub const ALL_DAYS: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];

/// One person's declared availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySubmission {
    /// Submitting person's identifier.
    pub person_id: String,
    /// Declared (shift, days) pairs.
    pub items: Vec<AvailabilityItem>,
}

/// Availability for one shift on a set of days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityItem {
    /// Shift identifier.
    pub shift_id: String,
    /// Day codes (`1..=7`, 1 = Sunday) the person can work this shift.
    pub days: Vec<u8>,
}

impl AvailabilitySubmission {
    /// Creates an empty submission for a person.
    pub fn new(person_id: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
            items: Vec::new(),
        }
    }

    /// Declares availability for a shift on the given days.
    pub fn with_item(mut self, shift_id: impl Into<String>, days: &[u8]) -> Self {
        self.items.push(AvailabilityItem {
            shift_id: shift_id.into(),
            days: days.to_vec(),
        });
        self
    }

    /// Declares availability for a shift on every day of the week.
    pub fn with_full_week(self, shift_id: impl Into<String>) -> Self {
        self.with_item(shift_id, &ALL_DAYS)
    }
}

/// Whether a day code is valid (`1..=7`).
#[inline]
pub fn is_valid_day(day: u8) -> bool {
    (1..=7).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_builder() {
        let sub = AvailabilitySubmission::new("u1")
            .with_item("s1", &[1, 3, 5])
            .with_full_week("s2");
        assert_eq!(sub.person_id, "u1");
        assert_eq!(sub.items.len(), 2);
        assert_eq!(sub.items[0].days, vec![1, 3, 5]);
        assert_eq!(sub.items[1].days.len(), 7);
    }

    #[test]
    fn test_day_codes() {
        assert!(is_valid_day(1));
        assert!(is_valid_day(7));
        assert!(!is_valid_day(0));
        assert!(!is_valid_day(8));
    }
}
