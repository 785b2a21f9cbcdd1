//! Shift definition model.
//!
//! A shift is a recurring block of duty time with fixed time-of-day
//! bounds and a staffing requirement: a number of assistant positions
//! and, optionally, one principal position. The same shift repeats on
//! every day of the planning horizon; one (shift, day) pair is a slot.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A recurring duty shift with time bounds and staffing requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// Unique shift identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Time of day the shift starts.
    pub start: NaiveTime,
    /// Time of day the shift ends. May be earlier than `start`,
    /// in which case the shift wraps past midnight.
    pub end: NaiveTime,
    /// Number of assistant positions to fill.
    pub required_assistants: u32,
    /// Whether the shift needs a principal.
    pub requires_principal: bool,
}

impl ShiftDefinition {
    /// Creates a new shift with one principal and the given assistant count.
    pub fn new(id: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            start,
            end,
            required_assistants: 1,
            requires_principal: true,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of assistant positions.
    pub fn with_required_assistants(mut self, count: u32) -> Self {
        self.required_assistants = count;
        self
    }

    /// Sets whether the shift needs a principal.
    pub fn with_principal(mut self, required: bool) -> Self {
        self.requires_principal = required;
        self
    }

    /// Duty duration in minutes, wrapping past midnight when `end < start`.
    pub fn duty_minutes(&self) -> i64 {
        let span = self
            .end
            .signed_duration_since(self.start)
            .num_minutes();
        if span <= 0 {
            span + 24 * 60
        } else {
            span
        }
    }

    /// Total positions on one slot of this shift.
    #[inline]
    pub fn total_positions(&self) -> u32 {
        self.required_assistants + u32::from(self.requires_principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_shift_builder() {
        let s = ShiftDefinition::new("s1", t(9, 0), t(12, 30))
            .with_name("Morning desk")
            .with_required_assistants(3);
        assert_eq!(s.id, "s1");
        assert_eq!(s.name, "Morning desk");
        assert_eq!(s.required_assistants, 3);
        assert!(s.requires_principal);
        assert_eq!(s.total_positions(), 4);
    }

    #[test]
    fn test_duty_minutes() {
        let s = ShiftDefinition::new("s1", t(9, 0), t(12, 30));
        assert_eq!(s.duty_minutes(), 210);
    }

    #[test]
    fn test_duty_minutes_overnight() {
        let s = ShiftDefinition::new("s1", t(22, 0), t(2, 0));
        assert_eq!(s.duty_minutes(), 240);
    }

    #[test]
    fn test_no_principal() {
        let s = ShiftDefinition::new("s1", t(9, 0), t(12, 0)).with_principal(false);
        assert_eq!(s.total_positions(), s.required_assistants);
    }
}
