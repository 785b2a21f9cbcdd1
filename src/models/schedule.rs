//! Roster schedule (solution) model.
//!
//! A roster schedule is the engine's output: for every (shift, day)
//! slot of the planning horizon, the chosen principal and assistants.
//! Slots may be partially or fully unstaffed; staffing gaps are
//! represented, never dropped.

use serde::{Deserialize, Serialize};

/// A complete duty roster, grouped by shift.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterSchedule {
    /// One group per shift, in template order.
    pub shifts: Vec<RosterShift>,
}

/// All scheduled days of one shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterShift {
    /// Shift identifier.
    pub shift_id: String,
    /// One entry per planning day, day codes ascending.
    pub entries: Vec<RosterEntry>,
}

/// The assignment for one (shift, day) slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Day code (`1..=7`, 1 = Sunday).
    pub day: u8,
    /// Assigned principal, if any.
    pub principal: Option<String>,
    /// Assigned assistants.
    pub assistants: Vec<String>,
}

impl RosterEntry {
    /// Number of filled positions on this slot.
    pub fn staffed_count(&self) -> usize {
        self.assistants.len() + usize::from(self.principal.is_some())
    }

    /// Whether a person works this slot in any position.
    pub fn includes(&self, person_id: &str) -> bool {
        self.principal.as_deref() == Some(person_id)
            || self.assistants.iter().any(|a| a == person_id)
    }
}

impl RosterSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the group for a shift.
    pub fn shift(&self, shift_id: &str) -> Option<&RosterShift> {
        self.shifts.iter().find(|s| s.shift_id == shift_id)
    }

    /// Finds the entry for a (shift, day) slot.
    pub fn entry(&self, shift_id: &str, day: u8) -> Option<&RosterEntry> {
        self.shift(shift_id)
            .and_then(|s| s.entries.iter().find(|e| e.day == day))
    }

    /// All (shift_id, entry) pairs a person is assigned to.
    pub fn entries_for_person(&self, person_id: &str) -> Vec<(&str, &RosterEntry)> {
        self.shifts
            .iter()
            .flat_map(|s| {
                s.entries
                    .iter()
                    .filter(|e| e.includes(person_id))
                    .map(move |e| (s.shift_id.as_str(), e))
            })
            .collect()
    }

    /// Total number of slots across all shifts.
    pub fn slot_count(&self) -> usize {
        self.shifts.iter().map(|s| s.entries.len()).sum()
    }

    /// Total number of filled positions across all slots.
    pub fn staffed_count(&self) -> usize {
        self.shifts
            .iter()
            .flat_map(|s| &s.entries)
            .map(|e| e.staffed_count())
            .sum()
    }
}
