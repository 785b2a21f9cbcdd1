//! Roster quality metrics (KPIs).
//!
//! Computes staffing performance indicators from a completed roster
//! and its input template.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage Rate | Filled positions / required positions |
//! | Principal Coverage | Principals present / principals required |
//! | Unfilled Positions | Required positions left empty |
//! | Duty Minutes | Total assigned minutes per person |
//! | Fairness Spread | Std. deviation of duty minutes across the roster |

use std::collections::HashMap;

use crate::models::{Person, RosterSchedule, ShiftDefinition};

/// Roster performance indicators.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Positions the template requires over the horizon.
    pub required_positions: usize,
    /// Positions actually filled.
    pub filled_positions: usize,
    /// Filled / required (1.0 when nothing is required).
    pub coverage_rate: f64,
    /// Principals present / principals required (1.0 when none required).
    pub principal_coverage_rate: f64,
    /// Total assigned duty minutes per person. People with no duty
    /// appear with zero.
    pub duty_minutes_by_person: HashMap<String, i64>,
    /// Standard deviation of duty minutes across the whole roster.
    pub fairness_spread: f64,
}

impl RosterKpi {
    /// Computes KPIs from a roster and its inputs.
    ///
    /// # Arguments
    /// * `schedule` - The completed roster.
    /// * `shifts` - The shift template (for staffing requirements and durations).
    /// * `people` - The roster of people (zero-duty people count toward fairness).
    pub fn calculate(
        schedule: &RosterSchedule,
        shifts: &[ShiftDefinition],
        people: &[Person],
    ) -> Self {
        let by_id: HashMap<&str, &ShiftDefinition> =
            shifts.iter().map(|s| (s.id.as_str(), s)).collect();

        let mut required_positions = 0;
        let mut filled_positions = 0;
        let mut principals_required = 0;
        let mut principals_present = 0;
        // Fixed roster order keeps the spread computation deterministic
        let mut minutes: Vec<i64> = vec![0; people.len()];
        let index: HashMap<&str, usize> = people
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.as_str(), i))
            .collect();

        for group in &schedule.shifts {
            let shift = match by_id.get(group.shift_id.as_str()) {
                Some(shift) => shift,
                None => continue,
            };
            let duty = shift.duty_minutes();

            for entry in &group.entries {
                required_positions += shift.total_positions() as usize;
                filled_positions += entry.staffed_count();
                if shift.requires_principal {
                    principals_required += 1;
                    principals_present += usize::from(entry.principal.is_some());
                }
                for occupant in entry.assistants.iter().chain(entry.principal.as_ref()) {
                    if let Some(&i) = index.get(occupant.as_str()) {
                        minutes[i] += duty;
                    }
                }
            }
        }

        let coverage_rate = if required_positions == 0 {
            1.0
        } else {
            filled_positions as f64 / required_positions as f64
        };
        let principal_coverage_rate = if principals_required == 0 {
            1.0
        } else {
            principals_present as f64 / principals_required as f64
        };

        let fairness_spread = if minutes.is_empty() {
            0.0
        } else {
            let n = minutes.len() as f64;
            let mean = minutes.iter().sum::<i64>() as f64 / n;
            let variance = minutes
                .iter()
                .map(|&m| {
                    let d = m as f64 - mean;
                    d * d
                })
                .sum::<f64>()
                / n;
            variance.sqrt()
        };

        let duty_minutes_by_person = people
            .iter()
            .zip(&minutes)
            .map(|(p, &m)| (p.id.clone(), m))
            .collect();

        Self {
            required_positions,
            filled_positions,
            coverage_rate,
            principal_coverage_rate,
            duty_minutes_by_person,
            fairness_spread,
        }
    }

    /// Required positions left empty.
    pub fn unfilled_positions(&self) -> usize {
        self.required_positions.saturating_sub(self.filled_positions)
    }

    /// Whether the roster meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_coverage: f64, max_spread: f64) -> bool {
        self.coverage_rate >= min_coverage && self.fairness_spread <= max_spread
    }
}
