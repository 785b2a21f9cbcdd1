//! Input validation for roster scheduling problems.
//!
//! Checks structural integrity of the roster, shift template, and
//! availability submissions before scheduling. Detects:
//! - Duplicate IDs
//! - Submissions from unknown people
//! - Availability items referencing unknown shifts
//! - Day codes outside `1..=7`
//! - Shifts that cannot be staffed at all
//!
//! The engine itself trusts its inputs; this module is the caller's
//! guard against handing it inconsistent data.

use std::collections::HashSet;

use crate::models::{is_valid_day, AvailabilitySubmission, Person, ShiftDefinition};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A submission came from a person not on the roster.
    UnknownPerson,
    /// An availability item references a shift that doesn't exist.
    UnknownShift,
    /// A day code is outside `1..=7`.
    InvalidDayCode,
    /// The same day appears twice within one availability item.
    DuplicateDay,
    /// A shift requires no principal and zero assistants.
    UnstaffableShift,
    /// The shift template is empty.
    EmptyTemplate,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a roster scheduling problem.
///
/// Checks:
/// 1. No duplicate person IDs
/// 2. No duplicate shift IDs; template is non-empty
/// 3. Every shift has at least one position to fill
/// 4. Every submission comes from a person on the roster
/// 5. Every availability item references an existing shift
/// 6. All day codes are in `1..=7`, with no duplicates per item
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    people: &[Person],
    shifts: &[ShiftDefinition],
    submissions: &[AvailabilitySubmission],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect person IDs
    let mut person_ids = HashSet::new();
    for p in people {
        if !person_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate person ID: {}", p.id),
            ));
        }
    }

    // Collect shift IDs
    if shifts.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTemplate,
            "Shift template has no shifts",
        ));
    }
    let mut shift_ids = HashSet::new();
    for s in shifts {
        if !shift_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate shift ID: {}", s.id),
            ));
        }
        if s.total_positions() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnstaffableShift,
                format!("Shift '{}' has no positions to fill", s.id),
            ));
        }
    }

    // Check submissions
    for sub in submissions {
        if !person_ids.contains(sub.person_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownPerson,
                format!("Submission from unknown person '{}'", sub.person_id),
            ));
        }

        for item in &sub.items {
            if !shift_ids.contains(item.shift_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownShift,
                    format!(
                        "Submission from '{}' references unknown shift '{}'",
                        sub.person_id, item.shift_id
                    ),
                ));
            }

            let mut seen_days = HashSet::new();
            for &day in &item.days {
                if !is_valid_day(day) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidDayCode,
                        format!(
                            "Submission from '{}' has invalid day code {} for shift '{}'",
                            sub.person_id, day, item.shift_id
                        ),
                    ));
                } else if !seen_days.insert(day) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateDay,
                        format!(
                            "Submission from '{}' repeats day {} for shift '{}'",
                            sub.person_id, day, item.shift_id
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
