//! Staff member model.
//!
//! People are the entities assigned to duty slots. Each person has a
//! role that determines whether they may hold the principal position
//! of a shift. Principal eligibility is a hard constraint on
//! assignment, not a soft preference.

use serde::{Deserialize, Serialize};

/// A staff member who can be assigned to duty slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Staff role.
    pub role: Role,
}

/// Staff role classification.
///
/// Determines assignment semantics: only senior staff may be chosen
/// as the principal of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Ordinary assistant. May fill assistant positions only.
    Ordinary,
    /// Senior assistant. May hold the principal position.
    Senior,
    /// Administrator. Has full senior standing.
    Admin,
}

impl Person {
    /// Creates a new ordinary assistant.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
        }
    }

    /// Creates an ordinary assistant.
    pub fn ordinary(id: impl Into<String>) -> Self {
        Self::new(id, Role::Ordinary)
    }

    /// Creates a senior assistant.
    pub fn senior(id: impl Into<String>) -> Self {
        Self::new(id, Role::Senior)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether this person may be selected as a shift principal.
    #[inline]
    pub fn is_principal_eligible(&self) -> bool {
        matches!(self.role, Role::Senior | Role::Admin)
    }
}
