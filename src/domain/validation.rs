use std::fmt;

use crate::domain::{NewSubscriber, SubscriberDetails};

/// Subscription form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    FirstName,
    LastName,
}

impl Field {
    /// Human-readable field label used in error messages
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
        }
    }
}

/// Reason why a single field was rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    #[error("is required")]
    Required,
    #[error("is not valid")]
    Invalid,
    #[error("must be at least {0} characters long")]
    TooShort(usize),
}

/// A rejected field together with the reason
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{} {kind}", field.label())]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
}

impl Violation {
    pub const fn new(field: Field, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

/// Outcome of validating a subscription candidate.
///
/// Violations are kept in field order: email, first name, last name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    violations: Vec<Violation>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Render every violation as a user-facing message
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<Violation> for Validation {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

/// Check all three fields of a candidate and collect every violation.
///
/// Check-only entry point for callers that need the verdict without a
/// `NewSubscriber`; the subscription workflow goes through
/// `NewSubscriber::try_from`, which applies the same rules.
pub fn validate(candidate: &SubscriberDetails) -> Validation {
    NewSubscriber::try_from(candidate.clone())
        .err()
        .unwrap_or_default()
}
