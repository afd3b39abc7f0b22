//! Runtime support for validation routines emitted by `protoc-gen-validator`.
//!
//! Generated code implements [`Validate`] for each constrained message type
//! and reports the first violated constraint as a [`ValidationError`].

use std::borrow::Cow;

/// First constraint violation found while validating a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A singular message field marked as required was not set.
    #[error("validation error: {field} must be not equal nil")]
    Presence { field: Cow<'static, str> },

    /// A value or length bound did not hold.
    #[error("validation error: {message}")]
    Constraint {
        field: Cow<'static, str>,
        message: Cow<'static, str>,
    },
}

impl ValidationError {
    pub fn presence(field: impl Into<Cow<'static, str>>) -> Self {
        Self::Presence {
            field: field.into(),
        }
    }

    pub fn constraint(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Constraint {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Accessor path of the offending field, e.g. `self.tags`.
    pub fn field(&self) -> &str {
        match self {
            Self::Presence { field } | Self::Constraint { field, .. } => field,
        }
    }

    pub fn is_presence(&self) -> bool {
        matches!(self, Self::Presence { .. })
    }
}

/// Implemented by generated code for every message type that carries at
/// least one field constraint.
pub trait Validate {
    /// Check constraints in field-declaration order and return the first
    /// violation.
    fn validate(&self) -> Result<(), ValidationError>;
}
