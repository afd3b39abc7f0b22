//! Guard IR: one entry per emitted check, independent of the text renderer.

use crate::{FieldKind, FieldSchema, Relation, constraint::NIL_LITERAL, naming::field_ident};

/// How a guarded field is reached from the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccess {
    /// Field name as declared in the schema.
    pub field: String,
    /// Accessor path in generated code, e.g. `self.tags`. Echoed verbatim in
    /// violation messages.
    pub accessor: String,
    /// The generated field is an `Option<T>` (proto3 `optional`); guards only
    /// apply when it is set.
    pub optional: bool,
}

impl FieldAccess {
    pub fn of(field: &FieldSchema) -> Self {
        Self {
            field: field.name.clone(),
            accessor: format!("self.{}", field_ident(&field.name)),
            optional: field.proto3_optional,
        }
    }
}

/// Value domain of a scalar guard; drives literal typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// Integer kinds and enums (prost stores enums as `i32`).
    Integer,
    F32,
    F64,
    Bool,
}

impl NumericKind {
    pub fn of(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Float => NumericKind::F32,
            FieldKind::Double => NumericKind::F64,
            FieldKind::Bool => NumericKind::Bool,
            _ => NumericKind::Integer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// Fails with a presence error when the message field is unset.
    Presence { access: FieldAccess },
    /// Runs the nested value's own routine when set and propagates its error
    /// unchanged.
    Delegate {
        access: FieldAccess,
        message_type: String,
    },
    /// Requires `len <relation> bound`.
    Length {
        access: FieldAccess,
        relation: Relation,
        bound: String,
    },
    /// Requires `value <relation> alternative`; for `Equal` any alternative
    /// may match, for `NotEqual` every alternative must differ.
    Value {
        access: FieldAccess,
        relation: Relation,
        bound: String,
        alternatives: Vec<String>,
        kind: NumericKind,
    },
}

impl Guard {
    pub fn access(&self) -> &FieldAccess {
        match self {
            Guard::Presence { access }
            | Guard::Delegate { access, .. }
            | Guard::Length { access, .. }
            | Guard::Value { access, .. } => access,
        }
    }

    pub fn relation(&self) -> Option<Relation> {
        match self {
            Guard::Length { relation, .. } | Guard::Value { relation, .. } => Some(*relation),
            Guard::Presence { .. } | Guard::Delegate { .. } => None,
        }
    }

    /// Violation text without the `validation error: ` prefix. Delegation
    /// has no text of its own.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Guard::Presence { access } => Some(format!(
                "{} must be not equal {NIL_LITERAL}",
                access.accessor
            )),
            Guard::Delegate { .. } => None,
            Guard::Length {
                access,
                relation,
                bound,
            } => Some(format!(
                "{} {} len({bound})",
                access.accessor,
                relation.violation_phrase()
            )),
            Guard::Value {
                access,
                relation,
                bound,
                ..
            } => Some(format!(
                "{} {} {bound}",
                access.accessor,
                relation.violation_phrase()
            )),
        }
    }
}
