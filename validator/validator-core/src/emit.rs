use tracing::debug;

use crate::{
    ConstrainedTypes, FieldAccess, FieldClass, FieldConstraint, FieldSchema, Guard, NumericKind,
    Relation, classify, parse_alternatives,
};

/// Translate one field's constraint into guards, in emission order.
///
/// Fields without a constraint yield no guards.
pub fn emit_field(field: &FieldSchema, constrained: &ConstrainedTypes) -> Vec<Guard> {
    let Some(constraint) = field.constraint.as_ref() else {
        return Vec::new();
    };
    let access = FieldAccess::of(field);

    match classify(field) {
        FieldClass::Message => emit_message(field, constraint, access, constrained),
        FieldClass::RepeatedOrString => emit_length(field, constraint, access),
        FieldClass::Scalar => emit_scalar(field, constraint, access),
    }
}

fn emit_message(
    field: &FieldSchema,
    constraint: &FieldConstraint,
    access: FieldAccess,
    constrained: &ConstrainedTypes,
) -> Vec<Guard> {
    let mut guards = Vec::with_capacity(2);
    if constraint.requires_presence() {
        guards.push(Guard::Presence {
            access: access.clone(),
        });
    }
    if let Some(message_type) = field.kind.message_type() {
        if constrained.contains(message_type) {
            guards.push(Guard::Delegate {
                access,
                message_type: message_type.to_string(),
            });
        } else {
            debug!(
                field = %field.name,
                message_type,
                "nested type has no constraints; skipping delegation"
            );
        }
    }
    guards
}

fn emit_length(
    field: &FieldSchema,
    constraint: &FieldConstraint,
    access: FieldAccess,
) -> Vec<Guard> {
    constraint
        .relations()
        .filter_map(|(relation, literal)| match literal.trim() {
            "" => {
                debug!(field = %field.name, %relation, literal, "empty bound; no guard emitted");
                None
            }
            bound => Some(Guard::Length {
                access: access.clone(),
                relation,
                bound: bound.to_string(),
            }),
        })
        .collect()
}

fn emit_scalar(
    field: &FieldSchema,
    constraint: &FieldConstraint,
    access: FieldAccess,
) -> Vec<Guard> {
    let kind = NumericKind::of(&field.kind);
    constraint
        .relations()
        .filter_map(|(relation, literal)| {
            let alternatives = match relation {
                Relation::Equal | Relation::NotEqual => parse_alternatives(literal),
                Relation::LessThan | Relation::GreaterThan => match literal.trim() {
                    "" => Vec::new(),
                    bound => vec![bound.to_string()],
                },
            };
            if alternatives.is_empty() {
                debug!(
                    field = %field.name,
                    %relation,
                    literal,
                    "empty bound; no guard emitted"
                );
                return None;
            }
            Some(Guard::Value {
                access: access.clone(),
                relation,
                bound: literal.to_string(),
                alternatives,
                kind,
            })
        })
        .collect()
}
