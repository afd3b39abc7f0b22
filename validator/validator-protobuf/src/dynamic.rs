//! Reflection-based evaluation of the guard IR.
//!
//! [`DynamicValidator`] runs the same guards the generated code contains,
//! in the same order and with the same error text, against
//! [`DynamicMessage`] values. Useful where generated code is not available,
//! and to check the emitted semantics without compiling them.

use std::collections::HashMap;

use prost_reflect::{DynamicMessage, FieldDescriptor, FileDescriptor, ReflectMessage, Value};
use validator_core::{
    FieldAccess, GeneratorOptions, Guard, Relation, ValidationRoutine, generate_file,
};
use validator_runtime::ValidationError;

use crate::{DynamicValidationError, constraint_extension, load_file_schema};

/// Validation routines for every constrained message type of one file.
#[derive(Debug, Clone, Default)]
pub struct DynamicValidator {
    routines: HashMap<String, ValidationRoutine>,
}

impl DynamicValidator {
    pub fn for_file(file: &FileDescriptor, options: &GeneratorOptions) -> Self {
        let extension = constraint_extension(file.parent_pool(), &options.extension);
        let schema = load_file_schema(file, extension.as_ref());
        let routines = generate_file(&schema)
            .map(|generated| generated.routines)
            .unwrap_or_default()
            .into_iter()
            .map(|routine| (routine.message.clone(), routine))
            .collect();
        Self { routines }
    }

    /// Whether the message type (full protobuf name) has a routine.
    pub fn has_routine(&self, message: &str) -> bool {
        self.routines.contains_key(message)
    }

    /// Validate `message`, returning the first violation in field-declaration
    /// order. Types without a routine always pass.
    pub fn validate(&self, message: &DynamicMessage) -> Result<(), DynamicValidationError> {
        let desc = message.descriptor();
        let Some(routine) = self.routines.get(desc.full_name()) else {
            return Ok(());
        };
        for guard in &routine.guards {
            self.check(guard, message)?;
        }
        Ok(())
    }

    fn check(&self, guard: &Guard, message: &DynamicMessage) -> Result<(), DynamicValidationError> {
        let access = guard.access();
        let fd = field_descriptor(message, access)?;

        match guard {
            Guard::Presence { .. } => {
                if !message.has_field(&fd) {
                    return Err(ValidationError::presence(access.accessor.clone()).into());
                }
                Ok(())
            }
            Guard::Delegate { .. } => {
                if !message.has_field(&fd) {
                    return Ok(());
                }
                match message.get_field(&fd).as_message() {
                    Some(nested) => self.validate(nested),
                    None => Ok(()),
                }
            }
            Guard::Length {
                relation, bound, ..
            } => {
                if access.optional && !message.has_field(&fd) {
                    return Ok(());
                }
                let value = message.get_field(&fd);
                let len = length(&value).ok_or_else(|| malformed(access, bound))?;
                let bound = parse_int(bound).ok_or_else(|| malformed(access, bound))?;
                if relation.holds(&(len as i128), &bound) {
                    Ok(())
                } else {
                    Err(violation(guard))
                }
            }
            Guard::Value {
                relation,
                alternatives,
                ..
            } => {
                if access.optional && !message.has_field(&fd) {
                    return Ok(());
                }
                let value = message.get_field(&fd);
                let mut results = alternatives.iter().map(|literal| {
                    compare(&value, *relation, literal).ok_or_else(|| malformed(access, literal))
                });
                let passed = match relation {
                    Relation::Equal => results.try_fold(false, |any, r| r.map(|ok| any || ok))?,
                    _ => results.try_fold(true, |all, r| r.map(|ok| all && ok))?,
                };
                if passed { Ok(()) } else { Err(violation(guard)) }
            }
        }
    }
}

fn field_descriptor(
    message: &DynamicMessage,
    access: &FieldAccess,
) -> Result<FieldDescriptor, DynamicValidationError> {
    let desc = message.descriptor();
    desc.get_field_by_name(&access.field)
        .ok_or_else(|| DynamicValidationError::UnknownField {
            message: desc.full_name().to_string(),
            field: access.field.clone(),
        })
}

fn violation(guard: &Guard) -> DynamicValidationError {
    let message = guard.error_message().unwrap_or_default();
    ValidationError::constraint(guard.access().accessor.clone(), message).into()
}

fn malformed(access: &FieldAccess, literal: &str) -> DynamicValidationError {
    DynamicValidationError::MalformedLiteral {
        accessor: access.accessor.clone(),
        literal: literal.to_string(),
    }
}

fn length(value: &Value) -> Option<usize> {
    match value {
        Value::List(items) => Some(items.len()),
        Value::Map(entries) => Some(entries.len()),
        Value::String(text) => Some(text.len()),
        Value::Bytes(bytes) => Some(bytes.len()),
        _ => None,
    }
}

/// Evaluate `value <relation> literal`, or `None` if the literal does not fit
/// the value's type.
fn compare(value: &Value, relation: Relation, literal: &str) -> Option<bool> {
    let holds = match value {
        Value::Bool(v) => relation.holds(v, &literal.trim().parse::<bool>().ok()?),
        Value::I32(v) | Value::EnumNumber(v) => {
            relation.holds(&i128::from(*v), &parse_int(literal)?)
        }
        Value::I64(v) => relation.holds(&i128::from(*v), &parse_int(literal)?),
        Value::U32(v) => relation.holds(&i128::from(*v), &parse_int(literal)?),
        Value::U64(v) => relation.holds(&i128::from(*v), &parse_int(literal)?),
        Value::F32(v) => relation.holds(v, &number(literal).parse::<f32>().ok()?),
        Value::F64(v) => relation.holds(v, &number(literal).parse::<f64>().ok()?),
        _ => return None,
    };
    Some(holds)
}

fn parse_int(literal: &str) -> Option<i128> {
    number(literal).parse().ok()
}

/// Strip digit separators, which Rust literals allow.
fn number(literal: &str) -> String {
    literal.trim().replace('_', "")
}
