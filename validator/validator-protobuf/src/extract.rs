//! Read [`FieldConstraint`]s from field options.

use prost_reflect::{DescriptorPool, DynamicMessage, ExtensionDescriptor, FieldDescriptor};
use tracing::warn;
use validator_core::FieldConstraint;

const FIELD_OPTIONS: &str = "google.protobuf.FieldOptions";

/// Look up the constraint extension by full name (e.g. `validator.field`).
///
/// Returns `None` when the schema files never import it, or when it extends
/// something other than `google.protobuf.FieldOptions`.
pub fn constraint_extension(pool: &DescriptorPool, name: &str) -> Option<ExtensionDescriptor> {
    let extension = pool.get_extension_by_name(name)?;
    if extension.containing_message().full_name() != FIELD_OPTIONS {
        warn!(
            extension = name,
            extendee = extension.containing_message().full_name(),
            "constraint extension does not extend {FIELD_OPTIONS}; ignoring it"
        );
        return None;
    }
    Some(extension)
}

/// Decode the constraint attached to `field`, if any.
///
/// Empty bounds are treated as absent. Literals are returned verbatim.
pub fn extract_constraint(
    field: &FieldDescriptor,
    extension: Option<&ExtensionDescriptor>,
) -> Option<FieldConstraint> {
    let extension = extension?;
    let options = field.options();
    if !options.has_extension(extension) {
        return None;
    }
    let value = options.get_extension(extension);
    let record = value.as_message()?;

    Some(FieldConstraint {
        less_than: literal(record, "lt"),
        greater_than: literal(record, "gt"),
        equal: literal(record, "eq"),
        not_equal: literal(record, "neq"),
    })
}

fn literal(record: &DynamicMessage, name: &str) -> Option<String> {
    let value = record.get_field_by_name(name)?;
    value
        .as_str()
        .filter(|literal| !literal.is_empty())
        .map(str::to_string)
}
