//! Convert `prost-reflect` file descriptors into the core schema tree.

use prost_reflect::{
    Cardinality, ExtensionDescriptor, FieldDescriptor, FileDescriptor, Kind, MessageDescriptor,
};
use tracing::warn;
use validator_core::{FieldKind, FieldSchema, FileSchema, Label, MessageSchema, Syntax};

use crate::extract_constraint;

/// Build the [`FileSchema`] for `file`, reading constraints through
/// `extension`.
pub fn load_file_schema(
    file: &FileDescriptor,
    extension: Option<&ExtensionDescriptor>,
) -> FileSchema {
    let syntax = match file.file_descriptor_proto().syntax() {
        "proto3" => Syntax::Proto3,
        "" | "proto2" => Syntax::Proto2,
        _ => Syntax::Other,
    };
    let messages = file
        .messages()
        .map(|message| load_message(&message, extension))
        .collect();
    FileSchema::new(file.name(), file.package_name(), syntax).with_messages(messages)
}

fn load_message(
    desc: &MessageDescriptor,
    extension: Option<&ExtensionDescriptor>,
) -> MessageSchema {
    let fields = desc
        .fields()
        .map(|field| load_field(&field, extension))
        .collect();
    // prost emits no struct for map entries.
    let nested = desc
        .child_messages()
        .filter(|child| !child.is_map_entry())
        .map(|child| load_message(&child, extension))
        .collect();
    MessageSchema::new(desc.name(), desc.full_name())
        .with_fields(fields)
        .with_nested(nested)
}

fn load_field(fd: &FieldDescriptor, extension: Option<&ExtensionDescriptor>) -> FieldSchema {
    let label = match fd.cardinality() {
        Cardinality::Repeated => Label::Repeated,
        _ => Label::Singular,
    };
    let proto3_optional = fd.field_descriptor_proto().proto3_optional();
    let field = FieldSchema::new(fd.name(), field_kind(fd), label)
        .with_map(fd.is_map())
        .with_proto3_optional(proto3_optional);

    let Some(constraint) = extract_constraint(fd, extension) else {
        return field;
    };
    // Members of a real oneof live inside a prost enum, not on the struct.
    if fd.containing_oneof().is_some() && !proto3_optional {
        warn!(
            field = fd.full_name(),
            "constraints on oneof members are not supported; ignoring"
        );
        return field;
    }
    field.with_constraint(constraint)
}

fn field_kind(fd: &FieldDescriptor) -> FieldKind {
    match fd.kind() {
        Kind::Double => FieldKind::Double,
        Kind::Float => FieldKind::Float,
        Kind::Int32 => FieldKind::Int32,
        Kind::Int64 => FieldKind::Int64,
        Kind::Uint32 => FieldKind::Uint32,
        Kind::Uint64 => FieldKind::Uint64,
        Kind::Sint32 => FieldKind::Sint32,
        Kind::Sint64 => FieldKind::Sint64,
        Kind::Fixed32 => FieldKind::Fixed32,
        Kind::Fixed64 => FieldKind::Fixed64,
        Kind::Sfixed32 => FieldKind::Sfixed32,
        Kind::Sfixed64 => FieldKind::Sfixed64,
        Kind::Bool => FieldKind::Bool,
        Kind::String => FieldKind::String,
        Kind::Bytes => FieldKind::Bytes,
        Kind::Enum(desc) => FieldKind::Enum(desc.full_name().to_string()),
        Kind::Message(desc) => FieldKind::Message(desc.full_name().to_string()),
    }
}
