use crate::{FieldKind, FieldSchema};

/// Shape of a field, selecting the emission rule for its guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Singular embedded message: presence check and delegation.
    Message,
    /// Repeated field of any element kind, string or bytes: validates on length.
    RepeatedOrString,
    /// Singular numeric, bool or enum: validates on value.
    Scalar,
}

pub fn classify(field: &FieldSchema) -> FieldClass {
    if field.is_repeated() {
        return FieldClass::RepeatedOrString;
    }
    match field.kind {
        FieldKind::Message(_) => FieldClass::Message,
        FieldKind::String | FieldKind::Bytes => FieldClass::RepeatedOrString,
        _ => FieldClass::Scalar,
    }
}
