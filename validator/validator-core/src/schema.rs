//! Resolved schema tree consumed by the generator.
//!
//! The tree is built once per schema file by a descriptor adapter (see
//! `validator-protobuf`) and is read-only during generation.

use crate::FieldConstraint;

/// Schema syntax variant of a file. Only [`Syntax::Proto3`] is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Proto2,
    Proto3,
    Other,
}

/// Declared kind of a field, independent of its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
    /// Enum field; holds the full protobuf name of the enum type.
    Enum(String),
    /// Embedded message field; holds the full protobuf name of the message type.
    Message(String),
}

impl FieldKind {
    pub fn is_message(&self) -> bool {
        matches!(self, FieldKind::Message(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, FieldKind::String)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, FieldKind::Double | FieldKind::Float)
    }

    pub fn message_type(&self) -> Option<&str> {
        match self {
            FieldKind::Message(name) => Some(name),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Double => "double",
            FieldKind::Float => "float",
            FieldKind::Int32 => "int32",
            FieldKind::Int64 => "int64",
            FieldKind::Uint32 => "uint32",
            FieldKind::Uint64 => "uint64",
            FieldKind::Sint32 => "sint32",
            FieldKind::Sint64 => "sint64",
            FieldKind::Fixed32 => "fixed32",
            FieldKind::Fixed64 => "fixed64",
            FieldKind::Sfixed32 => "sfixed32",
            FieldKind::Sfixed64 => "sfixed64",
            FieldKind::Bool => "bool",
            FieldKind::String => "string",
            FieldKind::Bytes => "bytes",
            FieldKind::Enum(_) => "enum",
            FieldKind::Message(_) => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Label {
    #[default]
    Singular,
    Repeated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub kind: FieldKind,
    pub label: Label,
    /// Map fields are repeated entry messages on the wire and a `HashMap` in
    /// prost; they validate on length like any repeated field.
    pub map: bool,
    /// proto3 `optional` field, generated by prost as `Option<T>`.
    pub proto3_optional: bool,
    pub constraint: Option<FieldConstraint>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, kind: FieldKind, label: Label) -> Self {
        Self {
            name: name.into(),
            kind,
            label,
            map: false,
            proto3_optional: false,
            constraint: None,
        }
    }

    pub fn singular(name: impl Into<String>, kind: FieldKind) -> Self {
        Self::new(name, kind, Label::Singular)
    }

    pub fn repeated(name: impl Into<String>, kind: FieldKind) -> Self {
        Self::new(name, kind, Label::Repeated)
    }

    pub fn with_constraint(mut self, constraint: FieldConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    pub fn with_map(mut self, map: bool) -> Self {
        self.map = map;
        self
    }

    pub fn with_proto3_optional(mut self, proto3_optional: bool) -> Self {
        self.proto3_optional = proto3_optional;
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.label == Label::Repeated
    }

    pub fn is_constrained(&self) -> bool {
        self.constraint.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageSchema {
    pub name: String,
    /// Full protobuf name, e.g. `shop.Order.Item`.
    pub full_name: String,
    pub fields: Vec<FieldSchema>,
    pub nested: Vec<MessageSchema>,
}

impl MessageSchema {
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            fields: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldSchema>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_nested(mut self, nested: Vec<MessageSchema>) -> Self {
        self.nested = nested;
        self
    }

    /// Whether at least one direct field carries a constraint.
    pub fn has_constrained_field(&self) -> bool {
        self.fields.iter().any(FieldSchema::is_constrained)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileSchema {
    /// Path of the schema file as known to the compiler, e.g. `shop/order.proto`.
    pub name: String,
    pub package: String,
    pub syntax: Syntax,
    pub messages: Vec<MessageSchema>,
}

impl FileSchema {
    pub fn new(name: impl Into<String>, package: impl Into<String>, syntax: Syntax) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            syntax,
            messages: Vec::new(),
        }
    }

    pub fn with_messages(mut self, messages: Vec<MessageSchema>) -> Self {
        self.messages = messages;
        self
    }
}
