//! Protobuf-library-independent core of `protoc-gen-validator`.
//!
//! The crate turns a resolved [`FileSchema`] into guard IR
//! ([`GeneratedFile`] / [`ValidationRoutine`] / [`Guard`]) and renders that
//! IR as Rust source implementing `validator_runtime::Validate` for the
//! structs `prost-build` generates.

mod classify;
mod constraint;
mod emit;
mod error;
mod generate;
mod guard;
mod naming;
mod options;
mod render;
mod schema;
mod type_index;

pub use classify::{FieldClass, classify};
pub use constraint::{FieldConstraint, NIL_LITERAL, Relation, parse_alternatives};
pub use emit::emit_field;
pub use error::OptionsError;
pub use generate::{GeneratedFile, ValidationRoutine, generate_file, generate_message};
pub use guard::{FieldAccess, Guard, NumericKind};
pub use naming::{field_ident, module_ident, type_ident};
pub use options::{DEFAULT_EXTENSION, DEFAULT_RUNTIME, DEFAULT_SUFFIX, GeneratorOptions};
pub use render::{generate_source, render_file};
pub use schema::{FieldKind, FieldSchema, FileSchema, Label, MessageSchema, Syntax};
pub use type_index::ConstrainedTypes;
