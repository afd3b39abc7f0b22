use tracing::debug;

use crate::{
    ConstrainedTypes, FileSchema, Guard, MessageSchema, Syntax, emit_field,
    naming::{module_ident, type_ident},
};

/// Validation routine for one constrained message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRoutine {
    /// Full protobuf name, e.g. `shop.Order.Item`.
    pub message: String,
    /// Rust path of the prost struct relative to the package module, e.g.
    /// `order::Item`.
    pub type_path: String,
    /// Guards in field-declaration order.
    pub guards: Vec<Guard>,
}

/// Guard IR for one schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub source: String,
    pub package: String,
    /// Routines in traversal order: each type before its nested types.
    pub routines: Vec<ValidationRoutine>,
}

impl GeneratedFile {
    pub fn routine(&self, message: &str) -> Option<&ValidationRoutine> {
        self.routines.iter().find(|r| r.message == message)
    }
}

/// Build the guard IR for every constrained message in `file`.
///
/// Returns `None` for files whose syntax is not proto3; those are skipped
/// without error.
pub fn generate_file(file: &FileSchema) -> Option<GeneratedFile> {
    if file.syntax != Syntax::Proto3 {
        debug!(file = %file.name, syntax = ?file.syntax, "unsupported syntax; skipping file");
        return None;
    }

    let constrained = ConstrainedTypes::build(&file.messages);
    let mut routines = Vec::new();
    for message in &file.messages {
        generate_message(message, &[], &constrained, &mut routines);
    }

    Some(GeneratedFile {
        source: file.name.clone(),
        package: file.package.clone(),
        routines,
    })
}

/// Emit the routine for `message` (if it has a directly constrained field)
/// and then recurse into its nested types.
///
/// `modules` is the chain of prost modules enclosing `message`.
pub fn generate_message(
    message: &MessageSchema,
    modules: &[String],
    constrained: &ConstrainedTypes,
    out: &mut Vec<ValidationRoutine>,
) {
    if message.has_constrained_field() {
        let guards = message
            .fields
            .iter()
            .flat_map(|field| emit_field(field, constrained))
            .collect();
        out.push(ValidationRoutine {
            message: message.full_name.clone(),
            type_path: type_path(modules, &message.name),
            guards,
        });
    } else {
        debug!(message = %message.full_name, "no constrained fields; no routine generated");
    }

    if message.nested.is_empty() {
        return;
    }
    let mut nested_modules = modules.to_vec();
    nested_modules.push(module_ident(&message.name));
    for nested in &message.nested {
        generate_message(nested, &nested_modules, constrained, out);
    }
}

fn type_path(modules: &[String], name: &str) -> String {
    let mut segments = modules.to_vec();
    segments.push(type_ident(name));
    segments.join("::")
}
