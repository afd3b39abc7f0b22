//! Rust identifiers for schema names, matching the conventions of
//! `prost-build` so emitted code lines up with the generated structs.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Keywords that prost escapes as raw identifiers.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn",
    "else", "enum", "false", "final", "fn", "for", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "static", "struct",
    "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where",
    "while", "yield",
];

/// Keywords that cannot be raw identifiers; prost appends `_`.
const SUFFIXED_KEYWORDS: &[&str] = &["crate", "extern", "self", "super"];

/// Struct field name for a schema field, e.g. `userID` -> `user_id`,
/// `type` -> `r#type`.
pub fn field_ident(name: &str) -> String {
    escape_snake(name.to_snake_case())
}

/// Module name prost uses for the nested types of a message, e.g.
/// `OrderLine` -> `order_line`.
pub fn module_ident(message_name: &str) -> String {
    escape_snake(message_name.to_snake_case())
}

/// Struct name for a message, e.g. `order_line` -> `OrderLine`.
pub fn type_ident(message_name: &str) -> String {
    let ident = message_name.to_upper_camel_case();
    if ident == "Self" {
        return format!("{ident}_");
    }
    ident
}

fn escape_snake(ident: String) -> String {
    if RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else if SUFFIXED_KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else {
        ident
    }
}
