//! Rust source renderer for the guard IR.

use std::fmt::{Error, Result, Write as _};

use crate::{
    FileSchema, GeneratedFile, GeneratorOptions, Guard, NumericKind, Relation, ValidationRoutine,
    generate_file,
};

const INDENT: &str = "    ";
const RETURN_ERR: &str = "return ::core::result::Result::Err";

/// Generate and render validation code for one schema file.
///
/// Returns `Ok(None)` when the file is skipped (unsupported syntax).
pub fn generate_source(
    file: &FileSchema,
    options: &GeneratorOptions,
) -> std::result::Result<Option<String>, Error> {
    generate_file(file)
        .map(|generated| render_file(&generated, options))
        .transpose()
}

/// Render one `impl Validate` block per routine.
pub fn render_file(
    file: &GeneratedFile,
    options: &GeneratorOptions,
) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(out, "// @generated by protoc-gen-validator. DO NOT EDIT.")?;
    writeln!(out, "// source: {}", file.source)?;

    for routine in &file.routines {
        writeln!(out)?;
        render_routine(routine, options, &mut out)?;
    }

    Ok(out)
}

fn render_routine(
    routine: &ValidationRoutine,
    options: &GeneratorOptions,
    out: &mut String,
) -> Result {
    let runtime = &options.runtime;
    writeln!(out, "// {}", routine.message)?;
    writeln!(out, "impl {runtime}::Validate for {} {{", routine.type_path)?;
    writeln!(
        out,
        "{INDENT}fn validate(&self) -> ::core::result::Result<(), {runtime}::ValidationError> {{"
    )?;

    let pad = INDENT.repeat(2);
    for guard in &routine.guards {
        render_guard(guard, runtime, 2, out)?;
        writeln!(out)?;
    }
    writeln!(out, "{pad}::core::result::Result::Ok(())")?;

    writeln!(out, "{INDENT}}}")?;
    writeln!(out, "}}")?;
    Ok(())
}

fn render_guard(guard: &Guard, runtime: &str, indent: usize, out: &mut String) -> Result {
    let pad = INDENT.repeat(indent);
    let access = guard.access();

    match guard {
        Guard::Presence { .. } => {
            writeln!(out, "{pad}if {}.is_none() {{", access.accessor)?;
            writeln!(
                out,
                "{pad}{INDENT}{RETURN_ERR}({runtime}::ValidationError::presence({:?}));",
                access.accessor
            )?;
            writeln!(out, "{pad}}}")?;
        }
        Guard::Delegate { .. } => {
            writeln!(
                out,
                "{pad}if let ::core::option::Option::Some(value) = {}.as_ref() {{",
                access.accessor
            )?;
            writeln!(out, "{pad}{INDENT}{runtime}::Validate::validate(value)?;")?;
            writeln!(out, "{pad}}}")?;
        }
        Guard::Length { .. } | Guard::Value { .. } => {
            if access.optional {
                writeln!(
                    out,
                    "{pad}if let ::core::option::Option::Some(value) = {}.as_ref() {{",
                    access.accessor
                )?;
                render_check(guard, runtime, indent + 1, out)?;
                writeln!(out, "{pad}}}")?;
            } else {
                render_check(guard, runtime, indent, out)?;
            }
        }
    }
    Ok(())
}

fn render_check(guard: &Guard, runtime: &str, indent: usize, out: &mut String) -> Result {
    let pad = INDENT.repeat(indent);
    let access = guard.access();
    let condition = match guard {
        Guard::Length {
            relation, bound, ..
        } => {
            let subject = if access.optional {
                "value".to_string()
            } else {
                access.accessor.clone()
            };
            format!("{subject}.len() {relation} {bound}")
        }
        Guard::Value {
            relation,
            alternatives,
            kind,
            ..
        } => {
            let subject = if access.optional {
                "*value".to_string()
            } else {
                access.accessor.clone()
            };
            value_condition(&subject, *relation, alternatives, *kind)
        }
        Guard::Presence { .. } | Guard::Delegate { .. } => return Err(Error),
    };
    let message = guard.error_message().ok_or(Error)?;

    writeln!(out, "{pad}if !({condition}) {{")?;
    writeln!(
        out,
        "{pad}{INDENT}{RETURN_ERR}({runtime}::ValidationError::constraint({:?}, {:?}));",
        access.accessor, message
    )?;
    writeln!(out, "{pad}}}")?;
    Ok(())
}

/// `subject == a || subject == b` for equal, `subject != a && subject != b`
/// for not-equal, a single comparison otherwise.
fn value_condition(
    subject: &str,
    relation: Relation,
    alternatives: &[String],
    kind: NumericKind,
) -> String {
    let joiner = match relation {
        Relation::NotEqual => " && ",
        _ => " || ",
    };
    alternatives
        .iter()
        .map(|literal| format!("{subject} {relation} {}", typed_literal(literal, kind)))
        .collect::<Vec<_>>()
        .join(joiner)
}

/// Give plain numeric literals a float suffix so that bounds such as `1`
/// compare against `f32`/`f64` fields. Anything else is spliced verbatim.
fn typed_literal(literal: &str, kind: NumericKind) -> String {
    let suffix = match kind {
        NumericKind::F32 => "f32",
        NumericKind::F64 => "f64",
        NumericKind::Integer | NumericKind::Bool => return literal.to_string(),
    };
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    let plain = digits.starts_with(|c: char| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '_' | 'e' | 'E' | '+' | '-'));
    if !plain {
        return literal.to_string();
    }
    if literal.ends_with('.') {
        format!("{literal}0_{suffix}")
    } else {
        format!("{literal}_{suffix}")
    }
}
