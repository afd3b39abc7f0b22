use std::str::FromStr;

use crate::OptionsError;

pub const DEFAULT_RUNTIME: &str = "::validator_runtime";
pub const DEFAULT_SUFFIX: &str = ".validate.rs";
pub const DEFAULT_EXTENSION: &str = "validator.field";

/// Generator configuration, parsed from the protoc parameter string
/// (`--validator_opt=runtime=crate::rt,suffix=.v.rs`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Path of the crate providing `Validate` and `ValidationError`.
    pub runtime: String,
    /// Appended to the schema file stem to name the output file.
    pub suffix: String,
    /// Full name of the `FieldOptions` extension carrying constraints.
    pub extension: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Parse a comma-separated `key=value` list. An empty string yields the
    /// defaults.
    pub fn parse(parameter: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();
        for entry in parameter.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| OptionsError::Malformed {
                    entry: entry.to_string(),
                })?;
            let (key, value) = (key.trim(), value.trim());
            if value.is_empty() {
                return Err(OptionsError::EmptyValue {
                    key: key.to_string(),
                });
            }
            let slot = match key {
                "runtime" => &mut options.runtime,
                "suffix" => &mut options.suffix,
                "extension" => &mut options.extension,
                _ => {
                    return Err(OptionsError::UnknownKey {
                        key: key.to_string(),
                    });
                }
            };
            *slot = value.to_string();
        }
        Ok(options)
    }

    /// Output file name for a schema file, e.g. `shop/order.proto` ->
    /// `shop/order.validate.rs`.
    pub fn output_name(&self, schema_file: &str) -> String {
        let stem = schema_file.strip_suffix(".proto").unwrap_or(schema_file);
        format!("{stem}{}", self.suffix)
    }
}

impl FromStr for GeneratorOptions {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
