//! Error types for generator configuration.

/// Error returned when the plugin parameter string cannot be parsed into
/// [`GeneratorOptions`](crate::GeneratorOptions).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    /// An entry is not of the form `key=value`.
    #[error("invalid option '{entry}': expected key=value")]
    Malformed { entry: String },

    #[error("unknown option '{key}'")]
    UnknownKey { key: String },

    #[error("option '{key}' must not be empty")]
    EmptyValue { key: String },
}
