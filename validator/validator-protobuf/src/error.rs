//! Error types for the plugin driver and the dynamic evaluator.

use validator_core::OptionsError;
use validator_runtime::ValidationError;

/// Error returned while turning a plugin request into generated files.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// Request bytes on stdin are not a `CodeGeneratorRequest`.
    #[error("failed to decode CodeGeneratorRequest: {0}")]
    DecodeRequest(#[from] prost::DecodeError),

    /// The schema files in the request do not form a valid descriptor pool.
    #[error("failed to build descriptor pool: {0}")]
    DescriptorPool(#[from] prost_reflect::DescriptorError),

    #[error("file to generate '{0}' is not part of the descriptor set")]
    FileNotFound(String),

    #[error("invalid plugin parameter: {0}")]
    Options(#[from] OptionsError),

    #[error("failed to render validators for '{file}'")]
    Render {
        file: String,
        #[source]
        source: std::fmt::Error,
    },
}

/// Error returned by [`DynamicValidator::validate`](crate::DynamicValidator::validate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DynamicValidationError {
    /// The message violates a constraint; the text matches the generated code.
    #[error(transparent)]
    Violation(#[from] ValidationError),

    /// A bound cannot be compared with the field's runtime value.
    #[error("cannot compare {accessor} with literal '{literal}'")]
    MalformedLiteral { accessor: String, literal: String },

    #[error("message '{message}' has no field '{field}'")]
    UnknownField { message: String, field: String },
}
