//! Protobuf side of `protoc-gen-validator`.
//!
//! This crate reads constraint annotations from `prost-reflect` descriptors
//! ([`extract_constraint`]), converts descriptor files into the
//! [`validator_core::FileSchema`] tree ([`load_file_schema`]), drives the
//! protoc plugin protocol ([`run_plugin`]) and can evaluate the generated
//! guards against [`prost_reflect::DynamicMessage`] values
//! ([`DynamicValidator`]).

mod dynamic;
mod error;
mod extract;
mod plugin;
mod schema;

pub use dynamic::DynamicValidator;
pub use error::{DynamicValidationError, PluginError};
pub use extract::{constraint_extension, extract_constraint};
pub use plugin::{GeneratedSource, descriptor_pool_from_files, generate_files, run_plugin};
pub use schema::load_file_schema;
