//! protoc plugin protocol: `CodeGeneratorRequest` in, `CodeGeneratorResponse`
//! out.

use prost::Message;
use prost_reflect::{DescriptorError, DescriptorPool};
use prost_types::compiler::{
    CodeGeneratorResponse,
    code_generator_response::{Feature, File},
};
use tracing::{debug, info, warn};
use validator_core::{GeneratorOptions, generate_file, render_file};

use crate::{PluginError, constraint_extension, load_file_schema};

/// Subset of `google.protobuf.compiler.CodeGeneratorRequest`.
///
/// `proto_file` entries stay as raw bytes: decoding them through
/// `prost_types::FileDescriptorProto` would drop the extension values stored
/// in field options.
#[derive(Clone, PartialEq, Message)]
struct PluginRequest {
    #[prost(string, repeated, tag = "1")]
    file_to_generate: Vec<String>,
    #[prost(string, optional, tag = "2")]
    parameter: Option<String>,
    #[prost(bytes = "vec", repeated, tag = "15")]
    proto_file: Vec<Vec<u8>>,
}

/// `google.protobuf.FileDescriptorSet` over already-encoded files.
#[derive(Clone, PartialEq, Message)]
struct RawFileDescriptorSet {
    #[prost(bytes = "vec", repeated, tag = "1")]
    file: Vec<Vec<u8>>,
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Output path, e.g. `shop/order.validate.rs`.
    pub name: String,
    /// Schema file it was generated from.
    pub source: String,
    /// Number of validation routines in `content`.
    pub routines: usize,
    pub content: String,
}

/// Handle one plugin invocation.
///
/// Only undecodable request bytes are returned as `Err`; every other failure
/// is reported through [`CodeGeneratorResponse::error`] as protoc expects.
pub fn run_plugin(request: &[u8]) -> Result<CodeGeneratorResponse, PluginError> {
    let request = PluginRequest::decode(request)?;
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };

    match generate_response_files(request) {
        Ok(files) => response.file = files,
        Err(err) => {
            warn!(error = %err, "code generation failed");
            response.error = Some(err.to_string());
        }
    }
    Ok(response)
}

fn generate_response_files(request: PluginRequest) -> Result<Vec<File>, PluginError> {
    let options = GeneratorOptions::parse(request.parameter.as_deref().unwrap_or_default())?;
    let pool = descriptor_pool_from_files(request.proto_file)?;
    let sources = generate_files(&pool, &request.file_to_generate, &options)?;
    Ok(sources
        .into_iter()
        .map(|source| File {
            name: Some(source.name),
            content: Some(source.content),
            ..Default::default()
        })
        .collect())
}

/// Build a descriptor pool from encoded `FileDescriptorProto`s, keeping
/// option extensions intact.
pub fn descriptor_pool_from_files(files: Vec<Vec<u8>>) -> Result<DescriptorPool, DescriptorError> {
    let set = RawFileDescriptorSet { file: files }.encode_to_vec();
    DescriptorPool::decode(set.as_slice())
}

/// Generate validators for each named file in `pool`.
///
/// Files that are not proto3 produce no output.
pub fn generate_files(
    pool: &DescriptorPool,
    file_names: &[String],
    options: &GeneratorOptions,
) -> Result<Vec<GeneratedSource>, PluginError> {
    let extension = constraint_extension(pool, &options.extension);
    if extension.is_none() {
        debug!(
            extension = %options.extension,
            "constraint extension not found; no field is constrained"
        );
    }

    let mut sources = Vec::with_capacity(file_names.len());
    for name in file_names {
        let file = pool
            .get_file_by_name(name)
            .ok_or_else(|| PluginError::FileNotFound(name.clone()))?;
        let schema = load_file_schema(&file, extension.as_ref());
        let Some(generated) = generate_file(&schema) else {
            continue;
        };
        let content = render_file(&generated, options).map_err(|source| PluginError::Render {
            file: name.clone(),
            source,
        })?;
        info!(file = %name, routines = generated.routines.len(), "generated validators");
        sources.push(GeneratedSource {
            name: options.output_name(name),
            source: name.clone(),
            routines: generated.routines.len(),
            content,
        });
    }
    Ok(sources)
}
