use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use prost::Message;
use validator_protobuf::run_plugin;

/// protoc plugin mode: request on stdin, response on stdout.
pub fn run() -> Result<()> {
    let mut request = Vec::new();
    io::stdin()
        .read_to_end(&mut request)
        .context("failed to read CodeGeneratorRequest from stdin")?;

    let response = run_plugin(&request)?;
    tracing::debug!(
        files = response.file.len(),
        error = response.error.is_some(),
        "writing CodeGeneratorResponse"
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(&response.encode_to_vec())?;
    stdout.flush()?;
    Ok(())
}
