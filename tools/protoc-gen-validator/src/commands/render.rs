use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use prost_reflect::DescriptorPool;
use validator_core::GeneratorOptions;
use validator_protobuf::generate_files;

#[derive(Args)]
pub struct RenderArgs {
    /// FileDescriptorSet written by `protoc --include_imports --descriptor_set_out`
    descriptor_set: PathBuf,

    /// Schema file to render (repeatable; every file in the set if omitted)
    #[arg(short, long = "file")]
    files: Vec<String>,

    /// Output directory (stdout if not specified)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Generator parameters, as passed to protoc with --validator_opt
    #[arg(short, long, default_value = "")]
    param: String,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let options = GeneratorOptions::parse(&self.param)?;
        let bytes = fs::read(&self.descriptor_set)
            .with_context(|| format!("failed to read {}", self.descriptor_set.display()))?;
        let pool = DescriptorPool::decode(bytes.as_slice()).with_context(|| {
            format!("{} is not a FileDescriptorSet", self.descriptor_set.display())
        })?;

        // Without --file, only files with at least one routine are written.
        let explicit = !self.files.is_empty();
        let files = if explicit {
            self.files
        } else {
            pool.files().map(|file| file.name().to_string()).collect()
        };

        let mut rendered = 0;
        for source in generate_files(&pool, &files, &options)? {
            if !explicit && source.routines == 0 {
                continue;
            }
            match &self.out_dir {
                Some(dir) => {
                    let path = dir.join(&source.name);
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&path, &source.content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(
                        path = %path.display(),
                        routines = source.routines,
                        "wrote validators"
                    );
                }
                None => print!("{}", source.content),
            }
            rendered += 1;
        }
        if rendered == 0 {
            tracing::warn!("nothing rendered; no proto3 file with constrained fields");
        }
        Ok(())
    }
}
