mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{plugin, render::RenderArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "protoc-gen-validator",
    about = "Generate Validate impls for prost messages",
    long_about = "Without a subcommand, runs as a protoc plugin: reads a CodeGeneratorRequest \
                  on stdin and writes a CodeGeneratorResponse to stdout."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render validators from a serialized FileDescriptorSet
    Render(RenderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the plugin response.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Some(Commands::Render(args)) => args.run(),
        None => plugin::run(),
    }
}
