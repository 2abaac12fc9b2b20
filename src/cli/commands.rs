use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Coverage report generator for the AVX-512 instruction rewrite table
#[derive(Parser, Debug)]
#[command(
    name = "rwcov",
    about = "Coverage report generator for the AVX-512 instruction rewrite table",
    version,
    long_about = "rwcov scans the rewrite.c dispatch table of the instrumentation engine, \
                  collects every instruction with a non-placeholder rewrite handler, and \
                  writes a markdown coverage report."
)]
pub struct CliArgs {
    /// Omitting the subcommand runs `generate` with default paths, so the
    /// tool still works as a zero-argument executable.
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug output")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate the coverage report",
        long_about = "Scans the rewrite table source and writes the markdown coverage \
                      report.\n\n\
                      Examples:\n  \
                      rwcov generate\n  \
                      rwcov generate --input core/arch/rewrite.c\n  \
                      rwcov generate --output docs/coverage.md"
    )]
    Generate(GenerateArgs),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[arg(
        short = 'i',
        long,
        value_name = "PATH",
        help = "Rewrite source file to scan (defaults to core/arch/rewrite.c next to the binary)"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "PATH",
        help = "Report destination (defaults to docs/coverage.md next to the binary)"
    )]
    pub output: Option<PathBuf>,
}
