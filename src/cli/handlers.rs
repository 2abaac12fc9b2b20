//! Command handlers
//!
//! Each handler runs one command end to end and returns the process exit
//! code. Errors are reported on stderr; the single success status line the
//! tool promises goes to stdout.

use anyhow::Result;
use tracing::{debug, error, info};

use crate::cli::commands::GenerateArgs;
use crate::config::CoverageConfig;
use crate::extract::extract_supported_instructions;
use crate::fs::{FileSystem, RealFileSystem};
use crate::report::render_coverage;

/// Handles the `generate` command. Returns the process exit code.
pub fn handle_generate(args: &GenerateArgs) -> i32 {
    let config = match CoverageConfig::from_env() {
        Ok(c) => c.with_overrides(args.input.clone(), args.output.clone()),
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("Error: {}", e);
        return 1;
    }

    match run_pipeline(&config, &RealFileSystem) {
        Ok(count) => {
            println!(
                "Generated {} with {} supported instructions",
                config.output_path.display(),
                count
            );
            0
        }
        Err(e) => {
            error!("Coverage generation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

/// Runs read → extract → render → write against the given file system and
/// returns the number of supported instructions.
///
/// A source file without a recognizable `rewrite_funcs[]` table is not an
/// error here; the extractor warns and the report states zero instructions.
/// Only real I/O failures propagate.
pub fn run_pipeline<F: FileSystem>(config: &CoverageConfig, fs: &F) -> Result<usize> {
    debug!(input = %config.input_path.display(), "reading rewrite source");
    let source = fs.read_to_string(&config.input_path)?;

    let supported = extract_supported_instructions(&source);
    info!(count = supported.len(), "extracted supported instructions");

    let report = render_coverage(&supported);

    if let Some(parent) = config.output_path.parent() {
        if !parent.as_os_str().is_empty() && !fs.exists(parent) {
            fs.create_dir_all(parent)?;
        }
    }
    fs.write(&config.output_path, &report)?;
    debug!(output = %config.output_path.display(), "report written");

    Ok(supported.len())
}
