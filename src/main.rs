use rwcov::cli::commands::{CliArgs, Commands, GenerateArgs};
use rwcov::cli::handlers::handle_generate;
use rwcov::util::logging::{init_logging, parse_level, LoggingConfig};
use rwcov::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("rwcov v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Some(Commands::Generate(generate_args)) => handle_generate(generate_args),
        None => handle_generate(&GenerateArgs::default()),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("RWCOV_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    };

    init_logging(LoggingConfig::with_level(level));
}
