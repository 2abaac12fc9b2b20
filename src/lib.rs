//! rwcov - coverage report generator for the AVX-512 rewrite table
//!
//! This library scans the C source file that implements the instruction
//! rewrite dispatch for the instrumentation engine, extracts the list of
//! instruction mnemonics with a real (non-placeholder) rewrite handler,
//! and renders a markdown report summarizing coverage.
//!
//! # Core Concepts
//!
//! - **Rewrite table**: the `rewrite_funcs[]` array in `rewrite.c` mapping
//!   each `OP_AVX512_*` mnemonic to its `rw_func_*` handler
//! - **Placeholder handler**: `rw_func_empty`, marking an instruction that
//!   is declared but not yet supported
//! - **Coverage report**: the generated `coverage.md` listing every
//!   supported instruction with a count summary
//!
//! # Example Usage
//!
//! ```
//! use rwcov::{extract_supported_instructions, render_coverage};
//!
//! let source = r#"
//! instr_rewrite_func_t *rewrite_funcs[] = {
//!     /* 0 OP_AVX512_VADDPD */ rw_func_vaddpd,
//!     /* 1 OP_AVX512_VSUBPD */ rw_func_empty,
//! };
//! "#;
//!
//! let supported = extract_supported_instructions(source);
//! let report = render_coverage(&supported);
//! assert!(report.contains("**1** instructions"));
//! ```

// Public modules
pub mod cli;
pub mod config;
pub mod extract;
pub mod fs;
pub mod report;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, CoverageConfig};
pub use extract::{extract_supported_instructions, extract_table_entries, TableEntry};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use report::render_coverage;
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
