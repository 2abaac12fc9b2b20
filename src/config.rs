//! Configuration management for rwcov
//!
//! Paths are resolved in three layers: built-in defaults relative to the
//! installed binary (mirroring the layout the tool ships in), `RWCOV_*`
//! environment variables, and finally command-line flags.
//!
//! # Environment Variables
//!
//! - `RWCOV_INPUT`: path to the rewrite source file - default:
//!   `core/arch/rewrite.c` next to the executable
//! - `RWCOV_OUTPUT`: path of the generated report - default:
//!   `docs/coverage.md` next to the executable
//! - `RWCOV_LOG_LEVEL`: logging level - default: "info"

use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Default input path, relative to the executable's directory
const DEFAULT_INPUT: &str = "core/arch/rewrite.c";

/// Default output path, relative to the executable's directory
const DEFAULT_OUTPUT: &str = "docs/coverage.md";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The executable's own location could not be determined
    #[error("Failed to resolve the executable directory: {0}")]
    ExeDirUnavailable(String),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Paths the coverage pipeline operates on
///
/// Constructed via [`CoverageConfig::from_env`] which loads defaults and
/// environment overrides; command-line flags are applied on top by the
/// caller through [`CoverageConfig::with_overrides`].
#[derive(Debug, Clone)]
pub struct CoverageConfig {
    /// Source file holding the `rewrite_funcs[]` table
    pub input_path: PathBuf,

    /// Destination of the generated markdown report
    pub output_path: PathBuf,
}

impl CoverageConfig {
    /// Builds a configuration from environment variables with
    /// executable-relative defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ExeDirUnavailable` if neither env var is set
    /// and the executable path cannot be resolved.
    pub fn from_env() -> Result<Self, ConfigError> {
        let input = env::var_os("RWCOV_INPUT").map(PathBuf::from);
        let output = env::var_os("RWCOV_OUTPUT").map(PathBuf::from);

        // Only resolve the exe dir when a default is actually needed, so
        // fully-overridden runs work even in odd environments.
        let (input_path, output_path) = match (input, output) {
            (Some(i), Some(o)) => (i, o),
            (i, o) => {
                let base = exe_dir()?;
                (
                    i.unwrap_or_else(|| base.join(DEFAULT_INPUT)),
                    o.unwrap_or_else(|| base.join(DEFAULT_OUTPUT)),
                )
            }
        };

        Ok(Self {
            input_path,
            output_path,
        })
    }

    /// Applies command-line overrides on top of the current paths.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(i) = input {
            self.input_path = i;
        }
        if let Some(o) = output {
            self.output_path = o;
        }
        self
    }

    /// Validates the configuration
    ///
    /// Checks that both paths are non-empty and distinct; the report must
    /// never clobber the scanned source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if any check fails
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Input path must not be empty".to_string(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output path must not be empty".to_string(),
            ));
        }
        if self.input_path == self.output_path {
            return Err(ConfigError::ValidationFailed(format!(
                "Input and output must differ, both are {}",
                self.input_path.display()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for CoverageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coverage Configuration:")?;
        writeln!(f, "  Input: {}", self.input_path.display())?;
        writeln!(f, "  Output: {}", self.output_path.display())?;
        Ok(())
    }
}

/// Directory containing the running executable
fn exe_dir() -> Result<PathBuf, ConfigError> {
    let exe = env::current_exe().map_err(|e| ConfigError::ExeDirUnavailable(e.to_string()))?;
    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| ConfigError::ExeDirUnavailable("executable has no parent".to_string()))
}
