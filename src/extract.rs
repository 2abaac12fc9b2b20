//! Rewrite-table extraction
//!
//! Locates the `rewrite_funcs[]` dispatch array inside the text of
//! `rewrite.c` and pulls out one entry per table row. This is a narrow,
//! line-oriented pattern extractor, not a C parser: it recognizes exactly
//! the shape the rewrite engine emits and skips everything else.
//!
//! A missing table is a soft failure. The original generator printed a
//! diagnostic and carried on with an empty result, and downstream tooling
//! relies on a report being written either way, so this module logs a
//! warning and returns an empty set rather than aborting the pipeline.

use regex::Regex;
use tracing::{debug, warn};

/// The handler name marking an instruction as declared but unsupported.
pub const PLACEHOLDER_HANDLER: &str = "rw_func_empty";

/// One row of the rewrite table: an instruction mnemonic and the handler
/// it dispatches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// Instruction mnemonic, e.g. `OP_AVX512_VADDPD`
    pub instruction: String,
    /// Rewrite handler name, e.g. `rw_func_vaddpd`
    pub handler: String,
}

impl TableEntry {
    /// True if this entry dispatches to a real handler rather than the
    /// placeholder. Matching is exact: a handler whose name merely contains
    /// `rw_func_empty` as a prefix still counts as supported.
    pub fn is_supported(&self) -> bool {
        self.handler != PLACEHOLDER_HANDLER
    }
}

/// Extracts every row of the `rewrite_funcs[]` array from C source text.
///
/// Rows appear in source order. Lines inside the array that do not match
/// the `/* <n> OP_AVX512_<NAME> */ rw_func_<name>,` shape (comments, blank
/// separators, malformed rows) are skipped without error. Duplicate
/// instruction names are preserved as written.
///
/// Returns an empty vector if the array declaration is absent.
pub fn extract_table_entries(source: &str) -> Vec<TableEntry> {
    let table_re = Regex::new(r"(?s)instr_rewrite_func_t \*rewrite_funcs\[\] = \{([^}]*)\};")
        .expect("valid regex");

    let body = match table_re.captures(source) {
        Some(cap) => cap.get(1).map(|m| m.as_str()).unwrap_or(""),
        None => {
            warn!("could not find rewrite_funcs array in the source text");
            return Vec::new();
        }
    };

    let entry_re =
        Regex::new(r"/\* \d+ (OP_AVX512_[A-Z0-9_]+) \*/ (rw_func_\w+),").expect("valid regex");

    let mut entries = Vec::new();
    for line in body.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(cap) = entry_re.captures(line) {
            entries.push(TableEntry {
                instruction: cap[1].to_string(),
                handler: cap[2].to_string(),
            });
        }
    }

    debug!(rows = entries.len(), "parsed rewrite table");
    entries
}

/// Extracts the supported instruction set: every table row whose handler is
/// not the placeholder, in source order.
pub fn extract_supported_instructions(source: &str) -> Vec<String> {
    extract_table_entries(source)
        .into_iter()
        .filter(TableEntry::is_supported)
        .map(|e| e.instruction)
        .collect()
}
