//! Command line interface.
//!
//! The defaults reproduce a zero-flag invocation from the sorter's
//! working directory: `sort_out.txt` and `debug_depths.txt` alongside
//! the binary, 12828 elements expected in each.

use crate::{AuditConfig, DEFAULT_EXPECTED_LEN};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sort-audit",
    version,
    about = "Order validation for depth-sort debug dumps",
    after_help = "EXIT CODES:\n    \
                  0   All checks passed\n    \
                  1   One or more checks failed\n    \
                  3   Runtime error (unreadable or malformed dump)"
)]
pub struct Args {
    /// Path to the index permutation dump
    #[arg(long, default_value = "sort_out.txt")]
    pub indices: PathBuf,

    /// Path to the depth values dump
    #[arg(long, default_value = "debug_depths.txt")]
    pub depths: PathBuf,

    /// Expected element count for both arrays
    #[arg(long, default_value_t = DEFAULT_EXPECTED_LEN)]
    pub expected_len: usize,

    /// Only output failures
    #[arg(long)]
    pub quiet: bool,

    /// Include per-check timing in the output
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Build an audit configuration from the parsed arguments.
    pub fn to_config(&self) -> AuditConfig {
        AuditConfig {
            indices_path: self.indices.clone(),
            depths_path: self.depths.clone(),
            expected_len: self.expected_len,
        }
    }

    /// Color is on unless --no-color or the NO_COLOR convention asks
    /// otherwise.
    pub fn use_color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }
}
