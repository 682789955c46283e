//! sort-audit library
//!
//! Order validation for depth-sort debug dumps.
//!
//! An external depth-sorting process writes two one-line array dumps:
//! an index permutation (`sort_out.txt`) and the depth values it was
//! sorting (`debug_depths.txt`). This library loads both, confirms the
//! index array is sorted, confirms the depth values read through the
//! index array are non-decreasing, checks both element counts against
//! the dataset's expected size, and checks that every depth element is
//! floating-point typed. It is a batch check with no recovery path:
//! any inconsistency is meant to stop a pipeline.
//!
//! # Example
//!
//! ```no_run
//! use sort_audit::{run_audit, AuditConfig};
//!
//! let config = AuditConfig::default();
//! let report = run_audit(&config).expect("audit could not run");
//! println!("Checks passed: {}", report.summary().passed);
//! ```

pub mod checks;
pub mod cli;
pub mod parser;
pub mod report;

use parser::Scalar;
use report::AuditReport;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

/// Check result indicating the outcome of a validation check.
#[derive(Debug, Clone)]
pub enum CheckResult {
    /// Check passed
    Pass { message: String, duration_ms: u64 },
    /// Check failed; `details` carries the offending position/values
    Fail {
        message: String,
        details: String,
        duration_ms: u64,
    },
}

impl CheckResult {
    pub fn is_fail(&self) -> bool {
        matches!(self, CheckResult::Fail { .. })
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass { message, .. } => write!(f, "PASS: {}", message),
            CheckResult::Fail {
                message, details, ..
            } => write!(f, "FAIL: {} ({})", message, details),
        }
    }
}

/// Check category for grouping related checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckCategory {
    /// Ordering checks (direct and index-mediated sortedness)
    Order,
    /// Shape checks (element counts)
    Shape,
    /// Element-type checks
    Type,
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::Order => write!(f, "Order"),
            CheckCategory::Shape => write!(f, "Shape"),
            CheckCategory::Type => write!(f, "Type"),
        }
    }
}

/// A validation check with its result.
#[derive(Debug, Clone)]
pub struct Check {
    /// Unique identifier (e.g., "ORD-001")
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Check category
    pub category: CheckCategory,
    /// Result of the check
    pub result: CheckResult,
}

/// Error types for sort-audit operations.
///
/// Check failures are not errors: they surface as `CheckResult::Fail`
/// in the report. Errors are the conditions under which no trustworthy
/// report can be produced at all.
#[derive(Debug, Clone, Error)]
pub enum AuditError {
    /// File could not be opened or read
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
    /// File content is not a valid array literal
    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },
    /// An index entry cannot address the depth array
    #[error("index entry {entry} at position {position} cannot address {len} depth values")]
    IndexOutOfRange {
        position: usize,
        entry: Scalar,
        len: usize,
    },
}

/// Configuration for running an audit.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Path to the index permutation dump
    pub indices_path: PathBuf,
    /// Path to the depth values dump
    pub depths_path: PathBuf,
    /// Expected element count for both arrays
    pub expected_len: usize,
}

/// Element count both dumps are expected to carry for this dataset.
pub const DEFAULT_EXPECTED_LEN: usize = 12828;

impl Default for AuditConfig {
    fn default() -> Self {
        AuditConfig {
            indices_path: PathBuf::from("sort_out.txt"),
            depths_path: PathBuf::from("debug_depths.txt"),
            expected_len: DEFAULT_EXPECTED_LEN,
        }
    }
}

/// Run the full audit.
///
/// Loads both dumps, then runs every check sequentially. Returns the
/// report, or an `AuditError` when a dump cannot be loaded or an index
/// entry cannot address the depth array. A report with failed checks
/// is an `Ok` value; the caller decides the exit code from its summary.
pub fn run_audit(config: &AuditConfig) -> Result<AuditReport, AuditError> {
    let start = Instant::now();

    let indices = parser::load_array(&config.indices_path)?;
    let depths = parser::load_array(&config.depths_path)?;

    let checks = vec![
        checks::check_index_order(&indices),
        checks::check_depths_ordered_by_index(&depths, &indices)?,
        checks::check_length(
            "LEN-001",
            "Index Array Length",
            &indices,
            config.expected_len,
        ),
        checks::check_length("LEN-002", "Depth Array Length", &depths, config.expected_len),
        checks::check_depth_element_types(&depths),
    ];

    Ok(AuditReport {
        indices_path: config.indices_path.display().to_string(),
        depths_path: config.depths_path.display().to_string(),
        checks,
        total_duration_ms: start.elapsed().as_millis() as u64,
    })
}
