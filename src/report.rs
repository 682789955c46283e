//! Report aggregation and terminal output.
//!
//! Collects check results into an `AuditReport`, computes summary
//! statistics, and renders the human-readable report. Rendering never
//! fails and never panics; an empty report is valid output.

use crate::{Check, CheckCategory, CheckResult};

/// Result summary statistics
#[derive(Debug, Clone, Default)]
pub struct ResultSummary {
    pub passed: u32,
    pub failed: u32,
    pub total: u32,
    pub total_duration_ms: u64,
}

/// Audit report containing all check results
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub indices_path: String,
    pub depths_path: String,
    pub checks: Vec<Check>,
    pub total_duration_ms: u64,
}

impl AuditReport {
    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();

        for check in &self.checks {
            summary.total += 1;
            match &check.result {
                CheckResult::Pass { duration_ms, .. } => {
                    summary.passed += 1;
                    summary.total_duration_ms += duration_ms;
                }
                CheckResult::Fail { duration_ms, .. } => {
                    summary.failed += 1;
                    summary.total_duration_ms += duration_ms;
                }
            }
        }

        summary
    }

    /// True if at least one check failed
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.result.is_fail())
    }

    /// Get only failed checks
    pub fn failures(&self) -> Vec<&Check> {
        self.checks.iter().filter(|c| c.result.is_fail()).collect()
    }
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            quiet,
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    /// Format an audit report into a string
    pub fn format(&self, report: &AuditReport) -> String {
        let mut output = String::new();

        output.push_str("--------------------------------------------------------------------------------\n");
        output.push_str("sort-audit validation report\n");
        output.push_str(&format!("Indices: {}\n", report.indices_path));
        output.push_str(&format!("Depths:  {}\n", report.depths_path));
        output.push_str("--------------------------------------------------------------------------------\n\n");

        let categories = [
            ("ORDER CHECKS", CheckCategory::Order),
            ("SHAPE CHECKS", CheckCategory::Shape),
            ("TYPE CHECKS", CheckCategory::Type),
        ];

        for (header, category) in categories.iter() {
            let category_checks: Vec<_> = report
                .checks
                .iter()
                .filter(|c| c.category == *category)
                .collect();

            if category_checks.is_empty() {
                continue;
            }

            // Quiet mode hides categories with no failures
            if self.quiet && !category_checks.iter().any(|c| c.result.is_fail()) {
                continue;
            }

            output.push_str(&format!("{}\n", header));

            for check in category_checks {
                if self.quiet && !check.result.is_fail() {
                    continue;
                }

                let (status, message) = match &check.result {
                    CheckResult::Pass {
                        message,
                        duration_ms,
                    } => {
                        let msg = if self.verbose {
                            format!("{} ({}ms)", message, duration_ms)
                        } else {
                            message.clone()
                        };
                        (self.green("[PASS]"), msg)
                    }
                    CheckResult::Fail {
                        message,
                        details,
                        duration_ms,
                    } => {
                        let msg = if self.verbose {
                            format!("{} - {} ({}ms)", message, details, duration_ms)
                        } else {
                            format!("{} - {}", message, details)
                        };
                        (self.red("[FAIL]"), msg)
                    }
                };

                output.push_str(&format!(
                    "  {} {} {}: {}\n",
                    status, check.id, check.name, message
                ));
            }

            output.push('\n');
        }

        let summary = report.summary();
        output.push_str("--------------------------------------------------------------------------------\n");
        output.push_str(&format!(
            "SUMMARY: {} passed, {} failed ({} total)\n",
            summary.passed, summary.failed, summary.total
        ));
        output.push_str(&format!(
            "Total time: {}ms\n",
            report.total_duration_ms
        ));

        let (exit_code, exit_desc) = if summary.failed > 0 {
            (1, "failures detected")
        } else {
            (0, "all checks passed")
        };
        output.push_str(&format!("Exit code: {} ({})\n", exit_code, exit_desc));
        output.push_str("--------------------------------------------------------------------------------");

        output
    }
}
