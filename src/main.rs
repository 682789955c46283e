//! sort-audit CLI entry point
//!
//! One-shot validation of depth-sort debug dumps.

use clap::Parser;
use sort_audit::cli::Args;
use sort_audit::report::TerminalFormatter;
use sort_audit::run_audit;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.to_config();

    let report = match run_audit(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(3);
        }
    };

    let formatter = TerminalFormatter::new(args.use_color(), args.verbose, args.quiet);
    println!("{}", formatter.format(&report));

    if report.has_failures() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
