//! Shared output formatting for lint results.

use anyhow::Result;
use iblint_core::{LintResult, Severity};

use crate::ReporterKind;

/// Print lint results with the given reporter.
pub fn print(result: &LintResult, reporter: ReporterKind) -> Result<()> {
    match reporter {
        ReporterKind::Xcode => print_xcode(result),
        ReporterKind::Json => return print_json(result),
        ReporterKind::Text => print_text(result),
    }
    Ok(())
}

/// One `path: level: message` line per violation, as Xcode parses
/// build-phase output.
fn print_xcode(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(&result.violations)?;
    println!("{json}");
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings) = result.count_by_severity();

    for violation in &result.violations {
        let severity_indicator = match violation.level {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
        };

        println!("{}", violation.path_string);
        println!("  {}: {}", severity_indicator, violation.message);
        println!();
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, result.files_checked
    );
    if result.skipped > 0 {
        println!("Skipped {} unreadable file(s)", result.skipped);
    }
}
