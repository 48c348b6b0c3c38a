//! Output rendering for scan results.
//!
//! Supports `human` (default) and `json` outputs. The human form prints one
//! `Found <TAG> in <path> at line <N>: <text>` line per finding; the JSON
//! form includes per-file reports, scan errors, and a top-level summary.

use crate::models::{ScanReport, Summary};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the scan report and summary in the requested format.
///
/// Diagnostics are always emitted before the caller acts on the pass/fail
/// flag, so a failing run still shows the full report.
pub fn print_scan(report: &ScanReport, summary: &Summary, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_scan_json(report, summary)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for file in &report.files {
                for f in &file.findings {
                    if color {
                        println!(
                            "Found {} in {} at line {}: {}",
                            f.tag.red().bold(),
                            f.file.bold(),
                            f.line,
                            f.text
                        );
                    } else {
                        println!("Found {} in {} at line {}: {}", f.tag, f.file, f.line, f.text);
                    }
                }
            }
            for err in &report.errors {
                println!("{} {}", crate::utils::note_prefix(), err.message);
            }
            let line = format!(
                "— Summary — findings={} files={} errors={} threshold={} result={}",
                summary.findings,
                summary.files,
                summary.errors,
                summary.threshold,
                if summary.passed { "passed" } else { "failed" }
            );
            if color {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

/// Compose the scan JSON object (pure) for testing/snapshot purposes.
pub fn compose_scan_json(report: &ScanReport, summary: &Summary) -> JsonVal {
    json!({
        "files": serde_json::to_value(&report.files).unwrap(),
        "errors": serde_json::to_value(&report.errors).unwrap(),
        "summary": serde_json::to_value(summary).unwrap(),
    })
}
