//! Shared data models for scan results and printers.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// One matched tag occurrence on a specific line of a specific file.
pub struct Finding {
    pub tag: String,
    pub file: String,
    pub line: usize,
    pub text: String,
}

#[derive(Serialize, Debug, Clone)]
/// Per-file scan result with findings in ascending line order.
pub struct FileReport {
    pub file: String,
    pub findings: Vec<Finding>,
}

#[derive(Serialize, Debug, Clone)]
/// A per-file scan failure surfaced as a diagnostic, never as a fatal error.
pub struct ScanError {
    pub file: String,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, Default)]
/// Aggregate of all per-file reports and scan errors for one run.
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub errors: Vec<ScanError>,
}

impl ScanReport {
    /// Total finding count across all files.
    pub fn total_findings(&self) -> usize {
        self.files.iter().map(|f| f.findings.len()).sum()
    }
}

#[derive(Serialize, Debug, Clone)]
/// Run summary used by printers.
pub struct Summary {
    pub findings: usize,
    pub files: usize,
    pub errors: usize,
    pub threshold: usize,
    pub passed: bool,
}
