//! Line scanning and the concurrent scan coordinator.
//!
//! `scan_file` streams one file and emits at most one finding per line:
//! patterns are tried in compiled order and the first match wins, so
//! overlapping tag definitions cannot inflate the count. `run_scan` fans
//! the file set out to one rayon task per file and merges every result
//! into a single aggregate behind one lock, waiting for all tasks.

use crate::models::{FileReport, Finding, ScanError, ScanReport};
use crate::patterns::TagPattern;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Mutex;

/// Scan one file against the compiled patterns.
///
/// Lines are 1-indexed and trimmed; empty lines are skipped. On an open
/// failure there is no report, only an error naming the path. On a read
/// failure mid-stream the findings accumulated so far are kept alongside
/// the error; the caller continues with other files either way.
pub fn scan_file(path: &Path, patterns: &[TagPattern]) -> (Option<FileReport>, Option<ScanError>) {
    let name = path.to_string_lossy().to_string();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return (
                None,
                Some(ScanError {
                    file: name.clone(),
                    message: format!("cannot open {}: {}", name, e),
                }),
            );
        }
    };
    let mut report = FileReport {
        file: name.clone(),
        findings: Vec::new(),
    };
    let reader = BufReader::new(file);
    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                let error = ScanError {
                    file: name.clone(),
                    message: format!("read failed in {} at line {}: {}", name, line_number, e),
                };
                return (Some(report), Some(error));
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        for pat in patterns {
            if pat.regex.is_match(trimmed) {
                report.findings.push(Finding {
                    tag: pat.tag.clone(),
                    file: name.clone(),
                    line: line_number,
                    text: trimmed.to_string(),
                });
                break;
            }
        }
    }
    (Some(report), None)
}

/// Scan every file concurrently and merge into one aggregate.
///
/// One task per file; appends to the shared report are serialized by a
/// single mutex. Blocks until every task has finished, then sorts file
/// reports by path so the final aggregate is deterministic regardless of
/// completion order. Per-file errors are diagnostics, never fatal. Files
/// that could not be opened contribute only an error, not a file entry;
/// a partial report from a mid-stream read failure is kept.
pub fn run_scan(files: &[std::path::PathBuf], patterns: &[TagPattern]) -> ScanReport {
    let aggregate = Mutex::new(ScanReport::default());
    files.par_iter().for_each(|path| {
        let (file_report, error) = scan_file(path, patterns);
        let mut agg = aggregate.lock().expect("scan aggregate lock");
        if let Some(rep) = file_report {
            agg.files.push(rep);
        }
        if let Some(err) = error {
            agg.errors.push(err);
        }
    });
    let mut report = aggregate.into_inner().expect("scan aggregate lock");
    report.files.sort_by(|a, b| a.file.cmp(&b.file));
    report.errors.sort_by(|a, b| a.file.cmp(&b.file));
    report
}
