//! Threshold evaluation over the aggregate report.
//!
//! The single pass/fail decision point: the run fails iff the total
//! finding count strictly exceeds the threshold. Printing happens in
//! `output` before the caller acts on the outcome, so diagnostics are
//! always visible regardless of the decision.

use crate::models::{ScanReport, Summary};

/// Evaluate the aggregate against the fail threshold.
pub fn evaluate(report: &ScanReport, threshold: usize) -> Summary {
    let findings = report.total_findings();
    Summary {
        findings,
        files: report.files.len(),
        errors: report.errors.len(),
        threshold,
        passed: findings <= threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileReport, Finding};

    fn report_with(n: usize) -> ScanReport {
        let findings = (0..n)
            .map(|i| Finding {
                tag: "TODO".into(),
                file: "a.py".into(),
                line: i + 1,
                text: format!("# TODO {}", i),
            })
            .collect();
        ScanReport {
            files: vec![FileReport {
                file: "a.py".into(),
                findings,
            }],
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_zero_threshold_fails_on_any_finding() {
        let s = evaluate(&report_with(1), 0);
        assert!(!s.passed);
        assert_eq!(s.findings, 1);
    }

    #[test]
    fn test_threshold_equal_to_count_passes() {
        let s = evaluate(&report_with(3), 3);
        assert!(s.passed);
    }

    #[test]
    fn test_threshold_exceeded_by_one_fails() {
        let s = evaluate(&report_with(4), 3);
        assert!(!s.passed);
    }

    #[test]
    fn test_empty_aggregate_passes_at_zero() {
        let s = evaluate(&ScanReport::default(), 0);
        assert!(s.passed);
        assert_eq!(s.findings, 0);
        assert_eq!(s.files, 0);
    }

    #[test]
    fn test_scan_errors_do_not_affect_outcome() {
        let mut rep = report_with(0);
        rep.errors.push(crate::models::ScanError {
            file: "b.py".into(),
            message: "cannot open b.py".into(),
        });
        let s = evaluate(&rep, 0);
        assert!(s.passed);
        assert_eq!(s.errors, 1);
    }
}
