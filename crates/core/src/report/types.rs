use std::path::PathBuf;

use serde::Serialize;

use crate::finding::{Finding, Severity};
use crate::scoring;

#[derive(Debug, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregate result of one analysis run.
///
/// Findings keep detector evaluation order; `risk_score` is derived from
/// them once at construction and the report is never mutated afterwards.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub files_analyzed: Vec<PathBuf>,
    pub risk_score: u8,
    pub total_findings: usize,
    pub findings_by_severity: SeverityCounts,
    pub findings: Vec<Finding>,
}

impl AnalysisReport {
    pub fn from_findings(files: Vec<PathBuf>, findings: Vec<Finding>) -> Self {
        let counts = SeverityCounts {
            critical: findings
                .iter()
                .filter(|f| f.severity == Severity::Critical)
                .count(),
            high: findings
                .iter()
                .filter(|f| f.severity == Severity::High)
                .count(),
            medium: findings
                .iter()
                .filter(|f| f.severity == Severity::Medium)
                .count(),
            low: findings
                .iter()
                .filter(|f| f.severity == Severity::Low)
                .count(),
        };
        let total = findings.len();
        let risk_score = scoring::risk_score(&findings);
        Self {
            files_analyzed: files,
            risk_score,
            total_findings: total,
            findings_by_severity: counts,
            findings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::VulnerabilityKind;

    #[test]
    fn test_report_derives_score_and_counts() {
        let findings = vec![
            Finding::of(VulnerabilityKind::Selfdestruct),
            Finding::of(VulnerabilityKind::Delegatecall),
            Finding::of(VulnerabilityKind::TxOrigin),
        ];
        let report =
            AnalysisReport::from_findings(vec![PathBuf::from("token.sol")], findings);
        assert_eq!(report.total_findings, 3);
        assert_eq!(report.risk_score, 80);
        assert_eq!(report.findings_by_severity.critical, 1);
        assert_eq!(report.findings_by_severity.high, 1);
        assert_eq!(report.findings_by_severity.medium, 1);
        assert_eq!(report.findings_by_severity.low, 0);
    }

    #[test]
    fn test_empty_report() {
        let report = AnalysisReport::from_findings(vec![], vec![]);
        assert_eq!(report.risk_score, 0);
        assert_eq!(report.total_findings, 0);
    }
}
