use crate::finding::Finding;

/// Upper bound of the aggregate risk score.
pub const MAX_RISK_SCORE: u32 = 100;

/// Reduce a finding list to one bounded risk score.
///
/// Each finding contributes its severity weight (Critical=40, High=25,
/// Medium=15, Low=5); the sum is clamped at [`MAX_RISK_SCORE`]. Duplicate
/// kinds each count — the score is an additive heuristic, not a
/// deduplicated or confidence-weighted model. Order-independent and total.
pub fn risk_score(findings: &[Finding]) -> u8 {
    findings
        .iter()
        .map(|f| f.severity.weight())
        .sum::<u32>()
        .min(MAX_RISK_SCORE) as u8
}
