use solguard::detector::{AnalysisContext, Detector};
use solguard::finding::{Finding, VulnerabilityKind};

/// Flags any use of `tx.origin`.
///
/// `tx.origin` names the externally-owned account that started the
/// transaction, not the immediate caller, so authenticating with it lets a
/// malicious intermediary contract act on a victim's behalf.
pub struct TxOrigin;

impl Detector for TxOrigin {
    fn kind(&self) -> VulnerabilityKind {
        VulnerabilityKind::TxOrigin
    }

    fn check(&self, ctx: &AnalysisContext) -> Option<Finding> {
        ctx.source()
            .find("tx.origin")
            .map(|offset| Finding::of(self.kind()).with_location(ctx.location(offset)))
    }
}
