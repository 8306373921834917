use solguard::detector::{AnalysisContext, Detector};
use solguard::finding::{Finding, VulnerabilityKind};

/// Flags any occurrence of the `delegatecall` primitive.
///
/// Same lexical tradeoff as the selfdestruct rule: context is not
/// inspected, so proxy patterns with a vetted immutable target are flagged
/// too and need an inline suppression.
pub struct Delegatecall;

impl Detector for Delegatecall {
    fn kind(&self) -> VulnerabilityKind {
        VulnerabilityKind::Delegatecall
    }

    fn check(&self, ctx: &AnalysisContext) -> Option<Finding> {
        ctx.source()
            .find("delegatecall")
            .map(|offset| Finding::of(self.kind()).with_location(ctx.location(offset)))
    }
}
