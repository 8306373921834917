use solguard::detector::{AnalysisContext, Detector};
use solguard::finding::{Finding, VulnerabilityKind};

/// Flags any occurrence of the `selfdestruct` primitive.
///
/// Purely lexical: fires even inside comments or dead branches. That
/// false-positive rate is accepted — a destructible contract is severe
/// enough to surface on any mention.
pub struct Selfdestruct;

impl Detector for Selfdestruct {
    fn kind(&self) -> VulnerabilityKind {
        VulnerabilityKind::Selfdestruct
    }

    fn check(&self, ctx: &AnalysisContext) -> Option<Finding> {
        ctx.source()
            .find("selfdestruct")
            .map(|offset| Finding::of(self.kind()).with_location(ctx.location(offset)))
    }
}
