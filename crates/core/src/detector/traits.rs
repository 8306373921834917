use super::context::AnalysisContext;
use crate::finding::{Finding, Severity, VulnerabilityKind};

/// Core trait for all vulnerability detectors.
///
/// A detector is a pure predicate over contract source text: it produces at
/// most one finding per contract, never panics on any input (empty text,
/// binary garbage, multi-megabyte blobs), and holds no state between calls.
pub trait Detector: Send + Sync {
    /// The vulnerability class this detector reports.
    fn kind(&self) -> VulnerabilityKind;

    /// Unique identifier for this detector (e.g., "unchecked-call")
    fn name(&self) -> &'static str {
        self.kind().id()
    }

    /// Human-readable description of what this detector checks
    fn description(&self) -> &'static str {
        self.kind().description()
    }

    /// Severity of findings from this detector
    fn severity(&self) -> Severity {
        self.kind().severity()
    }

    /// Run detection on the given analysis context.
    fn check(&self, context: &AnalysisContext) -> Option<Finding>;
}
