use super::context::AnalysisContext;
use super::traits::Detector;
use crate::finding::{Finding, Severity};

/// Registry that holds all detectors and runs them against contract source.
///
/// Detectors run in registration order and findings are returned in that
/// same order. The order is part of the contract: report renderers and
/// tests rely on it, so `run_all` never re-sorts.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn Detector>>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// Register a detector
    pub fn register(&mut self, detector: Box<dyn Detector>) {
        self.detectors.push(detector);
    }

    /// Register multiple detectors at once
    pub fn register_all(&mut self, detectors: Vec<Box<dyn Detector>>) {
        self.detectors.extend(detectors);
    }

    /// Run all registered detectors, return findings in registration order.
    pub fn run_all(&self, context: &AnalysisContext) -> Vec<Finding> {
        self.detectors
            .iter()
            .filter_map(|d| d.check(context))
            .collect()
    }

    /// Run only detectors matching the given names
    pub fn run_selected(&self, names: &[&str], context: &AnalysisContext) -> Vec<Finding> {
        self.detectors
            .iter()
            .filter(|d| names.contains(&d.name()))
            .filter_map(|d| d.check(context))
            .collect()
    }

    /// List all registered detector names
    pub fn list_detectors(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Filter findings by minimum severity
    pub fn filter_by_severity(findings: Vec<Finding>, min: &Severity) -> Vec<Finding> {
        findings
            .into_iter()
            .filter(|f| f.severity <= *min)
            .collect()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::finding::VulnerabilityKind;

    struct FiresAlways(VulnerabilityKind);

    impl Detector for FiresAlways {
        fn kind(&self) -> VulnerabilityKind {
            self.0
        }
        fn check(&self, _context: &AnalysisContext) -> Option<Finding> {
            Some(Finding::of(self.0))
        }
    }

    struct FiresNever;

    impl Detector for FiresNever {
        fn kind(&self) -> VulnerabilityKind {
            VulnerabilityKind::Reentrancy
        }
        fn check(&self, _context: &AnalysisContext) -> Option<Finding> {
            None
        }
    }

    fn ctx_for(source: &str) -> AnalysisContext<'_> {
        AnalysisContext::new(Path::new("test.sol"), source)
    }

    #[test]
    fn test_run_all_preserves_registration_order() {
        let mut registry = DetectorRegistry::new();
        registry.register(Box::new(FiresAlways(VulnerabilityKind::TxOrigin)));
        registry.register(Box::new(FiresNever));
        registry.register(Box::new(FiresAlways(VulnerabilityKind::Selfdestruct)));

        let findings = registry.run_all(&ctx_for(""));
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].kind, VulnerabilityKind::TxOrigin);
        assert_eq!(findings[1].kind, VulnerabilityKind::Selfdestruct);
    }

    #[test]
    fn test_list_detectors() {
        let mut registry = DetectorRegistry::new();
        registry.register(Box::new(FiresAlways(VulnerabilityKind::Delegatecall)));
        assert_eq!(registry.list_detectors(), vec!["delegatecall"]);
    }

    #[test]
    fn test_run_selected() {
        let mut registry = DetectorRegistry::new();
        registry.register(Box::new(FiresAlways(VulnerabilityKind::TxOrigin)));

        let findings = registry.run_selected(&["nonexistent"], &ctx_for(""));
        assert!(findings.is_empty());

        let findings = registry.run_selected(&["tx-origin"], &ctx_for(""));
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_filter_by_severity() {
        let findings = vec![
            Finding::of(VulnerabilityKind::Selfdestruct),
            Finding::of(VulnerabilityKind::TxOrigin),
        ];
        let filtered = DetectorRegistry::filter_by_severity(findings, &Severity::High);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].kind, VulnerabilityKind::Selfdestruct);
    }
}
