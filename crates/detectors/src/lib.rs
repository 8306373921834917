use std::path::Path;

use solguard::detector::{AnalysisContext, Detector, DetectorRegistry};
use solguard::finding::Finding;

pub mod delegatecall;
pub mod reentrancy;
pub mod selfdestruct;
pub mod tx_origin;
pub mod unchecked_call;

/// Returns all built-in detectors.
///
/// The order here is the evaluation order and the order findings appear in
/// reports; renderers and tests depend on it, so append new detectors at
/// the end rather than reordering.
pub fn all_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(reentrancy::Reentrancy),
        Box::new(unchecked_call::UncheckedCall::new()),
        Box::new(selfdestruct::Selfdestruct),
        Box::new(delegatecall::Delegatecall),
        Box::new(tx_origin::TxOrigin),
    ]
}

/// Run every built-in detector against a single piece of contract source.
///
/// Convenience entry point for in-process callers that hold source text
/// rather than files. Total over arbitrary input: empty or non-matching
/// text yields an empty list.
pub fn analyze(source: &str) -> Vec<Finding> {
    let mut registry = DetectorRegistry::new();
    registry.register_all(all_detectors());
    let ctx = AnalysisContext::new(Path::new("<input>"), source);
    registry.run_all(&ctx)
}
