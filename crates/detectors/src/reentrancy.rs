use solguard::detector::{AnalysisContext, Detector};
use solguard::finding::{Finding, VulnerabilityKind};

/// Flags contracts that move value through an external call without any
/// conventional reentrancy guard in scope.
///
/// Cheap lexical proxy for a checks-effects-interactions violation: an
/// external value transfer (`.call{value:` or `.transfer(`) with neither a
/// `nonReentrant` modifier nor an imported `ReentrancyGuard` anywhere in
/// the text. Whole-text matching only, so no per-function location is
/// attached to the finding.
pub struct Reentrancy;

impl Detector for Reentrancy {
    fn kind(&self) -> VulnerabilityKind {
        VulnerabilityKind::Reentrancy
    }

    fn check(&self, ctx: &AnalysisContext) -> Option<Finding> {
        let source = ctx.source();
        let has_value_transfer =
            source.contains(".call{value:") || source.contains(".transfer(");
        let has_guard =
            source.contains("nonReentrant") || source.contains("ReentrancyGuard");

        if has_value_transfer && !has_guard {
            Some(Finding::of(self.kind()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn check(source: &str) -> Option<Finding> {
        Reentrancy.check(&AnalysisContext::new(Path::new("test.sol"), source))
    }

    #[test]
    fn test_detects_unguarded_value_call() {
        let source = r#"
            function withdraw(uint amount) public {
                (bool ok, ) = msg.sender.call{value: amount}("");
                balances[msg.sender] -= amount;
            }
        "#;
        let finding = check(source).unwrap();
        assert_eq!(finding.kind, VulnerabilityKind::Reentrancy);
        assert!(finding.location.is_none());
    }

    #[test]
    fn test_detects_unguarded_transfer() {
        let source = "function pay(address payable to) public { to.transfer(1 ether); }";
        assert!(check(source).is_some());
    }

    #[test]
    fn test_non_reentrant_modifier_suppresses() {
        let source = r#"
            function withdraw(uint amount) public nonReentrant {
                (bool ok, ) = msg.sender.call{value: amount}("");
            }
        "#;
        assert!(check(source).is_none());
    }

    #[test]
    fn test_guard_import_suppresses() {
        let source = r#"
            import "@openzeppelin/contracts/security/ReentrancyGuard.sol";
            function pay(address payable to) public { to.transfer(1 ether); }
        "#;
        assert!(check(source).is_none());
    }

    #[test]
    fn test_no_value_transfer_no_finding() {
        let source = "function ping(address t) public { t.call(\"\"); }";
        assert!(check(source).is_none());
    }
}
