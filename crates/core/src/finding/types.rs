use std::path::PathBuf;

use serde::Serialize;

/// Severity levels ordered from most to least severe.
/// IMPORTANT: Variant order matters — derived Ord puts Critical < High <
/// Medium < Low, which is used for filtering (retain findings where
/// severity <= threshold). Do NOT reorder these variants.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Contribution of one finding of this severity to the aggregate
    /// risk score.
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Critical => 40,
            Severity::High => 25,
            Severity::Medium => 15,
            Severity::Low => 5,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
        }
    }
}

/// The closed set of vulnerability classes solguard reports.
///
/// Each kind statically determines the default severity, description, and
/// recommendation of its findings. The rule table lives here so it can be
/// matched exhaustively; detectors only decide whether a kind fires.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VulnerabilityKind {
    Reentrancy,
    UncheckedCall,
    Selfdestruct,
    Delegatecall,
    TxOrigin,
}

impl VulnerabilityKind {
    /// Stable identifier used for CLI selection, config keys, and SARIF
    /// rule ids.
    pub fn id(&self) -> &'static str {
        match self {
            VulnerabilityKind::Reentrancy => "reentrancy",
            VulnerabilityKind::UncheckedCall => "unchecked-call",
            VulnerabilityKind::Selfdestruct => "selfdestruct",
            VulnerabilityKind::Delegatecall => "delegatecall",
            VulnerabilityKind::TxOrigin => "tx-origin",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            VulnerabilityKind::Reentrancy => Severity::High,
            VulnerabilityKind::UncheckedCall => Severity::Medium,
            VulnerabilityKind::Selfdestruct => Severity::Critical,
            VulnerabilityKind::Delegatecall => Severity::High,
            VulnerabilityKind::TxOrigin => Severity::Medium,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VulnerabilityKind::Reentrancy => {
                "Potential reentrancy vulnerability detected in external calls"
            }
            VulnerabilityKind::UncheckedCall => {
                "External call without success verification"
            }
            VulnerabilityKind::Selfdestruct => {
                "Contract contains selfdestruct function"
            }
            VulnerabilityKind::Delegatecall => {
                "Delegatecall to untrusted address can be dangerous"
            }
            VulnerabilityKind::TxOrigin => {
                "Using tx.origin for authentication is vulnerable to phishing"
            }
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            VulnerabilityKind::Reentrancy => {
                "Use ReentrancyGuard or checks-effects-interactions pattern"
            }
            VulnerabilityKind::UncheckedCall => {
                "Always check return value of external calls"
            }
            VulnerabilityKind::Selfdestruct => {
                "Remove selfdestruct or implement strict access controls"
            }
            VulnerabilityKind::Delegatecall => {
                "Ensure delegatecall target is verified and immutable"
            }
            VulnerabilityKind::TxOrigin => {
                "Use msg.sender instead of tx.origin"
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: VulnerabilityKind,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Finding {
    /// Build a finding from the static rule table for `kind`.
    pub fn of(kind: VulnerabilityKind) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            description: kind.description().to_string(),
            recommendation: kind.recommendation().to_string(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}
