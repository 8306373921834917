pub mod display;
pub mod types;

pub use types::{Finding, Severity, SourceLocation, VulnerabilityKind};
