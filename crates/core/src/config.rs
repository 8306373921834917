use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::finding::{Finding, Severity};

/// Project-level configuration loaded from `.solguard.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub global: GlobalConfig,
    #[serde(default)]
    pub detectors: HashMap<String, DetectorConfig>,
    #[serde(default)]
    pub suppressions: SuppressionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub severity_threshold: String,
    pub output_format: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            severity_threshold: "low".to_string(),
            output_format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuppressionConfig {
    pub files: Vec<String>,
}

impl Config {
    /// Load config from a TOML file path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check if a detector is enabled according to config.
    pub fn is_detector_enabled(&self, name: &str) -> bool {
        self.detectors
            .get(name)
            .and_then(|d| d.enabled)
            .unwrap_or(true)
    }

    /// Parse the global severity threshold into a Severity value.
    pub fn severity_threshold(&self) -> Severity {
        parse_severity(&self.global.severity_threshold).unwrap_or(Severity::Low)
    }

    /// Check if a file path should be excluded based on suppression glob patterns.
    pub fn is_file_excluded(&self, file_path: &Path) -> bool {
        let path_str = file_path.to_string_lossy();
        self.suppressions
            .files
            .iter()
            .any(|pattern| glob::Pattern::new(pattern).is_ok_and(|p| p.matches(&path_str)))
    }

    /// Generate default config file content.
    pub fn default_toml() -> &'static str {
        r#"# solguard configuration
# See: https://github.com/safestackai/solguard

[global]
# Minimum severity to report: "critical", "high", "medium", "low"
severity_threshold = "low"
# Output format: "text", "json", "sarif"
output_format = "text"

# Per-detector overrides
# [detectors.tx-origin]
# enabled = false

[suppressions]
# Glob patterns for files to skip entirely
files = ["test/**", "mocks/**"]
"#
    }
}

pub fn parse_severity(s: &str) -> Option<Severity> {
    match s.to_lowercase().as_str() {
        "critical" => Some(Severity::Critical),
        "high" => Some(Severity::High),
        "medium" => Some(Severity::Medium),
        "low" => Some(Severity::Low),
        _ => None,
    }
}

/// Inline suppression: parses source files for `// solguard-ignore` comments.
/// Returns a map of (file, line) → suppressed detector names.
/// A bare `// solguard-ignore` (no colon) suppresses all detectors for that line.
pub fn parse_inline_suppressions(
    source_map: &BTreeMap<PathBuf, String>,
) -> HashMap<(PathBuf, usize), Vec<String>> {
    let mut suppressions: HashMap<(PathBuf, usize), Vec<String>> = HashMap::new();

    for (path, source) in source_map {
        for (idx, line) in source.lines().enumerate() {
            let trimmed = line.trim();
            if let Some(rest) = extract_suppression_comment(trimmed) {
                // Suppression applies to the *next* line (idx is 0-based, lines are 1-based)
                let target_line = idx + 2;
                let detectors = if rest.is_empty() {
                    vec!["*".to_string()] // wildcard = suppress all
                } else {
                    rest.split(',').map(|s| s.trim().to_string()).collect()
                };
                suppressions.insert((path.clone(), target_line), detectors);
            }
        }
    }

    suppressions
}

/// Extract the detector list from a suppression comment.
/// Returns Some("") for bare ignore, Some("det1, det2") for specific, None if not a suppression.
fn extract_suppression_comment(line: &str) -> Option<&str> {
    // Match: // solguard-ignore or // solguard-ignore: det1, det2
    let comment = line.strip_prefix("//")?;
    let comment = comment.trim();
    let rest = comment.strip_prefix("solguard-ignore")?;
    let rest = rest.trim();
    if rest.is_empty() {
        Some("")
    } else {
        let rest = rest.strip_prefix(':')?;
        Some(rest.trim())
    }
}

/// Filter findings based on config and inline suppressions.
///
/// Findings without a location can only be dropped by disabling their
/// detector; file globs and inline comments need a line to match against.
pub fn apply_suppressions(
    findings: Vec<Finding>,
    config: &Config,
    inline_suppressions: &HashMap<(PathBuf, usize), Vec<String>>,
) -> Vec<Finding> {
    findings
        .into_iter()
        .filter(|f| {
            if !config.is_detector_enabled(f.kind.id()) {
                return false;
            }

            if let Some(loc) = &f.location {
                if config.is_file_excluded(&loc.file) {
                    return false;
                }

                let key = (loc.file.clone(), loc.line);
                if let Some(suppressed) = inline_suppressions.get(&key) {
                    if suppressed.iter().any(|s| s == "*" || *s == f.kind.id()) {
                        return false;
                    }
                }
            }

            true
        })
        .collect()
}
