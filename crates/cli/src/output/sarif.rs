use anyhow::Result;
use serde_json::json;

use solguard::finding::{Severity, VulnerabilityKind};
use solguard::report::AnalysisReport;

/// Print SARIF 2.1.0 output for GitHub Code Scanning integration
pub fn print(report: &AnalysisReport) -> Result<()> {
    // Build stable rule descriptions from the rule table (not per-finding text)
    let mut kinds: Vec<VulnerabilityKind> = Vec::new();
    for f in &report.findings {
        if !kinds.contains(&f.kind) {
            kinds.push(f.kind);
        }
    }
    let rules: Vec<serde_json::Value> = kinds
        .iter()
        .map(|kind| {
            json!({
                "id": kind.id(),
                "shortDescription": {
                    "text": kind.description()
                },
                "help": {
                    "text": kind.recommendation()
                },
                "defaultConfiguration": {
                    "level": severity_to_sarif_level(&kind.severity())
                }
            })
        })
        .collect();

    let results: Vec<serde_json::Value> = report
        .findings
        .iter()
        .map(|f| {
            let locations: Vec<serde_json::Value> = f
                .location
                .iter()
                .map(|loc| {
                    json!({
                        "physicalLocation": {
                            "artifactLocation": {
                                "uri": loc.file.display().to_string()
                            },
                            "region": {
                                "startLine": loc.line
                            }
                        }
                    })
                })
                .collect();

            json!({
                "ruleId": f.kind.id(),
                "level": severity_to_sarif_level(&f.severity),
                "message": {
                    "text": f.description
                },
                "locations": locations
            })
        })
        .collect();

    let sarif = json!({
        "$schema": "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json",
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "solguard",
                    "version": env!("CARGO_PKG_VERSION"),
                    "informationUri": "https://github.com/safestackai/solguard",
                    "rules": rules
                }
            },
            "results": results
        }]
    });

    let json = serde_json::to_string_pretty(&sarif)?;
    println!("{json}");
    Ok(())
}

fn severity_to_sarif_level(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => "error",
        Severity::High => "error",
        Severity::Medium => "warning",
        Severity::Low => "note",
    }
}
