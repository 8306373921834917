use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use solguard::config::{self, Config};
use solguard::detector::{AnalysisContext, DetectorRegistry};
use solguard::finding::{Finding, Severity};
use solguard::project;
use solguard::report::AnalysisReport;

use crate::output;
use crate::{OutputFormat, SeverityFilter};

pub fn run(
    path: &Path,
    format: Option<OutputFormat>,
    severity: Option<SeverityFilter>,
    detectors: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    config_path: Option<PathBuf>,
    quiet: bool,
    no_color: bool,
) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(".solguard.toml"));
    let config = Config::load(&config_path)?;

    // 1. Discover and read contract sources
    let files = project::discover_sol_files(path)?;
    let source_map = project::load_sources(&files)?;

    if !quiet {
        eprintln!("Analyzing {} files...", files.len());
    }

    // 2. Build detector registry
    let mut all_dets = solguard_detectors::all_detectors();

    if let Some(ref names) = detectors {
        all_dets.retain(|d| names.iter().any(|n| n == d.name()));
    }
    if let Some(ref names) = exclude {
        all_dets.retain(|d| !names.iter().any(|n| n == d.name()));
    }

    let mut registry = DetectorRegistry::new();
    registry.register_all(all_dets);

    // 3. Run detectors per file, in parallel. Each file is an independent
    // analysis; collect preserves file order, so output stays deterministic.
    let mut all_findings: Vec<Finding> = files
        .par_iter()
        .map(|file| {
            let source = source_map.get(file).map(String::as_str).unwrap_or("");
            let ctx = AnalysisContext::new(file, source);
            registry.run_all(&ctx)
        })
        .collect::<Vec<Vec<Finding>>>()
        .into_iter()
        .flatten()
        .collect();

    // 4. Apply config and inline suppressions
    let inline = config::parse_inline_suppressions(&source_map);
    all_findings = config::apply_suppressions(all_findings, &config, &inline);

    // 5. Filter by severity (CLI flag wins over config threshold)
    let min_severity = match severity {
        Some(SeverityFilter::Critical) => Severity::Critical,
        Some(SeverityFilter::High) => Severity::High,
        Some(SeverityFilter::Medium) => Severity::Medium,
        Some(SeverityFilter::Low) => Severity::Low,
        None => config.severity_threshold(),
    };
    all_findings = DetectorRegistry::filter_by_severity(all_findings, &min_severity);

    // 6. Build report
    let report = AnalysisReport::from_findings(files, all_findings);

    // 7. Output
    let format = format.unwrap_or_else(|| match config.global.output_format.as_str() {
        "json" => OutputFormat::Json,
        "sarif" => OutputFormat::Sarif,
        _ => OutputFormat::Text,
    });
    match format {
        OutputFormat::Json => output::json::print(&report)?,
        OutputFormat::Sarif => output::sarif::print(&report)?,
        OutputFormat::Text => output::text::print(&report, quiet, no_color)?,
    }

    // 8. Exit code
    if report.total_findings > 0 {
        std::process::exit(1);
    }

    Ok(())
}
