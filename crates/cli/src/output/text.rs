use anyhow::Result;
use colored::Colorize;
use solguard::finding::Severity;
use solguard::report::AnalysisReport;

pub fn print(report: &AnalysisReport, quiet: bool, no_color: bool) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }

    if !quiet {
        println!();
        println!("{}", "  solguard - Solidity Security Analysis".bold());
        println!("  Files analyzed: {}", report.files_analyzed.len());
        println!();
    }

    if report.findings.is_empty() {
        if !quiet {
            println!("  {} No issues found. Risk score: 0/100", "✓".green().bold());
            println!();
        }
        return Ok(());
    }

    for finding in &report.findings {
        let severity_label = match finding.severity {
            Severity::Critical => "CRITICAL".red().bold().underline(),
            Severity::High => "HIGH".red().bold(),
            Severity::Medium => "MEDIUM".yellow().bold(),
            Severity::Low => "LOW".blue(),
        };

        println!(
            "  [{}] {} ({})",
            severity_label,
            finding.description,
            finding.kind.id()
        );

        if let Some(loc) = &finding.location {
            println!("    {} {}:{}", "-->".dimmed(), loc.file.display(), loc.line);
            if let Some(snippet) = &loc.snippet {
                println!("    {} {}", "|".dimmed(), snippet);
            }
        }

        println!("    {} {}", "Fix:".green(), finding.recommendation);
        println!();
    }

    if !quiet {
        println!("{}", "  Summary".bold().underline());
        println!("    Critical: {}", report.findings_by_severity.critical);
        println!("    High:     {}", report.findings_by_severity.high);
        println!("    Medium:   {}", report.findings_by_severity.medium);
        println!("    Low:      {}", report.findings_by_severity.low);
        println!("    Total:    {}", report.total_findings);
        println!();
        let score_label = format!("{}/100", report.risk_score);
        let score_label = if report.risk_score >= 70 {
            score_label.red().bold()
        } else if report.risk_score >= 40 {
            score_label.yellow().bold()
        } else {
            score_label.green()
        };
        println!("  {} {}", "Risk score:".bold(), score_label);
        println!();
    }

    Ok(())
}
