mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "solguard")]
#[command(about = "Pattern-based security analysis for Solidity smart contracts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze Solidity contract(s) for vulnerabilities
    Analyze {
        /// Path to a .sol file or directory containing contracts
        path: PathBuf,

        /// Output format (defaults to config, then "text")
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Minimum severity to report (defaults to config, then "low")
        #[arg(short, long)]
        severity: Option<SeverityFilter>,

        /// Run only these detectors (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        detectors: Option<Vec<String>>,

        /// Exclude these detectors (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        exclude: Option<Vec<String>>,

        /// Path to config file (default: .solguard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Suppress banner and summary
        #[arg(short, long)]
        quiet: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// List all available detectors
    List,
    /// Generate a default .solguard.toml config file
    Init,
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
    Sarif,
}

#[derive(ValueEnum, Clone, Copy)]
enum SeverityFilter {
    Critical,
    High,
    Medium,
    Low,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            severity,
            detectors,
            exclude,
            config,
            quiet,
            no_color,
        } => commands::analyze::run(
            &path, format, severity, detectors, exclude, config, quiet, no_color,
        ),
        Commands::List => commands::list::run(),
        Commands::Init => commands::init::run(),
    }
}
