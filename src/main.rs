use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing::debug;

use pmon::analyzer::{self, BuildMetricsProvider, MockBuildMetrics};
use pmon::cli::{AnalysisConfig, Cli};
use pmon::{detector, reporter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    let config = AnalysisConfig::from_cli(&cli);
    debug!("run configuration: {:?}", config);

    let work_dir = std::env::current_dir()?;

    println!("{}", "Performance Monitor CLI (pmon)".green().bold());
    println!("================================");

    let project = detector::detect_project(&work_dir)?;

    println!("Detected: {} project", project.project_type.to_string().blue());
    println!("Framework: {}", project.framework);
    println!("Build Tool: {}", project.build_tool);
    println!("Root Path: {}", project.root_path.display());

    if !project.dependencies.is_empty() {
        println!("Dependencies: {} packages", project.dependencies.len());
    }

    if !project.scripts.is_empty() {
        println!("Scripts: {} available", project.scripts.len());
        if config.all {
            println!("\nAvailable scripts:");
            for (name, script) in &project.scripts {
                println!("  - {}: {}", name, script);
            }
        }
    }

    if config.all {
        println!("\nRunning full performance analysis...");
    } else {
        println!("\nRunning selected analyses...");
    }

    let provider = MockBuildMetrics;
    let result = analyzer::run_analysis(&project, &config, &provider)?;

    if result.build_metrics.is_some() {
        println!(
            "{}",
            format!(
                "Note: build metrics are {} values; real instrumentation is not implemented yet.",
                provider.label()
            )
            .yellow()
        );
    }

    reporter::generate_report(&result, config.output)?;

    Ok(())
}
