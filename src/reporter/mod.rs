use colored::*;
use humantime::format_duration;
use std::fmt::Write as _;
use std::path::Path;

mod html;
mod json;

use crate::analyzer::AnalysisResult;
use crate::cli::ReportFormat;
use crate::error::PmonError;

/// Renders an analysis result in the requested format. File formats write a
/// timestamped report into the working directory.
pub fn generate_report(result: &AnalysisResult, format: ReportFormat) -> Result<(), PmonError> {
    match format {
        ReportFormat::Console => {
            print!("{}", console_report(result));
            Ok(())
        }
        ReportFormat::Json => {
            let path = json::write_report(result, Path::new("."))?;
            println!("JSON report saved to: {}", path.display());
            Ok(())
        }
        ReportFormat::Html => {
            let path = html::write_report(result, Path::new("."))?;
            println!("HTML report saved to: {}", path.display());
            Ok(())
        }
    }
}

pub(crate) fn report_filename(result: &AnalysisResult, extension: &str) -> String {
    format!(
        "performance-report-{}.{}",
        result.timestamp.format("%Y-%m-%d-%H-%M-%S"),
        extension
    )
}

// Byte counts render as mebibytes with two decimals everywhere.
pub(crate) fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1_048_576.0)
}

fn console_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", "Performance Analysis Report".bold());
    let _ = writeln!(out, "==============================");
    let _ = writeln!(
        out,
        "Project: {} ({})",
        result.project_info.project_type, result.project_info.framework
    );
    let _ = writeln!(out, "Analyzed at: {}\n", result.timestamp.to_rfc3339());

    if let Some(build) = &result.build_metrics {
        let _ = writeln!(out, "{}", "Build Metrics:".cyan().bold());
        let _ = writeln!(out, "  Build Time: {}", format_duration(build.build_time));
        let _ = writeln!(out, "  Bundle Size: {}", format_mb(build.bundle_size));
        let _ = writeln!(out, "  Dependencies: {}", build.dependencies);
        if !build.warnings.is_empty() {
            let _ = writeln!(out, "  Warnings: {}", build.warnings.len());
        }
        let _ = writeln!(out);
    }

    if let Some(runtime) = &result.runtime_metrics {
        let _ = writeln!(out, "{}", "Runtime Metrics:".cyan().bold());
        let _ = writeln!(
            out,
            "  Startup Time: {}",
            format_duration(runtime.startup_time)
        );
        let _ = writeln!(out, "  Memory Usage: {}", format_mb(runtime.memory_usage));
        let _ = writeln!(out, "  CPU Usage: {:.2}%", runtime.cpu_usage);
        let _ = writeln!(out);
    }

    if let Some(stats) = &result.static_metrics {
        let _ = writeln!(out, "{}", "Static Analysis:".cyan().bold());
        let _ = writeln!(out, "  Lines of Code: {}", stats.lines_of_code);
        let _ = writeln!(out, "  Complexity: {}", stats.complexity);
        let _ = writeln!(out, "  Test Coverage: {:.2}%", stats.test_coverage);
        let _ = writeln!(out);
    }

    if let Some(memory) = &result.memory_metrics {
        let _ = writeln!(out, "{}", "Memory Profile:".cyan().bold());
        let _ = writeln!(out, "  Heap Size: {}", format_mb(memory.heap_size));
        let _ = writeln!(out, "  Allocated: {}", format_mb(memory.allocated_mem));
        let _ = writeln!(out, "  GC Runs: {}", memory.gc_count);
        let _ = writeln!(out);
    }

    if let Some(network) = &result.network_metrics {
        let _ = writeln!(out, "{}", "Network Metrics:".cyan().bold());
        let _ = writeln!(out, "  Requests: {}", network.request_count);
        let _ = writeln!(out, "  Avg Latency: {:.2} ms", network.avg_latency);
        let _ = writeln!(out, "  Error Rate: {:.2}%", network.error_rate);
        let _ = writeln!(out);
    }

    out
}
