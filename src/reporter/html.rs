use humantime::format_duration;
use std::fs;
use std::path::{Path, PathBuf};

use super::format_mb;
use crate::analyzer::AnalysisResult;
use crate::error::PmonError;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Performance Report - {type}</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; background-color: #f5f5f5; }
        .container { max-width: 800px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .header { background: #2c3e50; color: white; padding: 20px; border-radius: 8px; margin-bottom: 20px; }
        .metric-section { margin: 20px 0; }
        .metric-card { background: #f8f9fa; padding: 15px; border-radius: 6px; margin: 10px 0; }
        .metric-value { font-size: 1.5em; font-weight: bold; color: #3498db; }
        .metric-label { color: #7f8c8d; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Performance Analysis Report</h1>
            <p>Project: {type} ({framework})</p>
            <p>Generated: {timestamp}</p>
        </div>
{sections}    </div>
</body>
</html>
"#;

pub(super) fn write_report(result: &AnalysisResult, dir: &Path) -> Result<PathBuf, PmonError> {
    let page = PAGE_TEMPLATE
        .replace("{type}", &result.project_info.project_type.to_string())
        .replace("{framework}", &result.project_info.framework)
        .replace("{timestamp}", &result.timestamp.to_rfc3339())
        .replace("{sections}", &render_sections(result));

    let path = dir.join(super::report_filename(result, "html"));
    fs::write(&path, page)?;
    Ok(path)
}

// One section per present metric category.
fn render_sections(result: &AnalysisResult) -> String {
    let mut sections = String::new();

    if let Some(build) = &result.build_metrics {
        sections.push_str(&metric_section(
            "Build Metrics",
            &[
                ("Build Time", format_duration(build.build_time).to_string()),
                ("Bundle Size", format_mb(build.bundle_size)),
                ("Dependencies", build.dependencies.to_string()),
            ],
        ));
    }

    if let Some(runtime) = &result.runtime_metrics {
        sections.push_str(&metric_section(
            "Runtime Metrics",
            &[
                (
                    "Startup Time",
                    format_duration(runtime.startup_time).to_string(),
                ),
                ("Memory Usage", format_mb(runtime.memory_usage)),
                ("CPU Usage", format!("{:.2}%", runtime.cpu_usage)),
            ],
        ));
    }

    if let Some(stats) = &result.static_metrics {
        sections.push_str(&metric_section(
            "Static Analysis",
            &[
                ("Lines of Code", stats.lines_of_code.to_string()),
                ("Complexity", stats.complexity.to_string()),
                ("Test Coverage", format!("{:.2}%", stats.test_coverage)),
            ],
        ));
    }

    if let Some(memory) = &result.memory_metrics {
        sections.push_str(&metric_section(
            "Memory Profile",
            &[
                ("Heap Size", format_mb(memory.heap_size)),
                ("Allocated", format_mb(memory.allocated_mem)),
                ("GC Runs", memory.gc_count.to_string()),
            ],
        ));
    }

    if let Some(network) = &result.network_metrics {
        sections.push_str(&metric_section(
            "Network Metrics",
            &[
                ("Requests", network.request_count.to_string()),
                ("Avg Latency", format!("{:.2} ms", network.avg_latency)),
                ("Error Rate", format!("{:.2}%", network.error_rate)),
            ],
        ));
    }

    sections
}

fn metric_section(title: &str, entries: &[(&str, String)]) -> String {
    let mut section = String::new();
    section.push_str("        <div class=\"metric-section\">\n");
    section.push_str(&format!("            <h3>{}</h3>\n", title));
    for (label, value) in entries {
        section.push_str("            <div class=\"metric-card\">\n");
        section.push_str(&format!(
            "                <div class=\"metric-label\">{}</div>\n",
            label
        ));
        section.push_str(&format!(
            "                <div class=\"metric-value\">{}</div>\n",
            value
        ));
        section.push_str("            </div>\n");
    }
    section.push_str("        </div>\n");
    section
}
