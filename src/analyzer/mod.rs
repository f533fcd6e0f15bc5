use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

mod provider;

pub use provider::{BuildMetricsProvider, MockBuildMetrics};

use crate::cli::AnalysisConfig;
use crate::detector::{ProjectInfo, ProjectType};
use crate::error::PmonError;

/// Outcome of one analysis run. Each metric section is present only if its
/// category was actually analyzed; `None` means "not measured", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub project_info: ProjectInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_metrics: Option<BuildMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_metrics: Option<RuntimeMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_metrics: Option<StaticMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_metrics: Option<MemoryMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_metrics: Option<NetworkMetrics>,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildMetrics {
    #[serde(with = "humantime_serde")]
    pub build_time: Duration,
    pub bundle_size: u64,
    pub dependencies: usize,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeMetrics {
    #[serde(with = "humantime_serde")]
    pub startup_time: Duration,
    pub memory_usage: u64,
    pub cpu_usage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticMetrics {
    pub lines_of_code: usize,
    pub complexity: u32,
    pub test_coverage: f64,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetrics {
    pub heap_size: u64,
    pub allocated_mem: u64,
    pub gc_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    pub request_count: u64,
    pub avg_latency: f64,
    pub error_rate: f64,
}

/// Runs the requested analysis categories against a classified project.
///
/// Only build metrics have a provider today; the runtime, static, memory and
/// network categories are accepted on the CLI but their sections stay absent
/// until a provider for them exists.
pub fn run_analysis(
    project: &ProjectInfo,
    config: &AnalysisConfig,
    provider: &dyn BuildMetricsProvider,
) -> Result<AnalysisResult, PmonError> {
    let mut result = AnalysisResult {
        project_info: project.clone(),
        build_metrics: None,
        runtime_metrics: None,
        static_metrics: None,
        memory_metrics: None,
        network_metrics: None,
        timestamp: Local::now(),
    };

    match project.project_type {
        ProjectType::JavaScript | ProjectType::Go => {
            if config.wants_build() {
                debug!(
                    "collecting {} build metrics from provider '{}'",
                    project.project_type,
                    provider.label()
                );
                result.build_metrics = Some(provider.build_metrics(project));
            }
        }
        // Python has no metrics provider yet; the result carries no sections.
        ProjectType::Python => {}
        other => return Err(PmonError::UnsupportedTypeError(other.to_string())),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{AnalysisConfig, Cli};
    use clap::Parser;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(args: &[&str]) -> AnalysisConfig {
        AnalysisConfig::from_cli(&Cli::try_parse_from(args).unwrap())
    }

    fn sample_project(project_type: ProjectType, dep_count: usize) -> ProjectInfo {
        let dependencies = (0..dep_count)
            .map(|i| (format!("dep-{}", i), "1.0.0".to_string()))
            .collect::<HashMap<_, _>>();

        ProjectInfo {
            project_type,
            framework: "React".to_string(),
            build_tool: "Vite".to_string(),
            language: project_type.to_string(),
            dependencies,
            scripts: HashMap::new(),
            root_path: PathBuf::from("/tmp/project"),
        }
    }

    #[test]
    fn test_javascript_build_metrics() {
        let project = sample_project(ProjectType::JavaScript, 12);
        let result = run_analysis(&project, &config_from(&["pmon"]), &MockBuildMetrics).unwrap();

        let build = result.build_metrics.expect("build metrics present");
        assert_eq!(build.build_time, Duration::from_secs(5));
        assert_eq!(build.bundle_size, 1024 * 1024);
        assert_eq!(build.dependencies, 12);
        assert!(build.warnings.is_empty());

        assert!(result.runtime_metrics.is_none());
        assert!(result.static_metrics.is_none());
        assert!(result.memory_metrics.is_none());
        assert!(result.network_metrics.is_none());
    }

    #[test]
    fn test_go_build_metrics() {
        let project = sample_project(ProjectType::Go, 0);
        let result = run_analysis(&project, &config_from(&["pmon"]), &MockBuildMetrics).unwrap();

        let build = result.build_metrics.expect("build metrics present");
        assert_eq!(build.build_time, Duration::from_secs(2));
        assert_eq!(build.bundle_size, 10 * 1024 * 1024);
        assert_eq!(build.dependencies, 0);
    }

    #[test]
    fn test_python_has_no_metric_sections() {
        let project = sample_project(ProjectType::Python, 3);
        let result = run_analysis(&project, &config_from(&["pmon"]), &MockBuildMetrics).unwrap();

        assert!(result.build_metrics.is_none());
        assert!(result.runtime_metrics.is_none());
        assert!(result.static_metrics.is_none());
        assert!(result.memory_metrics.is_none());
        assert!(result.network_metrics.is_none());
    }

    #[test]
    fn test_unsupported_type_names_the_type() {
        let project = sample_project(ProjectType::Java, 0);
        let err =
            run_analysis(&project, &config_from(&["pmon"]), &MockBuildMetrics).unwrap_err();

        assert!(matches!(err, PmonError::UnsupportedTypeError(ref t) if t == "Java"));
    }

    #[test]
    fn test_build_metrics_skipped_when_not_requested() {
        let project = sample_project(ProjectType::JavaScript, 5);
        let result =
            run_analysis(&project, &config_from(&["pmon", "-r"]), &MockBuildMetrics).unwrap();

        assert!(result.build_metrics.is_none());
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let project = sample_project(ProjectType::JavaScript, 4);
        let result = run_analysis(&project, &config_from(&["pmon"]), &MockBuildMetrics).unwrap();

        let json = serde_json::to_string_pretty(&result).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.build_metrics, result.build_metrics);
        assert_eq!(parsed.runtime_metrics, result.runtime_metrics);
        assert_eq!(parsed.project_info, result.project_info);

        // Absent sections are omitted entirely, not serialized as null.
        assert!(!json.contains("runtime_metrics"));
        assert!(!json.contains("network_metrics"));
    }
}
