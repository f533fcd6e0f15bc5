use std::time::Duration;

use super::BuildMetrics;
use crate::detector::{ProjectInfo, ProjectType};

/// Source of build metrics for a classified project.
///
/// This is the seam where real build instrumentation plugs in: invoke the
/// project's build, measure wall-clock time and artifact size, collect
/// compiler warnings. The only shipped implementation is [`MockBuildMetrics`].
pub trait BuildMetricsProvider {
    fn build_metrics(&self, project: &ProjectInfo) -> BuildMetrics;

    /// Short label for where the numbers come from, surfaced to the user so
    /// placeholder values are never mistaken for measurements.
    fn label(&self) -> &str;
}

/// Placeholder provider returning fixed per-language estimates. The
/// dependency count is the only real figure, copied from the classification.
pub struct MockBuildMetrics;

impl BuildMetricsProvider for MockBuildMetrics {
    fn build_metrics(&self, project: &ProjectInfo) -> BuildMetrics {
        let (build_time, bundle_size) = match project.project_type {
            ProjectType::Go => (Duration::from_secs(2), 10 * 1024 * 1024),
            _ => (Duration::from_secs(5), 1024 * 1024),
        };

        BuildMetrics {
            build_time,
            bundle_size,
            dependencies: project.dependencies.len(),
            warnings: Vec::new(),
        }
    }

    fn label(&self) -> &str {
        "estimated"
    }
}
