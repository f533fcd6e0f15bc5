pub mod analyzer;
pub mod cli;
pub mod detector;
pub mod error;
pub mod reporter;

// Re-export commonly used types
pub use analyzer::{run_analysis, AnalysisResult, BuildMetrics, BuildMetricsProvider, MockBuildMetrics};
pub use cli::{AnalysisConfig, Cli, ReportFormat};
pub use detector::{detect_project, ProjectInfo, ProjectType};
pub use error::PmonError;
pub use reporter::generate_report;
