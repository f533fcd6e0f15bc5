use crate::error::PmonError;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report on stdout
    Console,
    /// Timestamped JSON file in the working directory
    Json,
    /// Timestamped HTML file in the working directory
    Html,
}

impl ReportFormat {
    /// Parses a format name the way the CLI does, for callers that carry
    /// the format as a plain string.
    pub fn from_name(name: &str) -> Result<Self, PmonError> {
        match name {
            "console" => Ok(Self::Console),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            other => Err(PmonError::UnsupportedFormatError(other.to_string())),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pmon")]
#[command(about = "Performance monitor for software projects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Run all performance analysis
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Build performance analysis
    #[arg(short = 'b', long)]
    pub build: bool,

    /// Runtime performance analysis
    #[arg(short = 'r', long)]
    pub runtime: bool,

    /// Static code analysis
    #[arg(short = 's', long = "static")]
    pub static_analysis: bool,

    /// Memory profiling
    #[arg(short = 'm', long)]
    pub memory: bool,

    /// Network analysis
    #[arg(short = 'n', long)]
    pub network: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "console")]
    pub output: ReportFormat,

    /// Monitoring duration
    #[arg(long, default_value = "10s")]
    pub duration: String,

    /// Continuous monitoring
    #[arg(long)]
    pub watch: bool,

    /// CI-friendly output
    #[arg(long)]
    pub ci: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Immutable per-run configuration, built once from the parsed CLI and passed
/// by reference into the analyzer and reporter.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub all: bool,
    pub build: bool,
    pub runtime: bool,
    pub static_analysis: bool,
    pub memory: bool,
    pub network: bool,
    pub output: ReportFormat,
    pub duration: String,
    pub watch: bool,
    pub ci: bool,
}

impl AnalysisConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let any_category =
            cli.build || cli.runtime || cli.static_analysis || cli.memory || cli.network;

        Self {
            // No category flag means "analyze everything"
            all: cli.all || !any_category,
            build: cli.build,
            runtime: cli.runtime,
            static_analysis: cli.static_analysis,
            memory: cli.memory,
            network: cli.network,
            output: cli.output,
            duration: cli.duration.clone(),
            watch: cli.watch,
            ci: cli.ci,
        }
    }

    pub fn wants_build(&self) -> bool {
        self.all || self.build
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_defaults_to_all() {
        let cli = Cli::try_parse_from(["pmon"]).unwrap();
        let config = AnalysisConfig::from_cli(&cli);

        assert!(config.all);
        assert!(config.wants_build());
        assert_eq!(config.output, ReportFormat::Console);
        assert_eq!(config.duration, "10s");
    }

    #[test]
    fn test_single_category_disables_all() {
        let cli = Cli::try_parse_from(["pmon", "-r"]).unwrap();
        let config = AnalysisConfig::from_cli(&cli);

        assert!(!config.all);
        assert!(config.runtime);
        assert!(!config.wants_build());
    }

    #[test]
    fn test_build_flag_requests_build_metrics() {
        let cli = Cli::try_parse_from(["pmon", "--build"]).unwrap();
        let config = AnalysisConfig::from_cli(&cli);

        assert!(!config.all);
        assert!(config.wants_build());
    }

    #[test]
    fn test_output_format_flag() {
        let cli = Cli::try_parse_from(["pmon", "--output", "json"]).unwrap();
        assert_eq!(cli.output, ReportFormat::Json);

        assert!(Cli::try_parse_from(["pmon", "--output", "xml"]).is_err());
    }

    #[test]
    fn test_format_from_name_rejects_unknown() {
        assert_eq!(ReportFormat::from_name("html").unwrap(), ReportFormat::Html);

        let err = ReportFormat::from_name("xml").unwrap_err();
        assert!(matches!(err, PmonError::UnsupportedFormatError(ref f) if f == "xml"));
    }
}
