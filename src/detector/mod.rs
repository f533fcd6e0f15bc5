use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

mod javascript;

pub use javascript::{detect_build_tool, detect_framework};

use crate::error::PmonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    JavaScript,
    Go,
    Python,
    Java,
    Unknown,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::JavaScript => "JavaScript",
            Self::Go => "Go",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// Classification of a project directory. Built once per run by
/// [`detect_project`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub framework: String,
    pub build_tool: String,
    pub language: String,
    pub dependencies: HashMap<String, String>,
    pub scripts: HashMap<String, String>,
    pub root_path: PathBuf,
}

struct MarkerRule {
    markers: &'static [&'static str],
    project_type: ProjectType,
}

// Evaluated in order, first match wins. Deliberately not configurable and
// limited to the project root; subdirectories are never probed.
const MARKER_RULES: &[MarkerRule] = &[
    MarkerRule {
        markers: &["package.json"],
        project_type: ProjectType::JavaScript,
    },
    MarkerRule {
        markers: &["go.mod"],
        project_type: ProjectType::Go,
    },
    MarkerRule {
        markers: &["requirements.txt", "pyproject.toml"],
        project_type: ProjectType::Python,
    },
    MarkerRule {
        markers: &["pom.xml", "build.gradle"],
        project_type: ProjectType::Java,
    },
];

/// Classifies the project at `root` from its marker files.
///
/// Detection either fully succeeds or fails; a partially populated
/// `ProjectInfo` is never returned.
pub fn detect_project(root: &Path) -> Result<ProjectInfo, PmonError> {
    let rule = MARKER_RULES
        .iter()
        .find(|rule| rule.markers.iter().any(|marker| has_file(root, marker)))
        .ok_or_else(|| {
            PmonError::DetectionError(
                "unknown project type - no recognized project files found".to_string(),
            )
        })?;

    debug!("marker rule matched: {}", rule.project_type);

    match rule.project_type {
        ProjectType::JavaScript => javascript::detect(root),
        ProjectType::Go => Ok(go_project(root)),
        ProjectType::Python => Ok(plain_project(root, ProjectType::Python, "Python")),
        ProjectType::Java => Ok(plain_project(root, ProjectType::Java, "Java")),
        ProjectType::Unknown => Err(PmonError::DetectionError(
            "marker rule resolved to an unknown type".to_string(),
        )),
    }
}

fn go_project(root: &Path) -> ProjectInfo {
    // No go.mod parsing; the labels are fixed.
    ProjectInfo {
        project_type: ProjectType::Go,
        framework: "Standard Library".to_string(),
        build_tool: "Go Build".to_string(),
        language: "Go".to_string(),
        dependencies: HashMap::new(),
        scripts: HashMap::new(),
        root_path: root.to_path_buf(),
    }
}

// Python and Java classify on marker presence alone. Framework and build-tool
// detection there (Django/Flask/FastAPI, Maven/Gradle) is a future extension.
fn plain_project(root: &Path, project_type: ProjectType, language: &str) -> ProjectInfo {
    ProjectInfo {
        project_type,
        framework: String::new(),
        build_tool: String::new(),
        language: language.to_string(),
        dependencies: HashMap::new(),
        scripts: HashMap::new(),
        root_path: root.to_path_buf(),
    }
}

pub(crate) fn has_file(root: &Path, name: &str) -> bool {
    root.join(name).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_go_project_detection() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("go.mod"), "module example.com/app\n").unwrap();

        let info = detect_project(temp_dir.path()).unwrap();

        assert_eq!(info.project_type, ProjectType::Go);
        assert_eq!(info.framework, "Standard Library");
        assert_eq!(info.build_tool, "Go Build");
        assert_eq!(info.language, "Go");
        assert_eq!(info.root_path, temp_dir.path());
    }

    #[test]
    fn test_python_project_detection() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pyproject.toml"), "[tool.poetry]\n").unwrap();

        let info = detect_project(temp_dir.path()).unwrap();

        assert_eq!(info.project_type, ProjectType::Python);
        assert_eq!(info.language, "Python");
        assert!(info.framework.is_empty());
        assert!(info.build_tool.is_empty());
    }

    #[test]
    fn test_java_project_detection() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("build.gradle"), "plugins {}\n").unwrap();

        let info = detect_project(temp_dir.path()).unwrap();

        assert_eq!(info.project_type, ProjectType::Java);
        assert_eq!(info.language, "Java");
    }

    #[test]
    fn test_unrecognized_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.md"), "# nothing to see\n").unwrap();

        let err = detect_project(temp_dir.path()).unwrap_err();
        assert!(matches!(err, PmonError::DetectionError(_)));
    }

    #[test]
    fn test_package_json_wins_over_go_mod() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("go.mod"), "module example.com/app\n").unwrap();
        fs::write(
            temp_dir.path().join("package.json"),
            r#"{"dependencies": {}, "scripts": {}}"#,
        )
        .unwrap();

        let info = detect_project(temp_dir.path()).unwrap();
        assert_eq!(info.project_type, ProjectType::JavaScript);
    }
}
