use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{has_file, ProjectInfo, ProjectType};
use crate::error::PmonError;

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: HashMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: HashMap<String, String>,
    #[serde(default)]
    scripts: HashMap<String, String>,
}

// Dependency-key checks, first match wins.
const FRAMEWORK_RULES: &[(&str, &str)] = &[
    ("next", "Next.js"),
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("svelte", "Svelte"),
];

enum BuildToolCheck {
    ConfigFile(&'static [&'static str]),
    DependencyKey(&'static str),
}

const BUILD_TOOL_RULES: &[(BuildToolCheck, &str)] = &[
    (
        BuildToolCheck::ConfigFile(&["vite.config.js", "vite.config.ts"]),
        "Vite",
    ),
    (
        BuildToolCheck::ConfigFile(&["webpack.config.js", "webpack.config.ts"]),
        "Webpack",
    ),
    (BuildToolCheck::DependencyKey("parcel"), "Parcel"),
    (BuildToolCheck::ConfigFile(&["rollup.config.js"]), "Rollup"),
];

/// Populates a JavaScript classification from package.json. An unreadable or
/// malformed manifest fails the whole detection call.
pub(super) fn detect(root: &Path) -> Result<ProjectInfo, PmonError> {
    let manifest_path = root.join("package.json");
    let content = fs::read_to_string(&manifest_path)
        .map_err(|e| PmonError::DetectionError(format!("error reading package.json: {}", e)))?;
    let manifest: PackageJson = serde_json::from_str(&content)
        .map_err(|e| PmonError::DetectionError(format!("error parsing package.json: {}", e)))?;

    // devDependencies is applied last, so it wins a key collision.
    let mut dependencies = manifest.dependencies;
    dependencies.extend(manifest.dev_dependencies);

    let framework = detect_framework(&dependencies);
    let build_tool = detect_build_tool(root, &dependencies);

    Ok(ProjectInfo {
        project_type: ProjectType::JavaScript,
        framework,
        build_tool,
        language: "JavaScript".to_string(),
        dependencies,
        scripts: manifest.scripts,
        root_path: root.to_path_buf(),
    })
}

/// Guesses the UI framework from declared dependency names. Versions and
/// monorepo nesting are ignored; ties resolve by rule order.
pub fn detect_framework(deps: &HashMap<String, String>) -> String {
    FRAMEWORK_RULES
        .iter()
        .find(|(key, _)| deps.contains_key(*key))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| "Vanilla JavaScript".to_string())
}

/// Guesses the bundler from companion config files, with a dependency-key
/// check for Parcel, which has no config file of its own.
pub fn detect_build_tool(root: &Path, deps: &HashMap<String, String>) -> String {
    for (check, label) in BUILD_TOOL_RULES {
        let matched = match check {
            BuildToolCheck::ConfigFile(names) => names.iter().any(|name| has_file(root, name)),
            BuildToolCheck::DependencyKey(name) => deps.contains_key(*name),
        };
        if matched {
            return label.to_string();
        }
    }
    "Unknown".to_string()
}
