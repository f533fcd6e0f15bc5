use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::AnalysisResult;
use crate::error::PmonError;

pub(super) fn write_report(result: &AnalysisResult, dir: &Path) -> Result<PathBuf, PmonError> {
    let path = dir.join(super::report_filename(result, "json"));
    let json = serde_json::to_string_pretty(result)?;
    fs::write(&path, json)?;
    Ok(path)
}
