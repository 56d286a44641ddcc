use super::locator::{AnchorRange, locate};
use super::record::GradleConfig;
use crate::error::{Result, SolutionistError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub const TOOL_NAME: &str = "Solutionist";
pub const FENCE_OPEN: &str = "/******************************************";
pub const FENCE_RULE: &str = " ******************************************";
pub const FENCE_CLOSE: &str = " ******************************************/";

/// What a patch run did to the build file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub range: AnchorRange,
    pub line_count: usize,
    pub missing_anchors: Vec<&'static str>,
}

/// The generated configuration block.
///
/// Values are quoted verbatim; a `'` inside a value ends up unescaped in the output.
pub fn render_block(config: &GradleConfig, version_tag: &str) -> Vec<String> {
    vec![
        FENCE_OPEN.to_string(),
        format!(" Generated by {TOOL_NAME} {version_tag}"),
        FENCE_CLOSE.to_string(),
        format!("version     '{}'", config.version),
        format!("group       '{}'", config.group),
        format!("description '{}'", config.description),
        String::new(),
        "apply plugin: 'solution'".to_string(),
        String::new(),
        "solution {".to_string(),
        format!("    internalProjectName '{}'", config.internal_project_name),
        format!("    customerName '{}'", config.customer_name),
        format!("    projectFullName '{}'", config.project_full_name),
        format!("    tasVersion '{}'", config.tas_version),
        format!("    isXfgProject {}", config.is_xfg_project),
        format!("    testCase '{}'", config.test_case),
        format!(
            "    customerReferenceNumber '{}'",
            config.customer_reference_number
        ),
        format!("    uniqueId '{}'", config.unique_id),
        format!("    projectType '{}'", config.project_type),
        "}".to_string(),
        String::new(),
        FENCE_OPEN.to_string(),
        format!(" Commented out by {TOOL_NAME} {version_tag}"),
        FENCE_RULE.to_string(),
    ]
}

/// Head, generated block, fenced old region, closing fence, blank line, tail.
pub fn assemble<S: AsRef<str>>(lines: &[S], range: &AnchorRange, block: &[String]) -> Vec<String> {
    let start = range.start.min(lines.len());
    let end = range.effective_end().min(lines.len());

    let mut output = Vec::with_capacity(lines.len() + block.len() + 2);
    output.extend(lines[..start].iter().map(|line| line.as_ref().to_string()));
    output.extend(block.iter().cloned());
    output.extend(lines[start..end].iter().map(|line| line.as_ref().to_string()));
    output.push(FENCE_CLOSE.to_string());
    output.push(String::new());
    output.extend(lines[end..].iter().map(|line| line.as_ref().to_string()));
    output
}

/// Patches text in memory and returns the new content with the range that was used.
pub fn patch_text(content: &str, config: &GradleConfig, version_tag: &str) -> (String, AnchorRange) {
    let lines: Vec<&str> = content.split('\n').collect();
    let range = locate(&lines);
    let block = render_block(config, version_tag);
    (assemble(&lines, &range, &block).join("\n"), range)
}

/// Rewrites the build file at `path` in place.
pub fn patch_file(path: &Path, config: &GradleConfig, version_tag: &str) -> Result<PatchOutcome> {
    let content = fs::read_to_string(path).map_err(|source| SolutionistError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("{}", t!("gradle.patch.analyzing", path = path.display()));
    let (patched, range) = patch_text(&content, config, version_tag);
    debug!("{}", t!("gradle.patch.start_found", line = range.start));
    debug!("{}", t!("gradle.patch.end_found", line = range.end));

    let missing_anchors = range.missing_tokens();
    if !missing_anchors.is_empty() {
        warn!(
            "{}",
            t!("gradle.patch.anchor_missing", tokens = missing_anchors.join(", "))
        );
    }
    if range.is_inverted() {
        warn!(
            "{}",
            t!("gradle.patch.anchor_inverted", start = range.start, end = range.end)
        );
    }

    write_atomically(path, patched.as_bytes()).map_err(|source| SolutionistError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PatchOutcome {
        range,
        line_count: patched.split('\n').count(),
        missing_anchors,
    })
}

/// Writes to a sibling temp file and renames it over `path`, keeping its permissions.
///
/// Symlinks are resolved first, so the link stays and its target gets the new content.
fn write_atomically(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), permissions)?;
    temp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
