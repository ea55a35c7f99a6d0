use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::stats::Report;

/// Name of the report file bencher.dev picks up for an allocator.
pub fn file_name(allocator: &str) -> String {
  format!("bencher.dev.{allocator}.json")
}

/// Renders a report as JSON indented by two spaces.
pub fn render(report: &Report) -> Result<String> {
  serde_json::to_string_pretty(report).context("to_string_pretty")
}

/// Writes the report for `allocator` into `dir`, replacing any previous report,
/// and returns the path written to.
pub fn write_report<P: AsRef<Path>>(dir: P, allocator: &str, report: &Report) -> Result<PathBuf> {
  let path = dir.as_ref().join(file_name(allocator));

  fs::write(&path, render(report)?).with_context(|| format!("write {path:?}"))?;

  Ok(path)
}
