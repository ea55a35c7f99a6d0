use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

/// `<benchmark> <allocator> <[minutes:]seconds> <memory>`, anything after the
/// memory column is ignored.
const LINE_PATTERN: &str = r"^([^ ]+) +([^ ]+) +([0-9:.]+) +([0-9]+)";

/// A single benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
  pub benchmark: String,
  pub allocator: String,
  /// Elapsed wall-clock time, in seconds.
  pub time: f64,
  /// Peak memory, in whatever unit the results file uses.
  pub memory: u64,
}

/// Every record in a results file, along with the names of all benchmarks
/// that appear in it.
#[derive(Debug, Default)]
pub struct Results {
  pub records: Vec<Record>,
  pub benchmarks: BTreeSet<String>,
}

/// Decodes a `[minutes:]seconds` time into seconds.
///
/// # Errors
///
/// This will return an error if:
/// - the token has more than one `:`.
/// - either part is not a number.
pub fn parse_time(token: &str) -> Result<f64> {
  match token.split(':').collect::<Vec<_>>().as_slice() {
    [seconds] => seconds.parse().with_context(|| format!("seconds {seconds:?}")),
    [minutes, seconds] => {
      let minutes: u64 = minutes.parse().with_context(|| format!("minutes {minutes:?}"))?;
      let seconds: f64 = seconds.parse().with_context(|| format!("seconds {seconds:?}"))?;

      Ok(minutes as f64 * 60.0 + seconds)
    }
    _ => anyhow::bail!("unsupported time format {token:?}"),
  }
}

/// Parses a single line. Lines that don't look like a result (headers, blank
/// lines, ...) return `Ok(None)`.
fn parse_line(pattern: &Regex, line: &str) -> Result<Option<Record>> {
  let Some(captures) = pattern.captures(line) else {
    return Ok(None);
  };

  let time = parse_time(&captures[3]).context("time")?;
  let memory = captures[4]
    .parse()
    .with_context(|| format!("memory {:?}", &captures[4]))?;

  Ok(Some(Record {
    benchmark: captures[1].to_string(),
    allocator: captures[2].to_string(),
    time,
    memory,
  }))
}

/// Parses the contents of a results file.
pub fn parse_results(text: &str) -> Result<Results> {
  let pattern = Regex::new(LINE_PATTERN).context("line pattern")?;
  let mut results = Results::default();

  for (i, line) in text.lines().enumerate() {
    let Some(record) = parse_line(&pattern, line).with_context(|| format!("line {}", i + 1))? else {
      continue;
    };

    results.benchmarks.insert(record.benchmark.clone());
    results.records.push(record);
  }

  Ok(results)
}
