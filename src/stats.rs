use std::collections::BTreeMap;

use serde::Serialize;

/// Mean, maximum and minimum of a set of samples, in the shape bencher.dev
/// expects for a single measure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Stats {
  pub value: f64,
  pub high_value: f64,
  pub low_value: f64,
}

/// Statistics for a single benchmark.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Benchmark {
  pub memory: Stats,
  pub time: Stats,
}

/// Benchmark name to statistics, meant to represent the results of a single
/// allocator.
pub type Report = BTreeMap<String, Benchmark>;
