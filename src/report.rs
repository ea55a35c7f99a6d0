use std::collections::BTreeSet;

use crate::{
  ext::SamplesExt,
  parse::Results,
  stats::{Benchmark, Report},
};

/// Returns every distinct allocator in the results.
pub fn allocators(results: &Results) -> BTreeSet<&str> {
  results.records.iter().map(|record| record.allocator.as_str()).collect()
}

/// Builds the report written for every allocator.
///
/// A benchmark's statistics cover all of its records, whatever their
/// allocator, so each report holds every benchmark in the results and reports
/// for different allocators in the same results file are identical.
pub fn build(results: &Results) -> Report {
  let mut report = Report::new();

  for benchmark in &results.benchmarks {
    let selected = results
      .records
      .iter()
      .filter(|record| &record.benchmark == benchmark)
      .collect::<Vec<_>>();

    let memory = selected.iter().map(|record| record.memory as f64).collect::<Vec<_>>();
    let time = selected.iter().map(|record| record.time).collect::<Vec<_>>();

    let (Some(memory), Some(time)) = (memory.summarize(), time.summarize()) else {
      continue;
    };

    report.insert(benchmark.clone(), Benchmark { memory, time });
  }

  report
}
