mod ext;
mod parse;
mod report;
mod stats;
mod write;

use std::{fs, path::PathBuf, process};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};

const RESULTS_HELP: &str = "\
Where RESULTS is the output of the mimalloc-bench benchmark script, i.e.
mimalloc-bench/out/bench/benchres.csv

One bencher.dev.<allocator>.json file is written to the working directory for
each allocator in RESULTS, for submission to bencher.dev.";

/// Converts benchmark results into bencher.dev reports, one per allocator.
#[derive(Parser)]
#[command(version, about, after_help = RESULTS_HELP)]
struct Args {
  /// Results file, with lines of the form
  /// `<benchmark> <allocator> <[minutes:]seconds> <memory>`.
  results: PathBuf,
}

fn main() -> Result<()> {
  let args = match Args::try_parse() {
    Ok(args) => args,
    Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
    Err(err) => {
      print!("{}", err.render());
      println!();
      println!("{RESULTS_HELP}");
      process::exit(1);
    }
  };

  let text = fs::read_to_string(&args.results).with_context(|| format!("read {:?}", args.results))?;
  let results = parse::parse_results(&text).context("parse")?;
  let allocators = report::allocators(&results);

  eprintln!(
    "parsed {} records ({} benchmarks, {} allocators)",
    results.records.len(),
    results.benchmarks.len(),
    allocators.len()
  );

  let report = report::build(&results);

  for allocator in allocators {
    let path = write::write_report(".", allocator, &report).with_context(|| format!("report {allocator}"))?;

    println!("Output written to {}", path.display());
  }

  Ok(())
}
