use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use trac2md_cli::files::{convert_file, output_path};
use trac2md_cli::rules::RuleSet;

#[derive(Parser)]
#[command(name = "trac2md")]
#[command(
	author,
	version,
	about = "Convert Trac wiki markup to GitHub Flavored Markdown"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Files to convert. Foo.txt writes Foo.md; Foo.wiki writes Foo.wiki.md.
	#[arg(value_name = "FILE", required = true)]
	files: Vec<PathBuf>,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let rules = RuleSet::compile().context("Failed to compile rule table")?;

	// Any failed file aborts the whole run; no partial-batch continuation.
	for input in &cli.files {
		let output = output_path(input);
		convert_file(&rules, input, &output)
			.with_context(|| format!("Failed to convert {}", input.display()))?;
		println!("{} -> {}", input.display(), output.display());
	}

	Ok(ExitCode::SUCCESS)
}
