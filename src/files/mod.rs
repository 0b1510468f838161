//! File driver for trac2md.
//!
//! This module handles:
//! - Deriving an output path from an input path
//! - Whole-file read / convert / whole-file write per input

use crate::error::{Result, Trac2mdError};
use crate::rules::RuleSet;
use std::path::{Path, PathBuf};

/// Derive the output path for an input path.
///
/// A trailing `.txt` is replaced with `.md`; any other name gets `.md`
/// appended. So `Foo.txt` becomes `Foo.md` and `Foo.wiki` becomes
/// `Foo.wiki.md`.
pub fn output_path(input: &Path) -> PathBuf {
	let input_str = input.to_string_lossy();
	match input_str.strip_suffix(".txt") {
		Some(stem) => PathBuf::from(format!("{stem}.md")),
		None => PathBuf::from(format!("{input_str}.md")),
	}
}

/// Convert one file: read it in full, run the rule set, write the result.
///
/// The output file is overwritten in full. Any I/O failure is fatal to the
/// caller; there is no partial write or retry.
pub fn convert_file(rules: &RuleSet, input: &Path, output: &Path) -> Result<()> {
	let wiki = std::fs::read_to_string(input).map_err(|source| Trac2mdError::ReadError {
		path: input.to_path_buf(),
		source,
	})?;

	let markdown = rules.convert(&wiki);

	std::fs::write(output, markdown).map_err(|source| Trac2mdError::WriteError {
		path: output.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_output_path_txt_suffix_replaced() {
		assert_eq!(output_path(Path::new("Foo.txt")), PathBuf::from("Foo.md"));
	}

	#[test]
	fn test_output_path_other_suffix_appended() {
		assert_eq!(
			output_path(Path::new("Foo.wiki")),
			PathBuf::from("Foo.wiki.md")
		);
	}

	#[test]
	fn test_output_path_no_extension() {
		assert_eq!(output_path(Path::new("README")), PathBuf::from("README.md"));
	}

	#[test]
	fn test_output_path_keeps_directory() {
		assert_eq!(
			output_path(Path::new("docs/Page.txt")),
			PathBuf::from("docs/Page.md")
		);
	}

	#[test]
	fn test_convert_file_writes_markdown() {
		let temp_dir = tempfile::tempdir().unwrap();
		let input = temp_dir.path().join("Page.txt");
		let output = temp_dir.path().join("Page.md");
		std::fs::write(&input, "== Section ==\n").unwrap();

		let rules = RuleSet::compile().unwrap();
		convert_file(&rules, &input, &output).unwrap();

		assert_eq!(std::fs::read_to_string(&output).unwrap(), "## Section\n");
	}

	#[test]
	fn test_convert_file_overwrites_existing_output() {
		let temp_dir = tempfile::tempdir().unwrap();
		let input = temp_dir.path().join("Page.txt");
		let output = temp_dir.path().join("Page.md");
		std::fs::write(&input, "plain\n").unwrap();
		std::fs::write(&output, "stale contents\n").unwrap();

		let rules = RuleSet::compile().unwrap();
		convert_file(&rules, &input, &output).unwrap();

		assert_eq!(std::fs::read_to_string(&output).unwrap(), "plain\n");
	}

	#[test]
	fn test_convert_file_missing_input() {
		let temp_dir = tempfile::tempdir().unwrap();
		let input = temp_dir.path().join("absent.txt");
		let output = temp_dir.path().join("absent.md");

		let rules = RuleSet::compile().unwrap();
		let result = convert_file(&rules, &input, &output);

		match result.unwrap_err() {
			Trac2mdError::ReadError { path, .. } => assert_eq!(path, input),
			other => panic!("Expected ReadError, got: {other:?}"),
		}
		assert!(!output.exists());
	}
}
