use std::path::PathBuf;

/// Library-level structured errors for trac2md.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum Trac2mdError {
	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read input file: {path}")]
	ReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write output file: {path}")]
	WriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using Trac2mdError.
pub type Result<T> = std::result::Result<T, Trac2mdError>;
