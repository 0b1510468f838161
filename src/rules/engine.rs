use crate::error::{Result, Trac2mdError};
use crate::rules::table::RULES;
use regex::Regex;

/// One compiled substitution rule.
#[derive(Debug)]
pub struct CompiledRule {
	/// The pattern to match, compiled once at startup.
	pub pattern: Regex,

	/// The `$n` replacement template.
	pub replacement: &'static str,
}

/// The full rule table, compiled and ready to apply.
///
/// A `RuleSet` holds no mutable state: `convert` is pure, so one set can be
/// reused across any number of files.
#[derive(Debug)]
pub struct RuleSet {
	rules: Vec<CompiledRule>,
}

impl RuleSet {
	/// Compile the fixed rule table.
	pub fn compile() -> Result<Self> {
		let rules = RULES
			.iter()
			.map(|&(pattern, replacement)| {
				Ok(CompiledRule {
					pattern: compile_regex(pattern)?,
					replacement,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(RuleSet { rules })
	}

	/// Convert one document from Trac wiki markup to Markdown.
	///
	/// Applies every rule in declaration order as a global substitution over
	/// the whole text. Deterministic and I/O-free.
	pub fn convert(&self, input: &str) -> String {
		let mut text = input.to_string();
		for rule in &self.rules {
			text = rule.pattern.replace_all(&text, rule.replacement).into_owned();
		}
		text
	}
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| Trac2mdError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}
