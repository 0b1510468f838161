//! The fixed Trac-to-Markdown substitution table.
//!
//! Order is a hard contract: every rule runs over the output of the rules
//! before it, so reordering changes the result. Each entry is a regex pattern
//! and a `$n` replacement template; patterns that use `.` carry the `(?s)`
//! flag so block constructs spanning newlines match as one unit.

/// The ordered (pattern, replacement) rule list, applied top to bottom.
pub const RULES: &[(&str, &str)] = &[
	// Fenced blocks opened by a #!lang shebang on the line after {{{
	(r"(?s)\{\{\{\s*?[\n\r]{1,2}#!([a-z/]+)(.*?)\}\}\}", "```$1$2```"),
	// Single-line {{{...}}} spans become inline code
	(r"\{\{\{([^\n]*?)\}\}\}", "`$1`"),
	// Remaining (multi-line) {{{...}}} spans become plain fences
	(r"(?s)\{\{\{(.*?)\}\}\}", "```$1```"),
	// Headings, longest marker first so ==== is not eaten by the = rule
	(r"====\s([^\n]+?)\s====(\s*[\n\r]+)", "#### $1$2"),
	(r"===\s([^\n]+?)\s===(\s*[\n\r]+)", "### $1$2"),
	(r"==\s([^\n]+?)\s==(\s*[\n\r]+)", "## $1$2"),
	(r"=\s([^\n]+?)\s=(\s*[\n\r]+)", "# $1$2"),
	// CamelCase wiki-link escapes: !FooBar -> FooBar
	(r"!(([A-Z][a-z0-9]+){2,})", "$1"),
	// Emphasis: triple-quote bold before double-quote italic, so a '''
	// span is not half-consumed as two '' spans. Greedy across newlines,
	// matching the original tool.
	(r"(?s)'''(.+)'''", "*$1*"),
	(r"(?s)''(.+)''", "_${1}_"),
	// Bullet marker. Known limitation kept from the original: anchored at
	// the start of the whole buffer, not at every line start.
	(r"^\s\*", "*"),
	// Strip any remaining ! auto-link escapes before a word character
	(r"!(\w)", "$1"),
];
